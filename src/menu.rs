use colored::Colorize;
use inquire::{InquireError, Text};

use crate::{error::AppError, form::SearchForm, github::ProfileSource, view::render};

/// Placeholder shown in the empty search field
const PLACEHOLDER: &str = "@usuario";

/// Runs interactive search form until the user leaves with Esc or Ctrl-C
pub async fn run_menu<S: ProfileSource>(source: &S) -> Result<(), AppError> {
    let mut form = SearchForm::new();

    loop {
        println!("\n{}\n", render(&form));

        let Some(raw) = prompt_username(form.input())? else {
            println!("{}", "quitting".yellow());
            break Ok(());
        };

        form.submit(source, &raw).await;
    }
}

/// Prompts for a username, `None` when the prompt was dismissed
fn prompt_username(initial: &str) -> Result<Option<String>, AppError> {
    let message: String = format!("{}", "usuário:".blue());
    let answer = Text::new(&message)
        .with_placeholder(PLACEHOLDER)
        .with_initial_value(initial)
        .prompt();

    match answer {
        Ok(raw) => Ok(Some(raw)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
