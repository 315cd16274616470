mod cli;
mod error;
mod form;
mod github;
mod menu;
mod profile;
mod settings;
mod validation;
mod view;

use clap::Parser;
use colored::Colorize;

use crate::{
    cli::{Cli, Commands},
    error::AppError,
    form::{SearchForm, Submission},
    github::{GithubClient, ProfileSource},
    menu::run_menu,
    settings::{Settings, get_settings_path, load_settings},
    view::render,
};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{}", e.to_string().red());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let settings: Settings = load_settings(cli.api_base.as_deref())?;

    match cli.command {
        Some(Commands::Search { username, open }) => {
            let client = GithubClient::new(&settings)?;
            search_user(&client, &username, open).await
        }
        Some(Commands::Config) => show_settings(&settings),
        None => {
            let client = GithubClient::new(&settings)?;
            run_menu(&client).await
        }
    }
}

/// Submits a single search and prints the resulting screen
///
/// # Arguments
/// * `source` - Where profiles are looked up
/// * `username` - Raw username as typed on the command line
/// * `open_link` - Open the profile page in the browser after a success
async fn search_user<S: ProfileSource>(
    source: &S,
    username: &str,
    open_link: bool,
) -> Result<(), AppError> {
    let mut form = SearchForm::new();
    let submission: Submission = form.submit(source, username).await;

    println!("{}", render(&form));

    if let (Submission::Found, true, Some(profile)) = (&submission, open_link, form.profile()) {
        open::that(&profile.html_url).map_err(|e| AppError::Browser(e.to_string()))?;
    }

    Ok(())
}

/// Prints the effective settings and where they are read from
fn show_settings(settings: &Settings) -> Result<(), AppError> {
    let path = get_settings_path()?;
    println!("{} {}", "settings file:".blue(), path.display());
    println!("{}", serde_json::to_string_pretty(settings)?);
    Ok(())
}
