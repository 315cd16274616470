use colored::Colorize;

use crate::{form::SearchForm, profile::Profile};

const TITLE: &str = "GitHub Profile";
const TAGLINE: &str = "Procure seu usuário do GitHub abaixo:";
const SEPARATOR: &str = "────────────────────────";

/// Renders the whole search screen for the current form state
pub fn render(form: &SearchForm) -> String {
    let mut lines: Vec<String> = vec![
        format!("{}", TITLE.bold()),
        String::new(),
        format!("{}", TAGLINE.to_uppercase().bright_blue().bold()),
    ];

    if let Some(message) = form.error() {
        lines.push(format!("{}", message.red()));
    }

    if let Some(profile) = form.profile() {
        lines.push(String::new());
        lines.extend(render_profile(profile));
    }

    lines.join("\n")
}

/// Renders the profile panel
pub fn render_profile(profile: &Profile) -> Vec<String> {
    vec![
        format!(
            "{} {}",
            format!("Avatar de {}:", profile.display_name()).dimmed(),
            profile.avatar_url
        ),
        format!("{}", profile.display_name().bold()),
        format!("Total de repositórios: {}", profile.public_repos),
        SEPARATOR.bright_blue().to_string(),
        format!("Desde {}", profile.join_year()),
        format!("{} {}", "Acessar GitHub:".bold(), profile.html_url.underline()),
    ]
}
