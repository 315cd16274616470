use validator::ValidateUrl;

use crate::{error::AppError, profile::SearchInput};

/// Message shown next to the search field when it is left empty
pub const USERNAME_REQUIRED: &str = "O nome de usuário é obrigatório";

/// Validates username input
///
/// Only emptiness is checked; anything else is left for the API to reject.
pub fn validate_username(raw: &str) -> Result<SearchInput, AppError> {
    let username: &str = raw.trim();
    if username.is_empty() {
        Err(AppError::Validation(USERNAME_REQUIRED.to_string()))
    } else {
        Ok(SearchInput {
            username: username.to_string(),
        })
    }
}

/// Validates the API base URL and strips any trailing slash
pub fn validate_api_base(api_base: &str) -> Result<String, AppError> {
    let trimmed: &str = api_base.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        Err(AppError::Validation("api base cannot be empty".to_string()))
    } else if !trimmed.validate_url() {
        Err(AppError::Validation(format!("invalid api base url: '{trimmed}'")))
    } else {
        Ok(trimmed.to_string())
    }
}
