use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Deserializer};

/// Username submitted through the search form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchInput {
    /// Non-empty, trimmed username
    pub username: String,
}

/// Public GitHub profile as returned by `/users/{username}`
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Profile {
    /// Avatar image URL
    pub avatar_url: String,
    /// Display name, `null` for accounts that never set one
    #[serde(default)]
    pub name: Option<String>,
    /// Public repository count, kept as text
    #[serde(deserialize_with = "repo_count")]
    pub public_repos: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
    /// Profile page URL
    pub html_url: String,
}

impl Profile {
    /// Calendar year the account was created in
    pub fn join_year(&self) -> i32 {
        self.created_at.year()
    }

    /// Name to show in the panel, empty when the account has none
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

// The API sends a number; older mocks and proxies send a string.
fn repo_count<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCount {
        Number(u64),
        Text(String),
    }

    Ok(match RawCount::deserialize(deserializer)? {
        RawCount::Number(count) => count.to_string(),
        RawCount::Text(count) => count,
    })
}
