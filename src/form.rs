use crate::{
    error::AppError,
    github::ProfileSource,
    profile::{Profile, SearchInput},
    validation::validate_username,
};

/// State behind the search screen
///
/// Holds the last successfully fetched profile, the inline validation
/// message and the contents of the input field. Rendering is a pure
/// function of this struct (see `view::render`).
#[derive(Debug, Default)]
pub struct SearchForm {
    profile: Option<Profile>,
    error: Option<String>,
    input: String,
    issued: u64,
    applied: u64,
}

/// What a submission ended up doing
#[derive(Debug, PartialEq, Eq)]
pub enum Submission {
    /// Input was rejected before any request
    Invalid,
    /// A profile was fetched and is now displayed
    Found,
    /// The lookup failed; the previous profile (if any) is still shown
    Failed,
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Submits the form: validate, fetch, apply, clear the field
    ///
    /// # Arguments
    /// * `source` - Where profiles are looked up
    /// * `raw` - Text typed into the field
    pub async fn submit<S: ProfileSource>(&mut self, source: &S, raw: &str) -> Submission {
        self.input = raw.to_string();

        let search: SearchInput = match validate_username(&self.input) {
            Ok(search) => search,
            Err(e) => {
                self.error = Some(e.to_string());
                self.input.clear();
                return Submission::Invalid;
            }
        };
        self.error = None;

        let seq: u64 = self.begin_request();
        let outcome = source.fetch_profile(&search.username).await;
        let found: bool = outcome.is_ok();
        self.apply(seq, &search.username, outcome);
        self.input.clear();

        if found {
            Submission::Found
        } else {
            Submission::Failed
        }
    }

    /// Reserves a sequence number for a lookup about to start
    pub fn begin_request(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Applies a finished lookup unless a newer one already landed
    ///
    /// Returns whether the outcome was applied.
    pub fn apply(&mut self, seq: u64, username: &str, outcome: Result<Profile, AppError>) -> bool {
        if seq <= self.applied {
            log::debug!("dropping stale lookup #{seq} for '{username}'");
            return false;
        }
        self.applied = seq;

        match outcome {
            Ok(profile) => self.profile = Some(profile),
            Err(e) => log::warn!("lookup for '{username}' failed: {e}"),
        }
        true
    }
}
