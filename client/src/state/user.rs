//! Signed-in farmer profile for the dashboard header.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authentication happens upstream; the dashboard only reads the profile to
//! greet the farmer by first name.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use crate::net::error::ApiError;
use crate::net::types::UserData;

/// Profile fetch state.
#[derive(Clone, Debug, PartialEq)]
pub struct UserState {
    pub user: Option<UserData>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for UserState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            error: None,
        }
    }
}

impl UserState {
    pub fn finish(&mut self, result: Result<UserData, ApiError>) {
        self.loading = false;
        match result {
            Ok(user) => {
                self.user = Some(user);
                self.error = None;
            }
            Err(err) => {
                self.user = None;
                self.error = Some(err.user_message());
            }
        }
    }

    /// Header text: loading, failure, or `Welcome, <Fname>`.
    pub fn heading(&self) -> String {
        if self.loading {
            return "Loading...".to_owned();
        }
        match &self.user {
            Some(user) if self.error.is_none() => format!("Welcome, {}", capitalize_first(&user.fname)),
            _ => "Error loading user data.".to_owned(),
        }
    }
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
