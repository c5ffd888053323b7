//! Auth-token state for the current browser session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token itself is issued elsewhere; this UI only stores it and checks
//! for its presence to decide which controls to offer.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Authentication state: the bearer token, if the user supplied one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
}

impl AuthState {
    /// Build state from a raw token, treating blank input as signed out.
    #[must_use]
    pub fn from_raw(raw: Option<&str>) -> Self {
        let token = raw.map(str::trim).filter(|t| !t.is_empty()).map(str::to_owned);
        Self { token }
    }

    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}
