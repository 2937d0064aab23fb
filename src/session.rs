//! Login state and credential validation.
//!
//! There is no credential store: logging in only checks that the form is
//! complete, then flips the session to authenticated.

use serde::{Deserialize, Serialize};

use crate::{Result, RoadsignError};

/// Login form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Both fields must be non-empty.
    pub fn validate(&self) -> Result<()> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(RoadsignError::MissingFields);
        }
        Ok(())
    }
}

/// Registration form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl Registration {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// All fields must be non-empty and the passwords must match.
    pub fn validate(&self) -> Result<()> {
        if self.email.is_empty() || self.password.is_empty() || self.confirm_password.is_empty() {
            return Err(RoadsignError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(RoadsignError::PasswordMismatch);
        }
        Ok(())
    }
}

/// Whether the user may reach the scanning screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    authenticated: bool,
}

impl Session {
    /// A logged-out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session restored as already logged in.
    pub fn authenticated() -> Self {
        Self {
            authenticated: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Validate `credentials` and mark the session logged in.
    ///
    /// On validation failure the session is left unchanged.
    pub fn login(&mut self, credentials: &Credentials) -> Result<()> {
        credentials.validate()?;
        self.authenticated = true;
        Ok(())
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }

    /// Fail with `NotAuthenticated` unless logged in.
    pub fn require_authenticated(&self) -> Result<()> {
        if self.authenticated {
            Ok(())
        } else {
            Err(RoadsignError::NotAuthenticated)
        }
    }
}
