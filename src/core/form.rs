//! Credential form state shared by the login and register pages

use super::auth::{AuthError, Credentials};

/// Transient state of a credential form
///
/// `loading` is true only while a call to the auth provider is in flight.
/// `error` holds the provider message of the last failed attempt and is
/// cleared when the next attempt starts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub email: String,
    pub password: String,
    pub loading: bool,
    pub error: Option<String>,
}

/// Where a form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting,
    Failed,
}

impl FormState {
    pub fn phase(&self) -> FormPhase {
        if self.loading {
            FormPhase::Submitting
        } else if self.error.is_some() {
            FormPhase::Failed
        } else {
            FormPhase::Idle
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.clone())
    }

    /// Enter the submitting phase. Returns false if a call is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    pub fn fail(&mut self, error: &AuthError) {
        self.loading = false;
        self.error = Some(error.to_string());
    }
}
