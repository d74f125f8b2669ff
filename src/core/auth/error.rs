//! Errors reported by the external auth provider

use serde::Deserialize;

/// Failure of a call to the external auth provider
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    /// The provider answered with an error; the message is shown to the user as-is
    #[error("{message}")]
    Provider { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response from auth provider: {0}")]
    Decode(String),

    #[error("Authentication is not available on the server")]
    Unavailable,

    #[error("Auth provider is not configured")]
    NotConfigured,
}

impl AuthError {
    pub fn provider(status: u16, message: impl Into<String>) -> Self {
        AuthError::Provider {
            status,
            message: message.into(),
        }
    }

    /// HTTP status reported by the provider, if the provider answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            AuthError::Provider { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the provider rejected the caller's session token
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

/// Error body shapes returned by GoTrue-style auth servers
#[derive(Debug, Default, Deserialize)]
struct ProviderErrorBody {
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

impl ProviderErrorBody {
    fn into_message(self) -> Option<String> {
        [self.msg, self.message, self.error_description, self.error]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty())
    }
}

/// Build an [`AuthError`] from a non-success response
pub fn error_from_response(status: u16, body: &str) -> AuthError {
    let message = serde_json::from_str::<ProviderErrorBody>(body)
        .ok()
        .and_then(ProviderErrorBody::into_message)
        .unwrap_or_else(|| format!("Request failed with status {}", status));

    AuthError::provider(status, message)
}
