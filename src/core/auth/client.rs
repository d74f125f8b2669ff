//! The external auth client seam
//!
//! Pages depend on [`AuthClient`] only. The hosted implementation lives in
//! [`super::hosted`]; tests substitute a scripted one.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::error::AuthError;

/// User record as reported by the auth provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Email and password typed into a credential form
#[derive(Clone, PartialEq, Serialize)]
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
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Operations the pages need from the hosted auth service
#[allow(async_fn_in_trait)]
pub trait AuthClient {
    async fn sign_in_with_password(&self, credentials: &Credentials) -> Result<User, AuthError>;

    async fn sign_up(&self, credentials: &Credentials) -> Result<User, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    /// `Ok(None)` means there is no authenticated user
    async fn get_user(&self) -> Result<Option<User>, AuthError>;
}

impl<C: AuthClient> AuthClient for Arc<C> {
    async fn sign_in_with_password(&self, credentials: &Credentials) -> Result<User, AuthError> {
        (**self).sign_in_with_password(credentials).await
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<User, AuthError> {
        (**self).sign_up(credentials).await
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        (**self).sign_out().await
    }

    async fn get_user(&self) -> Result<Option<User>, AuthError> {
        (**self).get_user().await
    }
}

/// `<meta>` names the server uses to hand [`AuthClientConfig`] to the browser
pub const META_AUTH_URL: &str = "omnistudy-auth-url";
pub const META_AUTH_KEY: &str = "omnistudy-auth-key";

/// Public settings needed to reach the auth provider from the browser
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthClientConfig {
    /// Project base URL, e.g. `https://xyzcompany.supabase.co`
    pub url: String,
    /// Anonymous (publishable) API key
    pub anon_key: String,
}

impl AuthClientConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.is_empty()
    }

    /// Full URL of an auth endpoint, `path` starting with `/`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1{}", self.url, path)
    }

    /// Read the settings the server rendered into the document head
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let read = |name: &str| {
            document
                .query_selector(&format!("meta[name=\"{}\"]", name))
                .ok()
                .flatten()
                .and_then(|el| el.get_attribute("content"))
        };

        Some(Self::new(read(META_AUTH_URL)?, read(META_AUTH_KEY)?))
    }

    #[cfg(not(feature = "hydrate"))]
    pub fn from_document() -> Option<Self> {
        None
    }
}
