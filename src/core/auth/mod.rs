//! Authentication module for Omnistudy
//!
//! Everything hard about authentication is owned by the hosted provider.
//! This module only defines:
//! - The [`AuthClient`] seam the pages are written against
//! - A hosted client speaking the provider's REST API
//! - Session persistence for that client

pub mod client;
pub mod error;
pub mod hosted;
pub mod storage;
pub mod transport;

pub use client::{AuthClient, AuthClientConfig, Credentials, User};
pub use error::AuthError;
pub use hosted::{BrowserAuthClient, HostedAuthClient};
pub use storage::{BrowserSessionStore, MemorySessionStore, Session, SessionStore};
pub use transport::{FetchTransport, HttpMethod, HttpRequest, HttpResponse, HttpTransport};
