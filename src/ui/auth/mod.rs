//! Authentication UI module
//!
//! This module provides authentication-related components and context
//! for the Omnistudy frontend.

mod context;
mod credential_form;
mod guard;

pub use context::{AuthContext, RouterNavigator, provide_auth_context, use_auth_context};
pub use credential_form::{CredentialForm, CredentialMode};
pub use guard::SessionGuard;
