//! Auth context for the component tree
//!
//! The hosted auth client is created once by the app root and handed to
//! pages through Leptos context instead of living in a global.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::core::auth::{
    AuthClientConfig, BrowserAuthClient, BrowserSessionStore, FetchTransport,
};
use crate::core::{AppRoute, Navigator};

/// Auth context providing the shared auth client
#[derive(Clone)]
pub struct AuthContext {
    client: Arc<BrowserAuthClient>,
}

impl AuthContext {
    pub fn client(&self) -> Arc<BrowserAuthClient> {
        self.client.clone()
    }
}

/// Provide auth context to the component tree
pub fn provide_auth_context(config: AuthClientConfig) -> AuthContext {
    // The server reports this once at startup
    if cfg!(feature = "hydrate") && !config.is_configured() {
        leptos::logging::warn!("Auth provider is not configured; sign-in will fail");
    }

    let client = BrowserAuthClient::new(config, FetchTransport, Arc::new(BrowserSessionStore));
    let ctx = AuthContext {
        client: Arc::new(client),
    };

    provide_context(ctx.clone());
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}

/// [`Navigator`] backed by the Leptos router
///
/// Must be created while a component is being built, inside a `<Router>`.
#[derive(Clone)]
pub struct RouterNavigator {
    navigate: Arc<dyn Fn(&str, NavigateOptions) + Send + Sync>,
}

impl RouterNavigator {
    pub fn new() -> Self {
        let navigate = use_navigate();
        Self {
            navigate: Arc::new(move |path: &str, options: NavigateOptions| {
                navigate(path, options)
            }),
        }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, route: AppRoute) {
        (self.navigate)(route.path(), NavigateOptions::default());
    }
}
