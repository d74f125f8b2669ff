//! Guarded route wrapper
//!
//! Checks session presence once when the page mounts and redirects when the
//! page's [`SessionPolicy`] is not met. Children render immediately; the check
//! does not block them.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::{RouterNavigator, use_auth_context};
use crate::core::auth::AuthClient;
use crate::core::{GuardOutcome, Navigator, PageScope, SessionPolicy, enforce_session};

#[component]
pub fn SessionGuard(
    /// Session state the page requires, and where to go otherwise
    policy: SessionPolicy,
    children: Children,
) -> impl IntoView {
    let auth = use_auth_context();
    let navigator = RouterNavigator::new();
    let scope = PageScope::bound_to_owner();
    let started = Arc::new(AtomicBool::new(false));

    // Client-side only
    Effect::new(move |_| {
        let check = check_once(
            started.clone(),
            auth.client(),
            navigator.clone(),
            scope.clone(),
            policy,
        );
        spawn_local(async move {
            check.await;
        });
    });

    children()
}

/// Session check for one mount; later runs for the same mount return `None`
/// without querying the client
async fn check_once<C, N>(
    started: Arc<AtomicBool>,
    client: C,
    navigator: N,
    scope: PageScope,
    policy: SessionPolicy,
) -> Option<GuardOutcome>
where
    C: AuthClient,
    N: Navigator,
{
    if started.swap(true, Ordering::SeqCst) {
        return None;
    }
    Some(enforce_session(&client, &navigator, &scope, policy).await)
}
