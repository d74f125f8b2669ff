//! Navigation seam and page lifetime tracking
//!
//! Flows never talk to the router directly. They receive a [`Navigator`] and a
//! [`PageScope`]; the scope is closed when the page that started the flow is
//! torn down, after which late results are dropped instead of applied.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::on_cleanup;

use super::routes::AppRoute;

/// Something that can move the user to another page
pub trait Navigator {
    fn navigate(&self, route: AppRoute);
}

/// Liveness flag for the page a flow was started from
#[derive(Debug, Clone)]
pub struct PageScope {
    active: Arc<AtomicBool>,
}

impl PageScope {
    /// Create an open scope that is not tied to any reactive owner
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Create a scope that closes when the current reactive owner is cleaned up
    ///
    /// Must be called while a component is being built.
    pub fn bound_to_owner() -> Self {
        let scope = Self::new();
        let closer = scope.clone();
        on_cleanup(move || closer.close());
        scope
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    pub fn close(&self) {
        self.active.store(false, Ordering::Release);
    }
}

impl Default for PageScope {
    fn default() -> Self {
        Self::new()
    }
}
