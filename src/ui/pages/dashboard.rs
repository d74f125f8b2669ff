//! Dashboard page component
//!
//! Members-only landing page after sign-in. Holds the logout action.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::core::{PageScope, SessionPolicy, SubmitOutcome, sign_out};
use crate::ui::auth::{RouterNavigator, SessionGuard, use_auth_context};
use crate::ui::icon::{Icon, icons};

/// Dashboard page component
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <Title text="Dashboard | Omnistudy"/>
        <SessionGuard policy=SessionPolicy::members_only()>
            <Dashboard />
        </SessionGuard>
    }
}

#[component]
fn Dashboard() -> impl IntoView {
    let auth = use_auth_context();
    let navigator = RouterNavigator::new();
    let scope = PageScope::bound_to_owner();
    let signing_out = RwSignal::new(false);

    let handle_logout = move |_| {
        if signing_out.get_untracked() {
            return;
        }
        signing_out.set(true);

        let client = auth.client();
        let navigator = navigator.clone();
        let scope = scope.clone();
        spawn_local(async move {
            let outcome = sign_out(&client, &navigator, &scope).await;
            if !matches!(outcome, SubmitOutcome::Navigated(_)) {
                signing_out.try_set(false);
            }
        });
    };

    view! {
        <div class="min-h-screen p-8 space-y-6">
            <h1 class="text-3xl font-bold">"Dashboard"</h1>

            <button
                type="button"
                class="inline-flex items-center px-4 py-2 border border-theme rounded-lg
                       hover:bg-theme-secondary disabled:opacity-50 transition-colors"
                disabled=move || signing_out.get()
                on:click=handle_logout
            >
                <Icon name=icons::LOG_OUT class="mr-2 h-4 w-4" />
                "Logout"
            </button>
        </div>
    }
}
