//! Login page component
//!
//! Guests sign in here; signed-in visitors are sent to the dashboard.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::core::SessionPolicy;
use crate::ui::auth::{CredentialForm, CredentialMode, SessionGuard};

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <Title text="Login | Omnistudy"/>
        <SessionGuard policy=SessionPolicy::guests_only()>
            <CredentialForm mode=CredentialMode::Login />
        </SessionGuard>
    }
}
