//! Register page component

use leptos::prelude::*;
use leptos_meta::Title;

use crate::core::SessionPolicy;
use crate::ui::auth::{CredentialForm, CredentialMode, SessionGuard};

/// Account creation page; signs the new account in straight away
#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <Title text="Register | Omnistudy"/>
        <SessionGuard policy=SessionPolicy::guests_only()>
            <CredentialForm mode=CredentialMode::Register />
        </SessionGuard>
    }
}
