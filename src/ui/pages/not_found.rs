//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::AppRoute;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Not Found | Omnistudy"/>
        <div class="min-h-screen flex flex-col items-center justify-center p-4 text-center">
            <h1 class="text-6xl font-bold mb-4">"404"</h1>
            <p class="text-theme-secondary mb-8">
                "The page you're looking for doesn't exist."
            </p>
            <A
                href=AppRoute::Dashboard.path()
                attr:class="px-6 py-3 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
