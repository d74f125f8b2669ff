use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::core::AppRoute;
use crate::core::auth::AuthClientConfig;
use crate::core::auth::client::{META_AUTH_KEY, META_AUTH_URL};
use crate::ui::auth::provide_auth_context;
use crate::ui::pages::{DashboardPage, LoginPage, NotFoundPage, RegisterPage};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provided by the server for every request; see main.rs
    let auth = use_context::<AuthClientConfig>().unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=META_AUTH_URL content=auth.url/>
                <meta name=META_AUTH_KEY content=auth.anon_key/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Server: config comes from context. Browser: read back from the <meta> tags.
    let config = use_context::<AuthClientConfig>()
        .or_else(AuthClientConfig::from_document)
        .unwrap_or_default();
    provide_auth_context(config);

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/omnistudy.css"/>

        <Title text="Omnistudy"/>

        <Router>
            <main class="w-full min-h-screen bg-theme-primary text-theme-primary">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route
                        path=path!("/")
                        view=|| view! { <Redirect path=AppRoute::Dashboard.path()/> }
                    />
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/register") view=RegisterPage/>
                    <Route path=path!("/dashboard") view=DashboardPage/>
                </Routes>
            </main>
        </Router>
    }
}
