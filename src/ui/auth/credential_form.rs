//! Email and password form shared by the login and register pages

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::context::{RouterNavigator, use_auth_context};
use crate::core::{
    AppRoute, FormPhase, FormState, PageScope, submit_login, submit_registration,
};
use crate::ui::icon::{Icon, icons};

/// Which flow the form drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialMode {
    Login,
    Register,
}

impl CredentialMode {
    fn heading(self) -> &'static str {
        match self {
            CredentialMode::Login => "Welcome back!",
            CredentialMode::Register => "Let's get you started!",
        }
    }

    fn subtitle(self) -> &'static str {
        match self {
            CredentialMode::Login => "Log back into your account with your email",
            CredentialMode::Register => "Enter an email, and password to create your account",
        }
    }

    fn submit_label(self) -> &'static str {
        match self {
            CredentialMode::Login => "Login",
            CredentialMode::Register => "Create Account",
        }
    }

    fn switch_prompt(self) -> &'static str {
        match self {
            CredentialMode::Login => "Don't have an account? Register",
            CredentialMode::Register => "Already have an account? Log In",
        }
    }

    fn password_autocomplete(self) -> &'static str {
        match self {
            CredentialMode::Login => "current-password",
            CredentialMode::Register => "new-password",
        }
    }

    fn switch_route(self) -> AppRoute {
        match self {
            CredentialMode::Login => AppRoute::Register,
            CredentialMode::Register => AppRoute::Login,
        }
    }
}

#[component]
pub fn CredentialForm(mode: CredentialMode) -> impl IntoView {
    let auth = use_auth_context();
    let navigator = RouterNavigator::new();
    let scope = PageScope::bound_to_owner();

    let form = RwSignal::new(FormState::default());
    let phase = Memo::new(move |_| form.with(FormState::phase));
    let loading = move || phase.get() == FormPhase::Submitting;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let client = auth.client();
        let navigator = navigator.clone();
        let scope = scope.clone();

        spawn_local(async move {
            match mode {
                CredentialMode::Login => {
                    submit_login(&client, &navigator, &scope, form).await;
                }
                CredentialMode::Register => {
                    submit_registration(&client, &navigator, &scope, form).await;
                }
            }
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center p-4">
            <A href=AppRoute::Home.path() attr:class="absolute left-4 top-4 md:left-8 md:top-8 flex items-center gap-1 text-sm text-theme-secondary hover:text-theme-primary">
                <Icon name=icons::CHEVRON_LEFT class="h-4 w-4" />
                "Back"
            </A>

            <div class="w-full max-w-sm space-y-6">
                <div class="text-center space-y-2">
                    <h1 class="text-2xl font-semibold tracking-tight">{mode.heading()}</h1>
                    <p class="text-sm text-theme-secondary">{mode.subtitle()}</p>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    <div class="space-y-1">
                        <label for="email" class="sr-only">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            placeholder="name@example.com"
                            autocapitalize="none"
                            autocomplete="email"
                            class="input-base w-full"
                            disabled=loading
                            prop:value=move || form.with(|state| state.email.clone())
                            on:input=move |ev| form.update(|state| state.email = event_target_value(&ev))
                        />
                    </div>

                    <div class="space-y-1">
                        <label for="password" class="sr-only">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            placeholder="Password"
                            autocapitalize="none"
                            autocomplete=mode.password_autocomplete()
                            class="input-base w-full"
                            disabled=loading
                            prop:value=move || form.with(|state| state.password.clone())
                            on:input=move |ev| form.update(|state| state.password = event_target_value(&ev))
                        />
                        <Show when=move || phase.get() == FormPhase::Failed>
                            <p class="text-sm text-red-500">
                                {move || form.with(|state| state.error.clone().unwrap_or_default())}
                            </p>
                        </Show>
                    </div>

                    <button
                        type="submit"
                        class="w-full py-2 px-4 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg
                               disabled:opacity-50 disabled:cursor-not-allowed transition-colors
                               flex items-center justify-center"
                        disabled=loading
                    >
                        <Show when=loading>
                            <Icon name=icons::LOADER class="mr-2 h-4 w-4 animate-spin" />
                        </Show>
                        {mode.submit_label()}
                    </button>
                </form>

                <p class="text-center text-sm text-theme-secondary">
                    <A href=mode.switch_route().path() attr:class="hover:text-accent-primary underline underline-offset-4">
                        {mode.switch_prompt()}
                    </A>
                </p>
            </div>
        </div>
    }
}
