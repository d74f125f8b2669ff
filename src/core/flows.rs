//! Page flows: session guard, login, registration, logout
//!
//! Each flow awaits the auth client, then applies the result to the page only
//! if the page's [`PageScope`] is still active. Calls are never cancelled; a
//! result that arrives after the user left is dropped.

use leptos::logging::{error, log, warn};
use leptos::prelude::{RwSignal, Update};

use super::auth::{AuthClient, AuthError, Credentials};
use super::form::FormState;
use super::navigation::{Navigator, PageScope};
use super::routes::AppRoute;

/// Session state a page requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionRequirement {
    Present,
    Absent,
}

/// Mount-time rule for a page: which session state it requires and where to
/// send the user otherwise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionPolicy {
    pub required: SessionRequirement,
    pub redirect_to: AppRoute,
}

impl SessionPolicy {
    /// Pages for signed-in users; guests go to the login page
    pub fn members_only() -> Self {
        Self {
            required: SessionRequirement::Present,
            redirect_to: AppRoute::Login,
        }
    }

    /// Pages for guests; signed-in users go to the dashboard
    pub fn guests_only() -> Self {
        Self {
            required: SessionRequirement::Absent,
            redirect_to: AppRoute::Dashboard,
        }
    }

    pub fn admits(&self, has_user: bool) -> bool {
        match self.required {
            SessionRequirement::Present => has_user,
            SessionRequirement::Absent => !has_user,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GuardOutcome {
    Admitted,
    Redirected(AppRoute),
    /// The presence check itself failed; the page is left as it is
    Undetermined(AuthError),
    /// The page was torn down before the check finished
    Abandoned,
}

/// Run a page's session check once and redirect if the policy is not met
pub async fn enforce_session<C, N>(
    client: &C,
    navigator: &N,
    scope: &PageScope,
    policy: SessionPolicy,
) -> GuardOutcome
where
    C: AuthClient,
    N: Navigator,
{
    let result = client.get_user().await;

    if !scope.is_active() {
        return GuardOutcome::Abandoned;
    }

    match result {
        Ok(user) if policy.admits(user.is_some()) => GuardOutcome::Admitted,
        Ok(_) => {
            navigator.navigate(policy.redirect_to);
            GuardOutcome::Redirected(policy.redirect_to)
        }
        Err(e) => {
            warn!("Session check failed, staying on page: {}", e);
            GuardOutcome::Undetermined(e)
        }
    }
}

/// Auth call a submit cycle failed at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStage {
    SignIn,
    SignUp,
    SignOut,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Navigated(AppRoute),
    Rejected { stage: SubmitStage, error: AuthError },
    /// A call from the same form was already in flight
    Ignored,
    Abandoned,
}

fn start_submit(form: RwSignal<FormState>) -> Option<Credentials> {
    form.try_update(|state| state.begin_submit().then(|| state.credentials()))
        .flatten()
}

fn reject(form: RwSignal<FormState>, stage: SubmitStage, err: AuthError) -> SubmitOutcome {
    error!("{:?} failed: {}", stage, err);
    form.try_update(|state| state.fail(&err));
    SubmitOutcome::Rejected { stage, error: err }
}

fn finish<N: Navigator>(navigator: &N, route: AppRoute) -> SubmitOutcome {
    navigator.navigate(route);
    SubmitOutcome::Navigated(route)
}

/// Login form submit: sign in, then go to the dashboard
///
/// `loading` is left set on success since the page is about to unmount.
pub async fn submit_login<C, N>(
    client: &C,
    navigator: &N,
    scope: &PageScope,
    form: RwSignal<FormState>,
) -> SubmitOutcome
where
    C: AuthClient,
    N: Navigator,
{
    let Some(credentials) = start_submit(form) else {
        return SubmitOutcome::Ignored;
    };

    let result = client.sign_in_with_password(&credentials).await;
    if !scope.is_active() {
        return SubmitOutcome::Abandoned;
    }

    match result {
        Ok(_) => finish(navigator, AppRoute::Dashboard),
        Err(e) => reject(form, SubmitStage::SignIn, e),
    }
}

/// Register form submit: sign up, sign in with the same credentials, then go
/// to the dashboard
///
/// Sign-in is only attempted after a successful sign-up. If sign-in fails the
/// account stays created but signed out; nothing is rolled back.
pub async fn submit_registration<C, N>(
    client: &C,
    navigator: &N,
    scope: &PageScope,
    form: RwSignal<FormState>,
) -> SubmitOutcome
where
    C: AuthClient,
    N: Navigator,
{
    let Some(credentials) = start_submit(form) else {
        return SubmitOutcome::Ignored;
    };

    let signed_up = client.sign_up(&credentials).await;
    if !scope.is_active() {
        return SubmitOutcome::Abandoned;
    }
    if let Err(e) = signed_up {
        return reject(form, SubmitStage::SignUp, e);
    }

    let signed_in = client.sign_in_with_password(&credentials).await;
    if !scope.is_active() {
        return SubmitOutcome::Abandoned;
    }

    match signed_in {
        Ok(_) => finish(navigator, AppRoute::Dashboard),
        Err(e) => {
            warn!(
                "Account {} was created but could not be signed in",
                credentials.email
            );
            reject(form, SubmitStage::SignIn, e)
        }
    }
}

/// Dashboard logout: sign out, then go to the login page
///
/// On failure the user stays where they are.
pub async fn sign_out<C, N>(client: &C, navigator: &N, scope: &PageScope) -> SubmitOutcome
where
    C: AuthClient,
    N: Navigator,
{
    let result = client.sign_out().await;
    if !scope.is_active() {
        return SubmitOutcome::Abandoned;
    }

    match result {
        Ok(()) => {
            log!("Signed out");
            finish(navigator, AppRoute::Login)
        }
        Err(e) => {
            error!("Sign out failed: {}", e);
            SubmitOutcome::Rejected {
                stage: SubmitStage::SignOut,
                error: e,
            }
        }
    }
}
