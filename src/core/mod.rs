//! Core logic for the Omnistudy auth pages: routes, form state, page flows,
//! and the external auth client they are written against

pub mod auth;
#[cfg(feature = "ssr")]
pub mod config;
pub mod flows;
pub mod form;
pub mod navigation;
pub mod routes;
#[cfg(test)]
pub(crate) mod testing;

pub use flows::{
    GuardOutcome, SessionPolicy, SessionRequirement, SubmitOutcome, SubmitStage, enforce_session,
    sign_out, submit_login, submit_registration,
};
pub use form::{FormPhase, FormState};
pub use navigation::{Navigator, PageScope};
pub use routes::AppRoute;
