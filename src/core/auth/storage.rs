//! Persistence of the provider-issued session
//!
//! The browser build keeps the session in `localStorage` so it survives page
//! reloads; everything else uses an in-memory slot.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use super::client::User;

/// Storage key for the serialized session
#[cfg(feature = "hydrate")]
const STORAGE_KEY_SESSION: &str = "omnistudy.auth.session";

/// Session issued by the provider on sign-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: User,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Where the hosted client keeps its session between calls
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session);
    fn clear(&self);
}

/// Session slot that lives as long as the process or page
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    slot: Arc<Mutex<Option<Session>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    fn save(&self, session: &Session) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(session.clone());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}

/// Session persisted in `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

#[cfg(feature = "hydrate")]
impl BrowserSessionStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(feature = "hydrate")]
impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Option<Session> {
        let raw = Self::storage()?.get_item(STORAGE_KEY_SESSION).ok()??;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                leptos::logging::warn!("Discarding unreadable stored session: {}", e);
                self.clear();
                None
            }
        }
    }

    fn save(&self, session: &Session) {
        if let (Some(storage), Ok(json)) = (Self::storage(), serde_json::to_string(session)) {
            let _ = storage.set_item(STORAGE_KEY_SESSION, &json);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(STORAGE_KEY_SESSION);
        }
    }
}

/// Outside the browser there is no localStorage; nothing is ever stored
#[cfg(not(feature = "hydrate"))]
impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Option<Session> {
        None
    }

    fn save(&self, _session: &Session) {}

    fn clear(&self) {}
}
