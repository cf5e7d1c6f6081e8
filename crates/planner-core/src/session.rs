//! Session Store
//!
//! Token plus resolved profile. The token is the only state that
//! survives a reload; the profile is fetched again on every start.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::client::ApiResult;
use crate::domain::User;

/// Durable home of the bearer token (browser `localStorage` in the app)
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// In-memory store. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(token.into()))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionPhase {
    /// No token; show the auth page
    Anonymous,
    /// Token present, `GET /me` pending
    Resolving,
    Authenticated(User),
}

#[derive(Debug, Clone)]
pub struct Session<S> {
    store: S,
    token: Option<String>,
    phase: SessionPhase,
}

impl<S: TokenStore> Session<S> {
    /// Pick up a persisted token, if any
    pub fn restore(store: S) -> Self {
        let token = store.load().filter(|t| !t.is_empty());
        let phase = if token.is_some() {
            SessionPhase::Resolving
        } else {
            SessionPhase::Anonymous
        };
        Self { store, token, phase }
    }

    /// Persist a freshly issued token; the profile fetch follows.
    pub fn login(&mut self, token: String) {
        self.store.save(&token);
        self.token = Some(token);
        self.phase = SessionPhase::Resolving;
    }

    pub fn logout(&mut self) {
        self.store.clear();
        self.token = None;
        self.phase = SessionPhase::Anonymous;
    }

    /// Apply the outcome of `GET /me` fetched with `for_token`. Any failure
    /// ends the session: there is no retry. A result for a token that is no
    /// longer current (logged out, or replaced by a newer login) is dropped.
    pub fn apply_profile(&mut self, for_token: &str, result: ApiResult<User>) {
        if self.token.as_deref() != Some(for_token) {
            debug!("dropping profile fetched for a stale token");
            return;
        }
        match result {
            Ok(user) => {
                info!(email = %user.email, "session established");
                self.phase = SessionPhase::Authenticated(user);
            }
            Err(err) => {
                warn!(error = %err, "profile fetch failed, clearing session");
                self.logout();
            }
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn user(&self) -> Option<&User> {
        match &self.phase {
            SessionPhase::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}
