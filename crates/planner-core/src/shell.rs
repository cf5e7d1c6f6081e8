//! Application Shell State
//!
//! Session plus navigation, so logout can reset both in one step.

use crate::client::ApiResult;
use crate::domain::User;
use crate::navigation::{Navigation, Page};
use crate::session::{Session, SessionPhase, TokenStore};

#[derive(Debug, Clone)]
pub struct Shell<S> {
    session: Session<S>,
    navigation: Navigation,
}

impl<S: TokenStore> Shell<S> {
    pub fn restore(store: S) -> Self {
        Self {
            session: Session::restore(store),
            navigation: Navigation::default(),
        }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session<S> {
        &mut self.session
    }

    pub fn page(&self) -> Page {
        self.navigation.current()
    }

    pub fn phase(&self) -> &SessionPhase {
        self.session.phase()
    }

    pub fn navigate(&mut self, page: Page) {
        self.navigation.select(page);
    }

    pub fn login(&mut self, token: String) {
        self.session.login(token);
    }

    /// Clear the session and return to the default page
    pub fn logout(&mut self) {
        self.session.logout();
        self.navigation.reset();
    }

    /// Apply a `GET /me` outcome; a failure lands on the auth page with
    /// navigation back at its initial state.
    pub fn apply_profile(&mut self, for_token: &str, result: ApiResult<User>) {
        self.session.apply_profile(for_token, result);
        if matches!(self.session.phase(), SessionPhase::Anonymous) {
            self.navigation.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryTokenStore;

    #[test]
    fn test_logout_resets_navigation_and_token() {
        let store = MemoryTokenStore::with_token("abc");
        let mut shell = Shell::restore(store.clone());
        shell.navigate(Page::Venues);
        shell.logout();
        assert_eq!(shell.page(), Page::Dashboard);
        assert_eq!(shell.phase(), &SessionPhase::Anonymous);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_rejected_profile_returns_to_default_page() {
        let store = MemoryTokenStore::with_token("stale");
        let mut shell = Shell::restore(store.clone());
        shell.navigate(Page::Budget);
        shell.apply_profile("stale", Err(crate::ApiError::Unauthorized("Token expired".into())));
        assert_eq!(shell.page(), Page::Dashboard);
        assert_eq!(shell.phase(), &SessionPhase::Anonymous);
        assert_eq!(store.load(), None);
    }
}
