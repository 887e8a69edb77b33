//! Session State
//!
//! In-memory record of authentication and premium membership. Lives for the
//! process lifetime; there is no real identity behind it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub logged_in: bool,
    pub premium: bool,
}

impl Session {
    /// Successful login (the simulated flow always succeeds)
    pub fn login(&mut self) {
        self.logged_in = true;
    }

    /// Successful premium join
    pub fn join(&mut self) {
        self.premium = true;
    }

    /// Logout drops both the identity and the premium flag
    pub fn logout(&mut self) {
        self.logged_in = false;
        self.premium = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_starts_anonymous() {
        let session = Session::default();
        assert!(!session.logged_in);
        assert!(!session.premium);
    }

    #[test]
    fn test_login_join_logout_transitions() {
        let mut session = Session::default();
        session.login();
        assert!(session.logged_in);
        assert!(!session.premium);

        session.join();
        assert!(session.premium);

        session.logout();
        assert_eq!(session, Session::default());
    }
}
