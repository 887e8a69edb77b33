//! Application Context
//!
//! Store handle provided via Leptos Context API, plus the guarded-action
//! helper every protected control goes through.

use leptos::prelude::*;

use crate::store::{AppState, AppStore};
use crate::theme::Theme;
use crate::view::ActiveView;

/// App-wide handle provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    /// Run `action` against the state if a user is signed in, otherwise open
    /// the login overlay. Returns true when the action was blocked. The
    /// whole check-then-act runs under one write borrow so a login completing
    /// in between cannot slip past the gate.
    pub fn guard(&self, action: impl FnOnce(&mut AppState)) -> bool {
        let mut state = self.store.write();
        if state.require_login() {
            true
        } else {
            action(&mut state);
            false
        }
    }

    pub fn set_view(&self, view: ActiveView) {
        self.store.write().set_active_view(view);
    }

    pub fn set_theme(&self, theme: Option<Theme>) {
        self.store.write().set_theme(theme);
    }

    pub fn logout(&self) {
        let mut state = self.store.write();
        state.logout();
        state.overlays.close_profile();
    }
}

/// Get the app context, panicking outside the component tree
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
