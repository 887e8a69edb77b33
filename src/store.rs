//! Global Application State Store
//!
//! Single source of truth for session, routing, overlays, theme and the
//! mutable mock collections. Every transition is a plain method so the
//! whole container is unit-testable without a reactive runtime; the Leptos
//! layer wraps it in a `reactive_stores` Store for fine-grained updates.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::data;
use crate::models::{Group, Notification, Priority, TaskBoard};
use crate::overlay::{OverlayState, SettingsTab};
use crate::session::Session;
use crate::theme::Theme;
use crate::view::ActiveView;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    pub session: Session,
    pub active_view: ActiveView,
    pub overlays: OverlayState,
    pub theme: Theme,
    /// Kanban board on the Task panel
    pub tasks: TaskBoard,
    /// Community groups, newest first
    pub groups: Vec<Group>,
    pub notifications: Vec<Notification>,
}

impl AppState {
    /// Fresh state seeded with the mock collections; the theme is whatever
    /// the caller resolved from persisted storage.
    pub fn new(theme: Theme) -> Self {
        Self {
            session: Session::default(),
            active_view: ActiveView::default(),
            overlays: OverlayState::default(),
            theme,
            tasks: data::initial_tasks(),
            groups: data::initial_groups(),
            notifications: data::initial_notifications(),
        }
    }

    // ---- auth gate ----

    /// Open the login overlay when no user is signed in. Returns true when
    /// the caller's action must wait for authentication.
    pub fn require_login(&mut self) -> bool {
        if self.session.logged_in {
            false
        } else {
            self.overlays.open_login();
            true
        }
    }

    /// Run `action` if a user is signed in, otherwise open the login
    /// overlay. Returns true when the action was blocked.
    pub fn guard(&mut self, action: impl FnOnce()) -> bool {
        let blocked = self.require_login();
        if !blocked {
            action();
        }
        blocked
    }

    // ---- routing ----

    /// Unconditional replacement; no validation of the label set
    pub fn set_active_view(&mut self, view: ActiveView) {
        self.active_view = view;
    }

    /// Logout drops the session and returns to the overview
    pub fn logout(&mut self) {
        self.session.logout();
        self.active_view = ActiveView::Overview;
    }

    // ---- theme ----

    /// Adopt an explicit theme, or invert the current one when `None`
    pub fn set_theme(&mut self, theme: Option<Theme>) {
        self.theme = theme.unwrap_or_else(|| self.theme.toggled());
    }

    // ---- content ----

    pub fn add_task(&mut self, id: u64, title: String, course: String, time: String, priority: Priority) {
        self.tasks.add_todo(id, title, course, time, priority);
    }

    /// Prepend a new group with the creator as its only member
    pub fn create_group(&mut self, id: u64, name: String, category: String, image: String) {
        self.groups.insert(
            0,
            Group {
                id,
                name,
                category,
                image,
                members: 1,
                active: 1,
            },
        );
    }

    pub fn mark_all_notifications_read(&mut self) {
        for notification in &mut self.notifications {
            notification.read = true;
        }
    }

    pub fn unread_notifications(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Open the settings modal at a tab (profile shortcuts and deep links both
/// land here)
pub fn store_open_settings(store: &AppStore, tab: SettingsTab) {
    store.overlays().write().open_settings(tab);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_guard_blocks_when_logged_out() {
        let mut state = AppState::new(Theme::Dark);
        let ran = Cell::new(0u32);

        let blocked = state.guard(|| ran.set(ran.get() + 1));

        assert!(blocked);
        assert_eq!(ran.get(), 0);
        assert!(state.overlays.login);
    }

    #[test]
    fn test_guard_runs_action_when_logged_in() {
        let mut state = AppState::new(Theme::Dark);
        state.session.login();
        let before = state.overlays.clone();
        let ran = Cell::new(0u32);

        let blocked = state.guard(|| ran.set(ran.get() + 1));

        assert!(!blocked);
        assert_eq!(ran.get(), 1);
        assert_eq!(state.overlays, before);
    }

    #[test]
    fn test_set_theme_explicit_and_inverted() {
        let mut state = AppState::new(Theme::Dark);
        state.set_theme(Some(Theme::Light));
        assert_eq!(state.theme, Theme::Light);

        state.set_theme(None);
        assert_eq!(state.theme, Theme::Dark);
        state.set_theme(None);
        assert_eq!(state.theme, Theme::Light);
    }

    #[test]
    fn test_logout_resets_view_and_session() {
        let mut state = AppState::new(Theme::Dark);
        state.session.login();
        state.session.join();
        state.set_active_view(ActiveView::Task);

        state.logout();

        assert_eq!(state.session, Session::default());
        assert_eq!(state.active_view, ActiveView::Overview);
    }

    #[test]
    fn test_add_task_grows_todo_by_one() {
        let mut state = AppState::new(Theme::Dark);
        let before = state.tasks.todo.len();

        state.add_task(
            99,
            "Finish UI Design".into(),
            "Design 101".into(),
            "30 mins".into(),
            Priority::High,
        );

        assert_eq!(state.tasks.todo.len(), before + 1);
        let ids: Vec<u64> = state.tasks.todo.iter().map(|t| t.id).collect();
        let unique: std::collections::HashSet<u64> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len());
    }

    #[test]
    fn test_create_group_prepends_with_single_member() {
        let mut state = AppState::new(Theme::Dark);
        let before = state.groups.len();

        state.create_group(7, "Rustaceans".into(), "Development".into(), "img".into());

        assert_eq!(state.groups.len(), before + 1);
        let group = &state.groups[0];
        assert_eq!(group.name, "Rustaceans");
        assert_eq!(group.members, 1);
        assert_eq!(group.active, 1);
    }

    #[test]
    fn test_mark_all_notifications_read() {
        let mut state = AppState::new(Theme::Dark);
        assert!(state.unread_notifications() > 0);

        state.mark_all_notifications_read();

        assert_eq!(state.unread_notifications(), 0);
        assert!(state.notifications.iter().all(|n| n.read));
    }
}
