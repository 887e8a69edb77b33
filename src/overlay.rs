//! Overlay Manager
//!
//! One flag per overlay, plus the selected entity for the course-detail
//! modal. Flags are independent: opening one overlay never closes another
//! (the chat widget can sit open under the settings modal, for example).

use serde::{Deserialize, Serialize};

use crate::models::Course;

/// Sub-tab of the settings modal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingsTab {
    #[default]
    Preferences,
    Security,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 2] = [SettingsTab::Preferences, SettingsTab::Security];

    pub fn title(&self) -> &'static str {
        match self {
            SettingsTab::Preferences => "Preferences",
            SettingsTab::Security => "Security",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SettingsTab::Preferences => "Theme & Notifications",
            SettingsTab::Security => "Password & Protection",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlayState {
    pub login: bool,
    pub join: bool,
    pub profile: bool,
    pub chat: bool,
    pub notifications: bool,
    /// `None` = closed, `Some(tab)` = open at that tab
    pub settings: Option<SettingsTab>,
    /// Course-detail modal is open iff this holds an entity
    pub selected_course: Option<Course>,
}

impl OverlayState {
    pub fn open_login(&mut self) {
        self.login = true;
    }

    pub fn close_login(&mut self) {
        self.login = false;
    }

    pub fn open_join(&mut self) {
        self.join = true;
    }

    pub fn close_join(&mut self) {
        self.join = false;
    }

    pub fn open_profile(&mut self) {
        self.profile = true;
    }

    pub fn close_profile(&mut self) {
        self.profile = false;
    }

    pub fn open_chat(&mut self) {
        self.chat = true;
    }

    pub fn close_chat(&mut self) {
        self.chat = false;
    }

    pub fn open_notifications(&mut self) {
        self.notifications = true;
    }

    pub fn close_notifications(&mut self) {
        self.notifications = false;
    }

    /// Opens the settings modal at `tab`, switching tabs in place when the
    /// modal is already open.
    pub fn open_settings(&mut self, tab: SettingsTab) {
        self.settings = Some(tab);
    }

    /// Unconditional close; the next open must name a tab again
    pub fn close_settings(&mut self) {
        self.settings = None;
    }

    pub fn open_course_detail(&mut self, course: Course) {
        self.selected_course = Some(course);
    }

    pub fn close_course_detail(&mut self) {
        self.selected_course = None;
    }

    pub fn course_detail_open(&self) -> bool {
        self.selected_course.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(title: &str) -> Course {
        Course {
            title: title.into(),
            watched: 2,
            total: 8,
            accent: "purple".into(),
        }
    }

    #[test]
    fn test_course_detail_open_iff_entity_present() {
        let mut overlays = OverlayState::default();
        assert!(!overlays.course_detail_open());

        overlays.open_course_detail(course("Branding"));
        assert!(overlays.course_detail_open());
        assert_eq!(overlays.selected_course.as_ref().map(|c| c.title.as_str()), Some("Branding"));

        overlays.close_course_detail();
        assert!(!overlays.course_detail_open());
        assert!(overlays.selected_course.is_none());

        // arbitrary open/close sequences keep the invariant
        overlays.open_course_detail(course("Front End"));
        overlays.open_course_detail(course("UI/UX Design"));
        assert!(overlays.course_detail_open());
        overlays.close_course_detail();
        overlays.close_course_detail();
        assert!(!overlays.course_detail_open());
    }

    #[test]
    fn test_settings_tab_transitions() {
        let mut overlays = OverlayState::default();
        assert_eq!(overlays.settings, None);

        overlays.open_settings(SettingsTab::Preferences);
        assert_eq!(overlays.settings, Some(SettingsTab::Preferences));

        // switching tabs while already open
        overlays.open_settings(SettingsTab::Security);
        assert_eq!(overlays.settings, Some(SettingsTab::Security));

        overlays.close_settings();
        assert_eq!(overlays.settings, None);
    }

    #[test]
    fn test_overlays_are_independent() {
        let mut overlays = OverlayState::default();
        overlays.open_chat();
        overlays.open_settings(SettingsTab::Preferences);
        overlays.open_notifications();

        assert!(overlays.chat);
        assert!(overlays.settings.is_some());
        assert!(overlays.notifications);

        overlays.close_settings();
        assert!(overlays.chat);
        assert!(overlays.notifications);
    }
}
