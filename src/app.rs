//! Coursue Dashboard App
//!
//! Main application component: three-column layout with the view switch in
//! the middle and every overlay mounted at the root.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    ChatWidget, ComingSoon, CourseDetailModal, CourseStoreContent, DashboardContent, GroupContent,
    InboxContent, JoinModal, LessonContent, LoginModal, NotificationsPanel, ProfileModal,
    RightSidebar, SettingsModal, Sidebar, TaskContent,
};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};
use crate::theme::{self, BrowserStorage, Theme};
use crate::view::ActiveView;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new(Theme::load(&BrowserStorage)));

    // Provide context to all children
    provide_context(AppContext::new(store));

    // Mirror the theme onto the document root and into storage
    Effect::new(move |_| {
        let current = store.theme().get();
        web_sys::console::log_1(&format!("[APP] Applying {} theme", current.as_str()).into());
        theme::apply_to_document(current);
        current.persist(&BrowserStorage);
    });

    let content = move || match store.active_view().get().resolved() {
        ActiveView::Overview | ActiveView::Settings => view! { <DashboardContent /> }.into_any(),
        ActiveView::Lesson => view! { <LessonContent /> }.into_any(),
        ActiveView::Task => view! { <TaskContent /> }.into_any(),
        ActiveView::Group => view! { <GroupContent /> }.into_any(),
        ActiveView::Courses => view! { <CourseStoreContent /> }.into_any(),
        ActiveView::Inbox => view! { <InboxContent /> }.into_any(),
        ActiveView::Other(label) => view! { <ComingSoon label=label /> }.into_any(),
    };

    view! {
        <div class="app-layout">
            <Sidebar />

            <main class="main-content">{content}</main>

            <RightSidebar />

            // Overlays; each guards its own visibility
            <LoginModal />
            <JoinModal />
            <SettingsModal />
            <ProfileModal />
            <CourseDetailModal />
            <NotificationsPanel />
            <ChatWidget />
        </div>
    }
}
