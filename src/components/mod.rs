//! UI Components

mod add_task_modal;
mod chat_widget;
mod checkout_modal;
mod course_detail_modal;
mod course_store_content;
mod create_group_modal;
mod dashboard_content;
mod group_content;
mod inbox_content;
mod join_modal;
mod lesson_content;
mod login_modal;
mod notifications_panel;
mod profile_modal;
mod right_sidebar;
mod settings_modal;
mod sidebar;
mod task_content;

pub use add_task_modal::AddTaskModal;
pub use chat_widget::ChatWidget;
pub use checkout_modal::CheckoutModal;
pub use course_detail_modal::CourseDetailModal;
pub use course_store_content::CourseStoreContent;
pub use create_group_modal::CreateGroupModal;
pub use dashboard_content::{ComingSoon, DashboardContent};
pub use group_content::GroupContent;
pub use inbox_content::InboxContent;
pub use join_modal::JoinModal;
pub use lesson_content::LessonContent;
pub use login_modal::LoginModal;
pub use notifications_panel::NotificationsPanel;
pub use profile_modal::ProfileModal;
pub use right_sidebar::RightSidebar;
pub use settings_modal::SettingsModal;
pub use sidebar::Sidebar;
pub use task_content::TaskContent;
