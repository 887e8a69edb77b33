//! Content Models
//!
//! Flat records backing the dashboard panels. Everything is mock data owned
//! by the app store or the panel that renders it.

use serde::{Deserialize, Serialize};

/// Task priority for the kanban board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Falls back to `Medium` for anything unrecognized
    pub fn from_label(label: &str) -> Self {
        match label {
            "low" => Priority::Low,
            "high" => Priority::High,
            _ => Priority::Medium,
        }
    }
}

/// To-do column entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub course: String,
    pub time: String,
    pub priority: Priority,
}

/// In-progress column entry, tracked by percentage instead of estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskInProgress {
    pub id: u64,
    pub title: String,
    pub course: String,
    pub progress: u8,
    pub priority: Priority,
}

/// Done column entry with a final score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDone {
    pub id: u64,
    pub title: String,
    pub course: String,
    pub score: String,
}

/// Kanban board with one list per column
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskBoard {
    pub todo: Vec<Task>,
    pub in_progress: Vec<TaskInProgress>,
    pub done: Vec<TaskDone>,
}

impl TaskBoard {
    /// Append a new to-do entry. The id is generated at the call site
    /// (timestamp-derived in the browser) so the board stays testable.
    pub fn add_todo(&mut self, id: u64, title: String, course: String, time: String, priority: Priority) {
        self.todo.push(Task { id, title, course, time, priority });
    }
}

/// Overview progress card; also the entity shown by the course-detail modal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub watched: u32,
    pub total: u32,
    pub accent: String,
}

impl Course {
    pub fn percent_complete(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.watched * 100 + self.total / 2) / self.total
    }
}

/// "Continue watching" card on the overview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchItem {
    pub category: String,
    pub title: String,
    pub mentor: String,
    pub avatar: String,
    pub accent: String,
    pub image: String,
}

impl WatchItem {
    /// Case-insensitive search over title and category
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.title.to_lowercase().contains(&q) || self.category.to_lowercase().contains(&q)
    }
}

/// "Your Lesson" row on the overview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonRow {
    pub mentor: String,
    pub avatar: String,
    pub date: String,
    pub tag: String,
    pub title: String,
}

impl LessonRow {
    /// Case-insensitive search over title and mentor
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.title.to_lowercase().contains(&q) || self.mentor.to_lowercase().contains(&q)
    }
}

/// Lesson grid entry on the All Lessons panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub author: String,
    pub image: String,
    pub progress: u8,
    pub duration: String,
    pub rating: f32,
}

/// Filter tabs on the All Lessons panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonFilter {
    All,
    Popular,
    Newest,
    Completed,
}

impl LessonFilter {
    pub const ALL: [LessonFilter; 4] = [
        LessonFilter::All,
        LessonFilter::Popular,
        LessonFilter::Newest,
        LessonFilter::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LessonFilter::All => "All",
            LessonFilter::Popular => "Popular",
            LessonFilter::Newest => "Newest",
            LessonFilter::Completed => "Completed",
        }
    }

    /// Apply the filter: `All` keeps source order, `Popular` sorts by rating
    /// descending, `Newest` by id descending, `Completed` keeps only lessons
    /// at 100% progress.
    pub fn apply(&self, lessons: &[Lesson]) -> Vec<Lesson> {
        let mut result: Vec<Lesson> = lessons.to_vec();
        match self {
            LessonFilter::All => {}
            LessonFilter::Popular => {
                result.sort_by(|a, b| {
                    b.rating
                        .partial_cmp(&a.rating)
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
            }
            LessonFilter::Newest => result.sort_by(|a, b| b.id.cmp(&a.id)),
            LessonFilter::Completed => result.retain(|l| l.progress == 100),
        }
        result
    }
}

/// Priced entry in the course store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreCourse {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub author: String,
    pub avatar: String,
    pub image: String,
    pub price: String,
    pub rating: f32,
    pub reviews: u32,
    pub duration: String,
    pub lessons: u32,
    pub level: String,
    pub trending: bool,
}

/// Community group card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub image: String,
    pub members: u32,
    pub active: u32,
}

/// Trending discussion post on the group panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discussion {
    pub id: u32,
    pub author: String,
    pub avatar: String,
    pub title: String,
    pub likes: u32,
    pub comments: u32,
    pub time: String,
    pub tag: String,
}

/// Inbox conversation list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: u32,
    pub name: String,
    pub avatar: String,
    pub last_message: String,
    pub time: String,
    pub unread: u32,
    #[serde(default)]
    pub is_group: bool,
}

/// Who sent a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Me,
    Them,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Message,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub time: String,
    pub read: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mentor {
    pub name: String,
    pub role: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    pub name: String,
    pub status: String,
    pub avatar: String,
}

/// One bar of the daily activity chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatPoint {
    pub day: String,
    pub value: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(id: u32, progress: u8, rating: f32) -> Lesson {
        Lesson {
            id,
            title: format!("Lesson {id}"),
            category: "Design".into(),
            author: "Author".into(),
            image: String::new(),
            progress,
            duration: "1h".into(),
            rating,
        }
    }

    #[test]
    fn test_filter_completed_keeps_only_full_progress() {
        let lessons = vec![lesson(1, 75, 4.8), lesson(2, 100, 4.9), lesson(3, 0, 4.7)];
        let filtered = LessonFilter::Completed.apply(&lessons);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);
    }

    #[test]
    fn test_filter_popular_sorts_by_rating_descending() {
        let lessons = vec![lesson(1, 0, 4.6), lesson(2, 0, 5.0), lesson(3, 0, 4.8)];
        let filtered = LessonFilter::Popular.apply(&lessons);
        let ratings: Vec<f32> = filtered.iter().map(|l| l.rating).collect();
        assert_eq!(ratings, vec![5.0, 4.8, 4.6]);
        assert_eq!(filtered.len(), lessons.len());
    }

    #[test]
    fn test_filter_newest_sorts_by_id_descending() {
        let lessons = vec![lesson(1, 0, 4.6), lesson(3, 0, 4.8), lesson(2, 0, 5.0)];
        let ids: Vec<u32> = LessonFilter::Newest.apply(&lessons).iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_filter_all_keeps_source_order() {
        let lessons = vec![lesson(2, 0, 4.6), lesson(1, 0, 5.0)];
        let ids: Vec<u32> = LessonFilter::All.apply(&lessons).iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_add_todo_appends_one_record() {
        let mut board = TaskBoard::default();
        board.add_todo(
            42,
            "Finish UI Design".into(),
            "Design 101".into(),
            "30 mins".into(),
            Priority::High,
        );
        assert_eq!(board.todo.len(), 1);
        let task = &board.todo[0];
        assert_eq!(task.id, 42);
        assert_eq!(task.title, "Finish UI Design");
        assert_eq!(task.course, "Design 101");
        assert_eq!(task.time, "30 mins");
        assert_eq!(task.priority, Priority::High);
    }

    #[test]
    fn test_watch_item_search_is_case_insensitive() {
        let item = WatchItem {
            category: "Front End".into(),
            title: "Beginner's Guide".into(),
            mentor: "Dianne Russell".into(),
            avatar: String::new(),
            accent: String::new(),
            image: String::new(),
        };
        assert!(item.matches("front"));
        assert!(item.matches("GUIDE"));
        assert!(!item.matches("backend"));
    }

    #[test]
    fn test_priority_label_round_trip() {
        for p in [Priority::Low, Priority::Medium, Priority::High] {
            assert_eq!(Priority::from_label(p.label()), p);
        }
        assert_eq!(Priority::from_label("urgent"), Priority::Medium);
    }

    #[test]
    fn test_course_percent_complete() {
        let course = Course {
            title: "UI/UX Design".into(),
            watched: 2,
            total: 8,
            accent: String::new(),
        };
        assert_eq!(course.percent_complete(), 25);
    }
}
