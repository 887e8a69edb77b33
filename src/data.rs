//! Mock Content Providers
//!
//! Static collections consumed read-only by the panels. Lists that the UI
//! mutates (tasks, groups, notifications) seed the app store and are copied
//! out of here once at startup.

use crate::models::*;

/// Sidebar navigation labels, in display order
pub const MENU_ITEMS: &[&str] = &["Overview", "Lesson", "Task", "Group", "Courses"];

/// Group categories offered by the create-group form
pub const GROUP_CATEGORIES: &[&str] = &["Design", "Development", "Product", "Marketing", "Business"];

/// Image pool for newly created groups
pub const GROUP_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1522071820081-009f0129c71c?auto=format&fit=crop&q=80&w=150&h=150",
    "https://images.unsplash.com/photo-1517245386807-bb43f82c33c4?auto=format&fit=crop&q=80&w=150&h=150",
    "https://images.unsplash.com/photo-1531403009284-440f080d1e12?auto=format&fit=crop&q=80&w=150&h=150",
    "https://images.unsplash.com/photo-1552664730-d307ca884978?auto=format&fit=crop&q=80&w=150&h=150",
];

/// Module titles used to flesh out the course-detail syllabus
pub const MODULE_TITLES: &[&str] = &[
    "Introduction & Overview",
    "Core Principles Deep Dive",
    "Tools of the Trade",
    "Advanced Techniques",
    "Case Study Analysis",
    "Practical Application",
    "Industry Best Practices",
    "Final Project Brief",
];

pub fn module_title(index: usize) -> String {
    MODULE_TITLES
        .get(index)
        .map(|t| t.to_string())
        .unwrap_or_else(|| format!("Lesson {}", index + 1))
}

pub fn friends() -> Vec<Friend> {
    [
        ("Samantha", "Friend", "https://i.pravatar.cc/150?u=samantha"),
        ("Karen", "Friend", "https://i.pravatar.cc/150?u=karen"),
        ("Peter", "Old Friend", "https://i.pravatar.cc/150?u=peter"),
    ]
    .into_iter()
    .map(|(name, status, avatar)| Friend {
        name: name.into(),
        status: status.into(),
        avatar: avatar.into(),
    })
    .collect()
}

pub fn progress_cards() -> Vec<Course> {
    [
        ("UI/UX Design", 2, 8, "purple"),
        ("Branding", 2, 8, "pink"),
        ("Front End", 2, 8, "blue"),
    ]
    .into_iter()
    .map(|(title, watched, total, accent)| Course {
        title: title.into(),
        watched,
        total,
        accent: accent.into(),
    })
    .collect()
}

pub fn watch_list() -> Vec<WatchItem> {
    vec![
        WatchItem {
            category: "Front End".into(),
            title: "Beginner's Guide to becoming a pro Frontend Dev".into(),
            mentor: "Dianne Russell".into(),
            avatar: "https://i.pravatar.cc/150?u=dianne".into(),
            accent: "orange".into(),
            image: "https://picsum.photos/seed/frontend/400/250".into(),
        },
        WatchItem {
            category: "Design".into(),
            title: "Optimizing User Experience in a big product".into(),
            mentor: "Cody Fisher".into(),
            avatar: "https://i.pravatar.cc/150?u=cody".into(),
            accent: "blue".into(),
            image: "https://picsum.photos/seed/ux/400/250".into(),
        },
    ]
}

pub fn lesson_rows() -> Vec<LessonRow> {
    vec![
        LessonRow {
            mentor: "Ronald Richards".into(),
            avatar: "https://i.pravatar.cc/150?u=ronald".into(),
            date: "Sep 24".into(),
            tag: "UI/UX".into(),
            title: "Wireframing for easy to understand".into(),
        },
        LessonRow {
            mentor: "Wade Warren".into(),
            avatar: "https://i.pravatar.cc/150?u=wade".into(),
            date: "Sep 21".into(),
            tag: "Branding".into(),
            title: "Sketching for beginner can be pro".into(),
        },
    ]
}

pub fn stats() -> Vec<StatPoint> {
    [
        ("Mon", 30),
        ("Tue", 50),
        ("Wed", 45),
        ("Thu", 80),
        ("Fri", 60),
        ("Sat", 40),
        ("Sun", 70),
    ]
    .into_iter()
    .map(|(day, value)| StatPoint { day: day.into(), value })
    .collect()
}

pub fn mentors() -> Vec<Mentor> {
    [
        ("Theresa Webb", "UI Designer", "https://i.pravatar.cc/150?u=theresa"),
        ("Albert Flores", "WP Developer", "https://i.pravatar.cc/150?u=albert"),
        ("Savannah Nguyen", "Scrum Master", "https://i.pravatar.cc/150?u=savannah"),
    ]
    .into_iter()
    .map(|(name, role, avatar)| Mentor {
        name: name.into(),
        role: role.into(),
        avatar: avatar.into(),
    })
    .collect()
}

pub fn lessons() -> Vec<Lesson> {
    [
        (1, "UI Design Principles", "Design", "Jason Ranti", "photo-1586717791821-3f44a5638d28", 75, "3h 20m", 4.8),
        (2, "Advanced Prototyping", "UX Design", "Sarah Johnson", "photo-1559028012-481c04fa702d", 30, "5h 45m", 4.9),
        (3, "Design Systems 101", "System", "Mike Chen", "photo-1550751827-4bd374c3f58b", 0, "4h 15m", 4.7),
        (4, "Figma Mastery", "Tools", "Emily Davis", "photo-1611162617474-5b21e879e113", 100, "2h 30m", 5.0),
        (5, "Web Typography", "Typography", "David Wilson", "photo-1558655146-d09347e92766", 45, "1h 50m", 4.6),
        (6, "Color Theory", "Design", "Jessica Lee", "photo-1507925921958-8a62f3d1a50d", 10, "2h 45m", 4.8),
    ]
    .into_iter()
    .map(|(id, title, category, author, photo, progress, duration, rating)| Lesson {
        id,
        title: title.into(),
        category: category.into(),
        author: author.into(),
        image: format!("https://images.unsplash.com/{photo}?auto=format&fit=crop&q=80&w=300&h=200"),
        progress,
        duration: duration.into(),
        rating,
    })
    .collect()
}

pub fn store_courses() -> Vec<StoreCourse> {
    vec![
        StoreCourse {
            id: 1,
            title: "Mastering Next.js 14 & Framer Motion".into(),
            category: "Development".into(),
            author: "Alex Rivera".into(),
            avatar: "https://i.pravatar.cc/150?u=alex".into(),
            image: "https://images.unsplash.com/photo-1633356122544-f134324a6cee?auto=format&fit=crop&q=80&w=800&h=500".into(),
            price: "$49.99".into(),
            rating: 4.9,
            reviews: 1240,
            duration: "12h 45m".into(),
            lessons: 56,
            level: "Intermediate".into(),
            trending: true,
        },
        StoreCourse {
            id: 2,
            title: "Advanced UI Design Systems".into(),
            category: "Design".into(),
            author: "Sarah Valentine".into(),
            avatar: "https://i.pravatar.cc/150?u=sarahv".into(),
            image: "https://images.unsplash.com/photo-1586717791821-3f44a5638d28?auto=format&fit=crop&q=80&w=800&h=500".into(),
            price: "$69.00".into(),
            rating: 5.0,
            reviews: 2100,
            duration: "18h 30m".into(),
            lessons: 84,
            level: "Expert".into(),
            trending: false,
        },
        StoreCourse {
            id: 3,
            title: "Fullstack Web Development Bootcamp".into(),
            category: "Development".into(),
            author: "Jordan Smith".into(),
            avatar: "https://i.pravatar.cc/150?u=jordan".into(),
            image: "https://images.unsplash.com/photo-1498050108023-c5249f4df085?auto=format&fit=crop&q=80&w=800&h=500".into(),
            price: "$99.00".into(),
            rating: 4.8,
            reviews: 3500,
            duration: "45h 20m".into(),
            lessons: 120,
            level: "Beginner".into(),
            trending: true,
        },
        StoreCourse {
            id: 4,
            title: "Brand Strategy & Visual Identity".into(),
            category: "Marketing".into(),
            author: "Emily Chen".into(),
            avatar: "https://i.pravatar.cc/150?u=emily".into(),
            image: "https://images.unsplash.com/photo-1558655146-d09347e92766?auto=format&fit=crop&q=80&w=800&h=500".into(),
            price: "$39.99".into(),
            rating: 4.7,
            reviews: 850,
            duration: "8h 15m".into(),
            lessons: 24,
            level: "All Levels".into(),
            trending: false,
        },
    ]
}

pub fn initial_tasks() -> TaskBoard {
    TaskBoard {
        todo: vec![
            Task {
                id: 1,
                title: "Watch \"UI Design Principles\"".into(),
                course: "UI/UX Design".into(),
                time: "20 mins".into(),
                priority: Priority::High,
            },
            Task {
                id: 2,
                title: "Read \"Color Theory\" Article".into(),
                course: "Graphic Design".into(),
                time: "10 mins".into(),
                priority: Priority::Medium,
            },
        ],
        in_progress: vec![TaskInProgress {
            id: 3,
            title: "Complete \"Wireframing\" Assignment".into(),
            course: "UI/UX Design".into(),
            progress: 65,
            priority: Priority::High,
        }],
        done: vec![TaskDone {
            id: 4,
            title: "Introduction Quiz".into(),
            course: "Design Systems".into(),
            score: "100%".into(),
        }],
    }
}

pub fn initial_groups() -> Vec<Group> {
    [
        (1, "UI/UX Designers", 1240, 45, "photo-1542744173-8e7e53415bb0", "Design"),
        (2, "Frontend Masters", 890, 120, "photo-1517245386807-bb43f82c33c4", "Development"),
        (3, "Product Managers", 560, 30, "photo-1531403009284-440f080d1e12", "Product"),
    ]
    .into_iter()
    .map(|(id, name, members, active, photo, category)| Group {
        id,
        name: name.into(),
        category: category.into(),
        image: format!("https://images.unsplash.com/{photo}?auto=format&fit=crop&q=80&w=150&h=150"),
        members,
        active,
    })
    .collect()
}

pub fn discussions() -> Vec<Discussion> {
    vec![
        Discussion {
            id: 1,
            author: "Sarah Jenkins".into(),
            avatar: "https://i.pravatar.cc/150?u=sarah".into(),
            title: "Best tools for wireframing in 2024?".into(),
            likes: 45,
            comments: 12,
            time: "2h ago".into(),
            tag: "Discussion".into(),
        },
        Discussion {
            id: 2,
            author: "Mike Ross".into(),
            avatar: "https://i.pravatar.cc/150?u=mike".into(),
            title: "How to handle accessibility handoffs?".into(),
            likes: 32,
            comments: 8,
            time: "5h ago".into(),
            tag: "Question".into(),
        },
    ]
}

pub fn conversations() -> Vec<Conversation> {
    vec![
        Conversation {
            id: 1,
            name: "Jason Ranti".into(),
            avatar: "https://i.pravatar.cc/150?u=jason".into(),
            last_message: "Can you review my wireframes?".into(),
            time: "2m".into(),
            unread: 2,
            is_group: false,
        },
        Conversation {
            id: 2,
            name: "Angelina Lee".into(),
            avatar: "https://i.pravatar.cc/150?u=angelina".into(),
            last_message: "The meeting is rescheduled.".into(),
            time: "1h".into(),
            unread: 0,
            is_group: false,
        },
        Conversation {
            id: 3,
            name: "Design Team".into(),
            avatar: "https://i.pravatar.cc/150?u=team".into(),
            last_message: "New assets uploaded to drive.".into(),
            time: "3h".into(),
            unread: 0,
            is_group: true,
        },
    ]
}

pub fn inbox_thread() -> Vec<ChatMessage> {
    [
        (Sender::Them, "Hey! How is the project coming along?", "10:30 AM"),
        (Sender::Me, "Pretty good! I just finished the new dashboard layout.", "10:32 AM"),
        (Sender::Them, "Awesome! Can't wait to see it.", "10:33 AM"),
        (Sender::Them, "Can you review my wireframes when you have a sec?", "10:33 AM"),
    ]
    .into_iter()
    .map(|(sender, text, time)| ChatMessage {
        sender,
        text: text.into(),
        time: time.into(),
    })
    .collect()
}

pub fn initial_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            kind: NotificationKind::Info,
            title: "System Update".into(),
            message: "Coursue dashboard has been updated to v2.0".into(),
            time: "2m ago".into(),
            read: false,
        },
        Notification {
            id: 2,
            kind: NotificationKind::Success,
            title: "Course Completed".into(),
            message: "You successfully finished \"UI Design Basics\"".into(),
            time: "1h ago".into(),
            read: false,
        },
        Notification {
            id: 3,
            kind: NotificationKind::Message,
            title: "New Mentor Reply".into(),
            message: "Jason Ranti replied to your comment".into(),
            time: "3h ago".into(),
            read: true,
        },
    ]
}
