//! Static page and section catalogs.
//!
//! The fixed, hardcoded lists of known pages and in-page sections used as
//! always-available search suggestions, independent of backend data.
//! Declaration order is significant: suggestion mode and match emission both
//! preserve it.

/// A routable page of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageEntry {
    pub title: &'static str,
    pub description: &'static str,
    /// Destination route, no fragment.
    pub path: &'static str,
}

/// An in-page section reachable via a `#fragment`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionEntry {
    /// Fragment identifier; matches the destination element's
    /// search-section attribute (or element id).
    pub key: &'static str,
    pub title: &'static str,
    /// Destination route including the `#fragment`.
    pub path: &'static str,
}

/// All routable pages, in suggestion order.
pub const STATIC_PAGES: &[PageEntry] = &[
    PageEntry {
        title: "Dashboard",
        description: "Your study overview, streaks, and recent activity",
        path: "/dashboard",
    },
    PageEntry {
        title: "Reviewers",
        description: "Manage your uploaded reviewers and AI-enhanced content",
        path: "/reviewers",
    },
    PageEntry {
        title: "Quizzes",
        description: "Generate and take quizzes from your reviewers",
        path: "/quizzes",
    },
    PageEntry {
        title: "Quiz History",
        description: "Past quiz attempts, answers, and scores",
        path: "/quizzes/history",
    },
    PageEntry {
        title: "Reports",
        description: "Side-by-side original and enhanced content reports",
        path: "/reports",
    },
    PageEntry {
        title: "Settings",
        description: "Profile, preferences, and account settings",
        path: "/settings",
    },
    PageEntry {
        title: "User Management",
        description: "Admin console for user accounts and roles",
        path: "/admin/users",
    },
    PageEntry {
        title: "LLM Configuration",
        description: "Admin console for language model providers and prompts",
        path: "/admin/llm-configs",
    },
    PageEntry {
        title: "Analytics",
        description: "Admin console for usage and model analytics",
        path: "/admin/analytics",
    },
];

/// All known in-page sections, in suggestion order.
pub const STATIC_SECTIONS: &[SectionEntry] = &[
    SectionEntry {
        key: "recent-activity",
        title: "Recent Activity",
        path: "/dashboard#recent-activity",
    },
    SectionEntry {
        key: "study-streak",
        title: "Study Streak",
        path: "/dashboard#study-streak",
    },
    SectionEntry {
        key: "upload-reviewer",
        title: "Upload Reviewer",
        path: "/reviewers#upload-reviewer",
    },
    SectionEntry {
        key: "enhanced-content",
        title: "Enhanced Content",
        path: "/reports#enhanced-content",
    },
    SectionEntry {
        key: "quiz-generator",
        title: "Quiz Generator",
        path: "/quizzes#quiz-generator",
    },
    SectionEntry {
        key: "score-breakdown",
        title: "Score Breakdown",
        path: "/quizzes/history#score-breakdown",
    },
    SectionEntry {
        key: "llm-providers",
        title: "LLM Providers",
        path: "/admin/llm-configs#llm-providers",
    },
    SectionEntry {
        key: "usage-analytics",
        title: "Usage Analytics",
        path: "/admin/analytics#usage-analytics",
    },
];
