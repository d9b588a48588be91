//! Mock content shown by the section panels.

/// A headline figure with its caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Stat {
    pub(crate) value: &'static str,
    pub(crate) label: &'static str,
}

const fn stat(value: &'static str, label: &'static str) -> Stat {
    Stat { value, label }
}

/// A titled blurb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Feature {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
}

const fn feature(title: &'static str, description: &'static str) -> Feature {
    Feature { title, description }
}

// Home

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum HomeTab {
    #[default]
    Overview,
    Features,
}

impl HomeTab {
    pub(crate) const ALL: [HomeTab; 2] = [HomeTab::Overview, HomeTab::Features];

    pub(crate) fn label(self) -> &'static str {
        match self {
            HomeTab::Overview => "Overview",
            HomeTab::Features => "Features",
        }
    }
}

pub(crate) const HOME_STATS: [Stat; 4] = [
    stat("99.9%", "Accuracy Rate"),
    stat("24/7", "Monitoring"),
    stat("1M+", "Analyses Daily"),
    stat("50+", "Languages"),
];

pub(crate) const HOME_FEATURES: [Feature; 6] = [
    feature(
        "Advanced Security",
        "Multi-layered protection against misinformation and security threats with real-time monitoring.",
    ),
    feature(
        "AI Processing",
        "Cutting-edge machine learning algorithms for intelligent data analysis and pattern recognition.",
    ),
    feature(
        "Smart Analytics",
        "Comprehensive analytics dashboard with actionable insights and detailed reporting capabilities.",
    ),
    feature(
        "Real-time Processing",
        "Lightning-fast processing of information with instant results and notifications.",
    ),
    feature(
        "Collaborative Platform",
        "Built for teams with advanced collaboration tools and user management systems.",
    ),
    feature(
        "Premium Support",
        "24/7 expert support with dedicated account management and technical assistance.",
    ),
];

// Verify

/// Outcome of a simulated credibility analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct VerificationReport {
    /// Credibility in `[0, 1)`.
    pub(crate) score: f64,
    /// Confidence percentage in `[85, 100)`.
    pub(crate) confidence: f64,
    pub(crate) sources: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Verdict {
    HighlyCredible,
    NeedsVerification,
    PotentiallyFalse,
}

impl Verdict {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Verdict::HighlyCredible => "Highly Credible",
            Verdict::NeedsVerification => "Needs Verification",
            Verdict::PotentiallyFalse => "Potentially False",
        }
    }

    pub(crate) fn summary(self) -> &'static str {
        match self {
            Verdict::HighlyCredible => {
                "The information appears to be accurate and comes from reliable sources."
            },
            Verdict::NeedsVerification => {
                "The information may contain inaccuracies. Cross-check with additional sources."
            },
            Verdict::PotentiallyFalse => {
                "The information shows signs of being misleading or false. Exercise caution."
            },
        }
    }
}

// Education

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum CourseCategory {
    #[default]
    All,
    Security,
    Detection,
    Analysis,
    Literacy,
}

impl CourseCategory {
    pub(crate) const ALL: [CourseCategory; 5] = [
        CourseCategory::All,
        CourseCategory::Security,
        CourseCategory::Detection,
        CourseCategory::Analysis,
        CourseCategory::Literacy,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            CourseCategory::All => "All Courses",
            CourseCategory::Security => "Security",
            CourseCategory::Detection => "Detection",
            CourseCategory::Analysis => "Analysis",
            CourseCategory::Literacy => "Digital Literacy",
        }
    }

    /// Whether a course tagged `category` passes this filter.
    pub(crate) fn admits(self, category: CourseCategory) -> bool {
        self == CourseCategory::All || self == category
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Course {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) duration: &'static str,
    pub(crate) difficulty: &'static str,
    pub(crate) rating: f32,
    pub(crate) students: u32,
    pub(crate) category: CourseCategory,
}

pub(crate) const COURSES: [Course; 4] = [
    Course {
        title: "AI Security Fundamentals",
        description: "Learn the basics of AI-powered security systems and threat detection.",
        duration: "4 hours",
        difficulty: "Beginner",
        rating: 4.8,
        students: 1250,
        category: CourseCategory::Security,
    },
    Course {
        title: "Misinformation Detection Techniques",
        description: "Advanced methods for identifying and combating misinformation.",
        duration: "6 hours",
        difficulty: "Intermediate",
        rating: 4.9,
        students: 890,
        category: CourseCategory::Detection,
    },
    Course {
        title: "Data Analysis with AI",
        description: "Comprehensive guide to analyzing data using artificial intelligence.",
        duration: "8 hours",
        difficulty: "Advanced",
        rating: 4.7,
        students: 650,
        category: CourseCategory::Analysis,
    },
    Course {
        title: "Digital Literacy for Everyone",
        description: "Essential digital skills for navigating the modern information landscape.",
        duration: "3 hours",
        difficulty: "Beginner",
        rating: 4.6,
        students: 2100,
        category: CourseCategory::Literacy,
    },
];

pub(crate) const EDUCATION_STATS: [Stat; 4] = [
    stat("50+", "Courses"),
    stat("10K+", "Students"),
    stat("4.8", "Rating"),
    stat("200+", "Hours"),
];

// Community

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum CommunityTab {
    #[default]
    Discussions,
    Members,
    Events,
}

impl CommunityTab {
    pub(crate) const ALL: [CommunityTab; 3] = [
        CommunityTab::Discussions,
        CommunityTab::Members,
        CommunityTab::Events,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            CommunityTab::Discussions => "Discussions",
            CommunityTab::Members => "Members",
            CommunityTab::Events => "Events",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Discussion {
    pub(crate) title: &'static str,
    pub(crate) author: &'static str,
    pub(crate) replies: u32,
    pub(crate) likes: u32,
    pub(crate) time: &'static str,
    pub(crate) category: &'static str,
}

pub(crate) const DISCUSSIONS: [Discussion; 3] = [
    Discussion {
        title: "Best practices for detecting deepfake videos",
        author: "Dr. Sarah Chen",
        replies: 23,
        likes: 45,
        time: "2 hours ago",
        category: "Detection",
    },
    Discussion {
        title: "New AI model for sentiment analysis",
        author: "Alex Rodriguez",
        replies: 18,
        likes: 32,
        time: "5 hours ago",
        category: "Research",
    },
    Discussion {
        title: "Community guidelines update",
        author: "VANTA Team",
        replies: 67,
        likes: 89,
        time: "1 day ago",
        category: "Announcements",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Member {
    pub(crate) name: &'static str,
    pub(crate) role: &'static str,
    pub(crate) contributions: u32,
    pub(crate) badges: &'static [&'static str],
}

pub(crate) const MEMBERS: [Member; 3] = [
    Member {
        name: "Dr. Sarah Chen",
        role: "AI Researcher",
        contributions: 145,
        badges: &["Expert", "Mentor"],
    },
    Member {
        name: "Alex Rodriguez",
        role: "Security Analyst",
        contributions: 89,
        badges: &["Active Member"],
    },
    Member {
        name: "Maria Johnson",
        role: "Data Scientist",
        contributions: 76,
        badges: &["Helpful", "Rising Star"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CommunityEvent {
    pub(crate) title: &'static str,
    pub(crate) date: &'static str,
    pub(crate) time: &'static str,
    pub(crate) attendees: u32,
    pub(crate) format: &'static str,
}

pub(crate) const EVENTS: [CommunityEvent; 3] = [
    CommunityEvent {
        title: "AI Security Webinar",
        date: "March 15, 2024",
        time: "2:00 PM EST",
        attendees: 150,
        format: "Online",
    },
    CommunityEvent {
        title: "Community Meetup",
        date: "March 22, 2024",
        time: "6:00 PM EST",
        attendees: 45,
        format: "In-Person",
    },
    CommunityEvent {
        title: "Research Showcase",
        date: "April 5, 2024",
        time: "10:00 AM EST",
        attendees: 200,
        format: "Hybrid",
    },
];

pub(crate) const COMMUNITY_STATS: [Stat; 4] = [
    stat("5.2K", "Members"),
    stat("1.8K", "Discussions"),
    stat("12.5K", "Contributions"),
    stat("150", "Experts"),
];

// Protection

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ProtectionLevel {
    Low,
    Medium,
    #[default]
    High,
}

impl ProtectionLevel {
    pub(crate) const ALL: [ProtectionLevel; 3] = [
        ProtectionLevel::Low,
        ProtectionLevel::Medium,
        ProtectionLevel::High,
    ];

    pub(crate) fn name(self) -> &'static str {
        match self {
            ProtectionLevel::Low => "Basic Protection",
            ProtectionLevel::Medium => "Balanced Protection",
            ProtectionLevel::High => "Maximum Protection",
        }
    }

    pub(crate) fn description(self) -> &'static str {
        match self {
            ProtectionLevel::Low => "Essential protection with minimal impact",
            ProtectionLevel::Medium => {
                "Balanced protection and performance"
            },
            ProtectionLevel::High => {
                "Comprehensive protection with advanced AI analysis"
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Threat {
    pub(crate) kind: &'static str,
    pub(crate) status: &'static str,
    pub(crate) count: u32,
    pub(crate) severity: Severity,
    pub(crate) time: &'static str,
}

pub(crate) const THREATS: [Threat; 3] = [
    Threat {
        kind: "Malicious Content",
        status: "blocked",
        count: 45,
        severity: Severity::High,
        time: "5 mins ago",
    },
    Threat {
        kind: "Phishing Attempt",
        status: "blocked",
        count: 12,
        severity: Severity::Medium,
        time: "15 mins ago",
    },
    Threat {
        kind: "Suspicious Link",
        status: "quarantined",
        count: 8,
        severity: Severity::Low,
        time: "1 hour ago",
    },
];

pub(crate) const PROTECTION_STATS: [Stat; 4] = [
    stat("1,247", "Threats Blocked"),
    stat("5,420", "Scans Today"),
    stat("99.9%", "Uptime"),
    stat("2 minutes ago", "Last Update"),
];

pub(crate) const PROTECTION_FEATURES: [Feature; 6] = [
    feature(
        "Real-time Protection",
        "Continuous monitoring of incoming content",
    ),
    feature("Data Encryption", "End-to-end encryption for all data"),
    feature("Content Analysis", "AI-powered content verification"),
    feature("Threat Intelligence", "Global threat database integration"),
    feature("Custom Rules", "Configurable protection policies"),
    feature("Auto Updates", "Automatic security definition updates"),
];

// Analytics

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum TimeRange {
    #[default]
    SevenDays,
    ThirtyDays,
    NinetyDays,
    OneYear,
}

impl TimeRange {
    pub(crate) const ALL: [TimeRange; 4] = [
        TimeRange::SevenDays,
        TimeRange::ThirtyDays,
        TimeRange::NinetyDays,
        TimeRange::OneYear,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            TimeRange::SevenDays => "7 Days",
            TimeRange::ThirtyDays => "30 Days",
            TimeRange::NinetyDays => "90 Days",
            TimeRange::OneYear => "1 Year",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Metric {
    pub(crate) title: &'static str,
    pub(crate) value: &'static str,
    pub(crate) change: &'static str,
}

pub(crate) const METRICS: [Metric; 4] = [
    Metric {
        title: "Total Analyses",
        value: "15,420",
        change: "+12%",
    },
    Metric {
        title: "Accuracy Rate",
        value: "96.8%",
        change: "+0.3%",
    },
    Metric {
        title: "Threats Blocked",
        value: "342",
        change: "+8%",
    },
    Metric {
        title: "Active Users",
        value: "1,250",
        change: "+15%",
    },
];

pub(crate) const RECENT_ACTIVITY: [Feature; 4] = [
    feature("Verification batch completed", "2 minutes ago"),
    feature("New threat signature deployed", "18 minutes ago"),
    feature("Weekly accuracy report generated", "1 hour ago"),
    feature("User cohort analysis refreshed", "3 hours ago"),
];

// Authority

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum AuthorityRole {
    #[default]
    Admin,
    Moderator,
    Analyst,
    Auditor,
}

impl AuthorityRole {
    pub(crate) const ALL: [AuthorityRole; 4] = [
        AuthorityRole::Admin,
        AuthorityRole::Moderator,
        AuthorityRole::Analyst,
        AuthorityRole::Auditor,
    ];

    pub(crate) fn name(self) -> &'static str {
        match self {
            AuthorityRole::Admin => "System Administrator",
            AuthorityRole::Moderator => "Content Moderator",
            AuthorityRole::Analyst => "Security Analyst",
            AuthorityRole::Auditor => "Compliance Auditor",
        }
    }

    pub(crate) fn description(self) -> &'static str {
        match self {
            AuthorityRole::Admin => "Full system access and control",
            AuthorityRole::Moderator => {
                "Content review and moderation privileges"
            },
            AuthorityRole::Analyst => "Security monitoring and analysis",
            AuthorityRole::Auditor => "Audit and compliance oversight",
        }
    }

    pub(crate) fn permissions(self) -> &'static [&'static str] {
        match self {
            AuthorityRole::Admin => &[
                "Full Access",
                "User Management",
                "System Settings",
                "Security Controls",
            ],
            AuthorityRole::Moderator => &[
                "Content Review",
                "Report Management",
                "User Warnings",
                "Basic Analytics",
            ],
            AuthorityRole::Analyst => &[
                "Threat Analysis",
                "Security Reports",
                "Alert Management",
                "Investigation Tools",
            ],
            AuthorityRole::Auditor => &[
                "Audit Logs",
                "Compliance Reports",
                "Policy Review",
                "Data Export",
            ],
        }
    }

    pub(crate) fn users(self) -> u32 {
        match self {
            AuthorityRole::Admin => 3,
            AuthorityRole::Moderator => 12,
            AuthorityRole::Analyst => 8,
            AuthorityRole::Auditor => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AuthorityAction {
    pub(crate) action: &'static str,
    pub(crate) user: &'static str,
    pub(crate) target: &'static str,
    pub(crate) time: &'static str,
}

pub(crate) const RECENT_ACTIONS: [AuthorityAction; 4] = [
    AuthorityAction {
        action: "User permissions updated",
        user: "Admin Smith",
        target: "john.doe@example.com",
        time: "5 minutes ago",
    },
    AuthorityAction {
        action: "Security policy modified",
        user: "Admin Johnson",
        target: "Data Protection Policy",
        time: "1 hour ago",
    },
    AuthorityAction {
        action: "Audit report generated",
        user: "Auditor Wilson",
        target: "Monthly Compliance Report",
        time: "3 hours ago",
    },
    AuthorityAction {
        action: "Threat investigation completed",
        user: "Analyst Brown",
        target: "Incident #2024-0342",
        time: "6 hours ago",
    },
];

pub(crate) const AUTHORITY_STATS: [Stat; 4] = [
    stat("28", "Authority Users"),
    stat("15", "Active Policies"),
    stat("1.2K", "Audit Logs"),
    stat("7", "Pending Reviews"),
];

pub(crate) const SYSTEM_STATUS: [Feature; 4] = [
    feature("Authentication Service", "Operational"),
    feature("Policy Engine", "Operational"),
    feature("Audit Logger", "Operational"),
    feature("Backup System", "Scheduled"),
];

// Settings

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum SettingsTab {
    #[default]
    Profile,
    Notifications,
    Security,
    Appearance,
    Privacy,
    System,
}

impl SettingsTab {
    pub(crate) const ALL: [SettingsTab; 6] = [
        SettingsTab::Profile,
        SettingsTab::Notifications,
        SettingsTab::Security,
        SettingsTab::Appearance,
        SettingsTab::Privacy,
        SettingsTab::System,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            SettingsTab::Profile => "Profile",
            SettingsTab::Notifications => "Notifications",
            SettingsTab::Security => "Security",
            SettingsTab::Appearance => "Appearance",
            SettingsTab::Privacy => "Privacy",
            SettingsTab::System => "System",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NotificationKind {
    Email,
    Push,
    Security,
    Updates,
}

impl NotificationKind {
    pub(crate) const ALL: [NotificationKind; 4] = [
        NotificationKind::Email,
        NotificationKind::Push,
        NotificationKind::Security,
        NotificationKind::Updates,
    ];

    pub(crate) fn title(self) -> &'static str {
        match self {
            NotificationKind::Email => "Email Notifications",
            NotificationKind::Push => "Push Notifications",
            NotificationKind::Security => "Security Alerts",
            NotificationKind::Updates => "Product Updates",
        }
    }

    pub(crate) fn description(self) -> &'static str {
        match self {
            NotificationKind::Email => "Receive important updates via email",
            NotificationKind::Push => {
                "Get instant notifications on your devices"
            },
            NotificationKind::Security => {
                "Critical security notifications and threats"
            },
            NotificationKind::Updates => {
                "News about new features and improvements"
            },
        }
    }
}

/// Static profile fields shown on the settings profile tab.
pub(crate) const PROFILE_FIELDS: [Feature; 4] = [
    feature("First Name", "John"),
    feature("Last Name", "Doe"),
    feature("Email Address", "john.doe@example.com"),
    feature("Job Title", "Security Analyst"),
];

pub(crate) const PRIVACY_OPTIONS: [Feature; 3] = [
    feature(
        "Data Collection",
        "Allow collection of usage data to improve services",
    ),
    feature("Analytics", "Share anonymous analytics data"),
    feature(
        "Marketing Communications",
        "Receive marketing emails and updates",
    ),
];

pub(crate) const SECURITY_ACTIONS: [Feature; 3] = [
    feature("Password", "Last changed 30 days ago"),
    feature("Two-Factor Authentication", "Add an extra layer of security"),
    feature("API Keys", "Manage keys used by integrations"),
];
