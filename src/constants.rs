//! Constants used throughout folio
//! This module centralizes the fixed account, endpoints and display limits

/// Account whose repositories make up the project list
pub const GITHUB_USERNAME: &str = "kalasuryakiran";

/// Repository listing API base
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Raw content host used to read README-like documents
pub const GITHUB_RAW_URL: &str = "https://raw.githubusercontent.com";

/// Branch README-like documents are read from
pub const DEFAULT_BRANCH: &str = "main";

/// Maximum repositories requested from the listing endpoint
pub const LISTING_PAGE_SIZE: usize = 100;

/// Candidate documents, tried in order, for tag extraction
pub const README_CANDIDATES: &[&str] = &["README.md", "replit.md"];

/// Number of cards shown before the list is expanded
pub const DEFAULT_VISIBLE: usize = 5;

/// Maximum tags taken from a README
pub const MAX_EXTRACTED_TAGS: usize = 6;

/// Maximum tags derived from repository metadata
pub const MAX_FALLBACK_TAGS: usize = 5;

/// Chip shown when no tag could be found at all
pub const PLACEHOLDER_TAG: &str = "Code";

/// Languages worth surfacing as a tag on their own
pub const FALLBACK_LANGUAGES: &[&str] = &["Python", "JavaScript", "TypeScript", "HTML", "CSS"];

/// Section headings that open a skills list in a README
pub const SKILL_SECTION_NAMES: &[&str] = &[
    "technologies",
    "built with",
    "stack",
    "skills",
    "tools",
    "libraries",
    "frameworks",
];

pub const VIEW_MORE_LABEL: &str = "View More";
pub const VIEW_LESS_LABEL: &str = "View Less";

/// Single row shown in place of the list when the listing cannot be loaded
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load projects from GitHub.";

/// Link label on every project card
pub const CARD_LINK_LABEL: &str = "View on GitHub";

/// Chat backend endpoint
pub const CHAT_API_URL: &str = "http://127.0.0.1:5000/api/chat";

/// Request timeout for every outbound call
pub const HTTP_TIMEOUT_SECS: u64 = 15;

/// User agent sent to the GitHub API (requests without one are rejected)
pub const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// Profile owner, used by the canned chat replies
pub const OWNER_NAME: &str = "Kala Surya Kiran";
pub const OWNER_EMAIL: &str = "kalasuryakiran12@gmail.com";
pub const OWNER_LINKEDIN: &str = "https://www.linkedin.com/in/kala-suryakiran";
pub const OWNER_GITHUB: &str = "https://github.com/kalasuryakiran";
pub const OWNER_PHONE: &str = "+91 8688415437";
pub const OWNER_LOCATION: &str = "Palwancha, Telangana, India";

/// Number of projects listed in a profile summary
pub const PROFILE_TOP_PROJECTS: usize = 10;
