use std::path::PathBuf;

// ── Site constants ───────────────────────────────────────────────────────────

pub const DEFAULT_PAGES_DIR: &str = "pages";
pub const DEFAULT_OUTPUT_DIR: &str = "content";
pub const INDEX_FILE: &str = "INDEX.md";

/// Full organization name, used to spot the copyright paragraph.
pub const ORG_NAME: &str = "Golden Compasses Research Lodge";
/// Short name; the footer is only kept when it mentions this.
pub const ORG_SHORT_NAME: &str = "Golden Compasses";
pub const RIGHTS_RESERVED: &str = "All rights reserved";

/// Lowercase substrings marking gambling / SEO spam.
pub const SPAM_KEYWORDS: &[&str] = &[
    "casino",
    "gambling",
    "betting",
    "slot",
    "poker",
    "roulette",
    "mostbet",
    "parimatch",
    "1xbet",
    "melbet",
    "pinup",
    // Korean
    "포커",
    "카지노",
    "베팅",
    "도박",
    // Spanish
    "tragamonedas",
    "apuestas",
    "seo",
    "backlink",
    "slot algorithm logic",
];

/// Lowercase substrings that disqualify an image source.
pub const IMAGE_SPAM_MARKERS: &[&str] = &["spam", "bet", "casino"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageEntry {
    pub file: &'static str,
    pub name: &'static str,
}

pub const PAGES: &[PageEntry] = &[
    PageEntry { file: "about.html", name: "about" },
    PageEntry { file: "library.html", name: "library" },
    PageEntry { file: "members.html", name: "members" },
    PageEntry { file: "news.html", name: "news" },
    PageEntry { file: "calendar.html", name: "calendar" },
    PageEntry { file: "contact.html", name: "contact" },
    PageEntry { file: "officers.html", name: "officers" },
    PageEntry { file: "grand-master.html", name: "grand-master" },
    PageEntry { file: "links.html", name: "links" },
];

// ── Run configuration ────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    pub pages_dir: PathBuf,
    pub output_dir: PathBuf,
    pub pages: Vec<PageEntry>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self::with_dirs(DEFAULT_PAGES_DIR, DEFAULT_OUTPUT_DIR)
    }
}

impl ExtractorConfig {
    /// Static page list, custom input and output directories.
    pub fn with_dirs(pages_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            pages_dir: pages_dir.into(),
            output_dir: output_dir.into(),
            pages: PAGES.to_vec(),
        }
    }
}

/// Output file stem for a page: hyphens become underscores.
pub fn file_stem(page: &str) -> String {
    page.replace('-', "_")
}
