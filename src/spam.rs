use once_cell::sync::Lazy;

use crate::config::{IMAGE_SPAM_MARKERS, SPAM_KEYWORDS};

static DEFAULT_FILTER: Lazy<SpamFilter> = Lazy::new(SpamFilter::default);

/// Case-insensitive substring matcher over a fixed keyword list.
#[derive(Debug, Clone)]
pub struct SpamFilter {
    keywords: Vec<String>,
}

impl Default for SpamFilter {
    fn default() -> Self {
        Self::new(SPAM_KEYWORDS.iter().copied())
    }
}

impl SpamFilter {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// No word boundaries: "casinos" and "museo" both match.
    pub fn is_spam(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.keywords.iter().any(|k| lower.contains(k.as_str()))
    }
}

pub fn is_spam(text: &str) -> bool {
    DEFAULT_FILTER.is_spam(text)
}

pub fn is_spam_image_src(src: &str) -> bool {
    let lower = src.to_lowercase();
    IMAGE_SPAM_MARKERS.iter().any(|m| lower.contains(m))
}
