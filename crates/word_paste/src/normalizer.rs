//! Word list normalization
//!
//! [`WordListNormalizer`] turns pasted content into an ordered list of plain
//! text items:
//!
//! 1. Word markup is stripped from the whole document ([`strip_word_markup`]).
//! 2. If `<li>` elements are present, each one becomes an item.
//! 3. Otherwise every non-blank line becomes an item, with any leading bullet
//!    or numbering marker removed ([`strip_bullet`]). Word HTML wraps the
//!    marker of a list paragraph in its own `<span>`, so a line whose raw text
//!    has no marker is checked again with its tags removed.
//! 4. Each item is cleaned ([`clean_item_content`]).
//!
//! The result is never empty and no item is empty.

use crate::patterns::compile;
use crate::{
    clean_item_content, strip_bullet, strip_tags, strip_word_markup, NormalizerSettings,
    PLACEHOLDER_TEXT,
};
use regex_lite::Regex;
use std::sync::OnceLock;

struct ListRules {
    list_item_tag: Option<Regex>,
    list_item: Option<Regex>,
}

impl ListRules {
    fn get() -> &'static Self {
        static RULES: OnceLock<ListRules> = OnceLock::new();
        RULES.get_or_init(|| Self {
            list_item_tag: compile(r"(?i)<li(?:\s[^>]*)?>"),
            list_item: compile(r"(?is)<li(?:\s[^>]*)?>(.*?)</li\s*>"),
        })
    }
}

/// Check if content carries `<li>` list markup
pub fn contains_list_markup(content: &str) -> bool {
    ListRules::get()
        .list_item_tag
        .as_ref()
        .is_some_and(|re| re.is_match(content))
}

/// Converts pasted word-processor content into plain list items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordListNormalizer {
    placeholder: String,
}

impl Default for WordListNormalizer {
    fn default() -> Self {
        Self {
            placeholder: PLACEHOLDER_TEXT.to_string(),
        }
    }
}

impl WordListNormalizer {
    /// Create a normalizer using the default placeholder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a normalizer with a custom placeholder.
    ///
    /// A blank placeholder would break the non-empty item guarantee, so it
    /// falls back to [`PLACEHOLDER_TEXT`].
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        let placeholder = placeholder.trim();
        if placeholder.is_empty() {
            Self::default()
        } else {
            Self {
                placeholder: placeholder.to_string(),
            }
        }
    }

    /// Create a normalizer from settings
    pub fn with_settings(settings: &NormalizerSettings) -> Self {
        Self::with_placeholder(settings.placeholder.as_str())
    }

    /// Text used for items with no meaningful content
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Normalize pasted content into list items
    pub fn normalize(&self, content: &str) -> Vec<String> {
        let cleaned = strip_word_markup(content);

        let mut items = if contains_list_markup(&cleaned) {
            self.items_from_list_markup(&cleaned)
        } else {
            self.items_from_lines(&cleaned)
        };

        items.retain(|item| !item.trim().is_empty());
        if items.is_empty() {
            items.push(self.placeholder.clone());
        }

        tracing::debug!(
            target: "word_paste::normalize",
            input_len = content.len(),
            items = items.len(),
            "paste normalized"
        );

        items
    }

    fn items_from_list_markup(&self, content: &str) -> Vec<String> {
        tracing::trace!(target: "word_paste::normalize", "extracting <li> elements");

        let Some(list_item) = ListRules::get().list_item.as_ref() else {
            return Vec::new();
        };

        list_item
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .map(|inner| clean_item_content(inner.as_str().trim(), &self.placeholder))
            .collect()
    }

    fn items_from_lines(&self, content: &str) -> Vec<String> {
        tracing::trace!(target: "word_paste::normalize", "splitting into lines");

        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| self.clean_line(line))
            .collect()
    }

    fn clean_line(&self, line: &str) -> String {
        if let Some(text) = strip_bullet(line) {
            return clean_item_content(text, &self.placeholder);
        }

        let bare = strip_tags(line);
        let text = strip_bullet(&bare).unwrap_or(bare.as_str());
        clean_item_content(text, &self.placeholder)
    }
}

/// Normalize pasted content with default settings
pub fn clean_word_content_to_list_items(content: &str) -> Vec<String> {
    WordListNormalizer::new().normalize(content)
}
