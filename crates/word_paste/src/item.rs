//! Per-item cleanup

use crate::decode_entities;
use crate::patterns::{compile, replace_all};
use regex_lite::Regex;
use std::sync::OnceLock;

/// Fallback text for items with no meaningful content
pub const PLACEHOLDER_TEXT: &str = "Text";

/// Characters that count as leftover list decoration when an item consists
/// of nothing else
pub const RESIDUE_GLYPHS: &[char] = &[
    '•', '·', '▪', '▫', '‣', '⁃', '◦', '‧', '⦿', '⦾', '-', '*', '+', '.', '(', ')',
];

fn line_breaks() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| compile(r"(?i)<br\s*/?>")).as_ref()
}

fn tags() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| compile(r"<[^>]+>")).as_ref()
}

/// Check whether text is made only of bullet and punctuation residue
pub fn is_marker_residue(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| RESIDUE_GLYPHS.contains(&c))
}

/// Turn `<br>` into a space and remove every other tag. Entities are left
/// encoded.
pub fn strip_tags(content: &str) -> String {
    let content = replace_all(line_breaks(), content, " ");
    replace_all(tags(), &content, "").into_owned()
}

/// Clean a single candidate list item.
///
/// Line breaks become spaces, tags are removed, entities are decoded and
/// whitespace is collapsed. Angle brackets left over from tags cut in half
/// are dropped before decoding, so only `&lt;`/`&gt;` can put them back.
/// Empty or residue-only results are replaced with `placeholder`.
pub fn clean_item_content(content: &str, placeholder: &str) -> String {
    let content: String = strip_tags(content)
        .chars()
        .filter(|c| !matches!(c, '<' | '>'))
        .collect();
    let content = decode_entities(&content);
    let content = content.split_whitespace().collect::<Vec<_>>().join(" ");

    if content.is_empty() || is_marker_residue(&content) {
        placeholder.to_string()
    } else {
        content
    }
}
