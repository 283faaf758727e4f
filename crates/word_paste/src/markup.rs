//! Whole-document Word markup stripping
//!
//! Clipboard HTML from Word carries conditional comments, Office namespace
//! tags (`<o:p>`, `<w:...>`), `mso-` style declarations and `Mso*` classes.
//! [`strip_word_markup`] removes that cruft and turns paragraphs into lines
//! before list items are extracted.

use crate::patterns::compile;
use regex_lite::Regex;
use std::sync::OnceLock;

/// Cleanup passes as (pattern, replacement), applied in order
const MARKUP_STEPS: &[(&str, &str)] = &[
    // Comments, including conditional `<!--[if gte mso 9]>` blocks
    (r"(?s)<!--.*?-->", ""),
    (r"(?i)<o:p\s*/?>|</o:p\s*>", ""),
    (r"(?i)</?w:[^>]*>", ""),
    (r#"(?i)\s*mso-[^:;"'>]+:[^;"'>]*;?"#, ""),
    (r#"(?i)\s*class=(?:"[^"]*Mso[^"]*"|'[^']*Mso[^']*'|[^\s>"']*Mso[^\s>]*)"#, ""),
    (r"(?i)<span[^>]*>\s*</span\s*>", ""),
    // Paragraphs become lines
    (r"(?i)<p(?:\s[^>]*)?>", "\n"),
    (r"(?i)</p\s*>", ""),
    (r"[ \t]+", " "),
    (r"\n\s+", "\n"),
];

fn markup_rules() -> &'static [(Regex, &'static str)] {
    static RULES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    RULES.get_or_init(|| {
        MARKUP_STEPS
            .iter()
            .filter_map(|&(pattern, replacement)| compile(pattern).map(|re| (re, replacement)))
            .collect()
    })
}

/// Strip Word-specific markup from pasted content.
///
/// Paragraph tags become line breaks, runs of spaces and tabs collapse to a
/// single space, indentation after a line break is dropped and the result is
/// trimmed. Other HTML (`<li>`, `<span>` with content, `<b>`, ...) is kept for
/// the later extraction step.
pub fn strip_word_markup(content: &str) -> String {
    let cleaned = markup_rules()
        .iter()
        .fold(content.to_string(), |text, (re, replacement)| {
            re.replace_all(&text, *replacement).into_owned()
        });

    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_steps_compile() {
        assert_eq!(markup_rules().len(), MARKUP_STEPS.len());
    }

    #[test]
    fn test_removes_conditional_comments() {
        let input = "<!--[if gte mso 9]><xml><o:OfficeDocumentSettings/></xml><![endif]-->Plain text";
        assert_eq!(strip_word_markup(input), "Plain text");
    }

    #[test]
    fn test_removes_multiline_comments() {
        let input = "Before<!-- a\nmultiline\ncomment -->After";
        assert_eq!(strip_word_markup(input), "BeforeAfter");
    }

    #[test]
    fn test_removes_office_paragraph_tags() {
        assert_eq!(strip_word_markup("Item<o:p></o:p>"), "Item");
        assert_eq!(strip_word_markup("Item<O:P/>"), "Item");
    }

    #[test]
    fn test_removes_word_namespace_tags() {
        let input = "<w:WordDocument><w:View>Normal</w:View></w:WordDocument>Body";
        assert_eq!(strip_word_markup(input), "NormalBody");
    }

    #[test]
    fn test_strips_mso_styles() {
        let input = r#"<span style="mso-list:Ignore;color:red">x</span>"#;
        assert_eq!(strip_word_markup(input), r#"<span style="color:red">x</span>"#);
    }

    #[test]
    fn test_strips_mso_classes() {
        assert_eq!(
            strip_word_markup(r#"<p class="MsoListParagraph">One</p>"#),
            "One"
        );
        assert_eq!(
            strip_word_markup("<span class=MsoNormal>Two</span>"),
            "<span>Two</span>"
        );
        assert_eq!(
            strip_word_markup(r#"<span class="highlight">Three</span>"#),
            r#"<span class="highlight">Three</span>"#
        );
    }

    #[test]
    fn test_removes_empty_spans() {
        assert_eq!(strip_word_markup("A<span style=\"x\">  </span>B"), "AB");
    }

    #[test]
    fn test_paragraphs_become_lines() {
        let input = "<p>First</p><p class=\"x\">Second</p>";
        assert_eq!(strip_word_markup(input), "First\nSecond");
    }

    #[test]
    fn test_pre_and_param_are_not_paragraphs() {
        assert_eq!(strip_word_markup("<pre>code</pre>"), "<pre>code</pre>");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(strip_word_markup("a  \t b\n    c"), "a b\nc");
        assert_eq!(strip_word_markup("   \n\n  "), "");
    }
}
