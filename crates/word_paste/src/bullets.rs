//! Bullet and numbering marker recognition
//!
//! Word content pasted as plain text keeps its list decoration as a leading
//! glyph or token on every line (`•`, `1.`, `a)`, `iv.`, `§`, ...). This
//! module holds the table of recognized markers and strips them from lines.
//!
//! Every rule is tried independently against the trimmed line; the first rule
//! that matches decides which marker is removed. Numbering rules require a
//! trailing `.` or `)` followed by whitespace so that initials and numbers in
//! ordinary prose are left alone.

use crate::patterns::compile;
use regex_lite::Regex;
use std::sync::OnceLock;

/// Whitespace accepted after a marker. Word separates bullets from text with
/// tabs or non-breaking spaces, still encoded as `&nbsp;` in HTML paragraphs,
/// and regex-lite's `\s` is ASCII-only.
const MARKER_SPACE: &str = "(?:[\\s\u{00A0}]|&nbsp;)";

// =============================================================================
// Rule Table
// =============================================================================

/// Family of a list marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BulletKind {
    /// Unicode bullet glyphs: •, ◦, ▪, ‣, ⁃, ...
    Glyph,
    /// Dash, asterisk, plus, en/em dash
    Dash,
    /// Decimal numbering: 1. 1) 2.3.
    Numeric,
    /// Parenthesized numbering: (1) (a)
    Parenthesized,
    /// Letter numbering: a. b) A.
    Alphabetic,
    /// Roman numerals: i. iv) XII.
    Roman,
    /// Section mark used by Wingdings bullets
    Section,
    /// Arrows: ►, ➤, →
    Arrow,
    /// Geometric shapes: ■, ◆, ▲
    Geometric,
    /// Check and cross marks: ✓, ✗, ☐
    CheckMark,
    /// Bullet entities not yet decoded: &bull; &#8226; &middot;
    Entity,
    /// Symbol/Wingdings private-use glyphs and Word's "o" sub-bullet
    SymbolFont,
}

/// Whether whitespace must follow the marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerSpacing {
    Optional,
    Required,
}

/// One entry of the marker table
#[derive(Debug, Clone, Copy)]
pub struct BulletRule {
    pub kind: BulletKind,
    /// Regex fragment matching the marker itself, without anchor or spacing
    pub marker: &'static str,
    pub spacing: MarkerSpacing,
}

/// Recognized list markers.
pub const BULLET_RULES: &[BulletRule] = &[
    BulletRule {
        kind: BulletKind::Glyph,
        marker: "[•◦▪▫‣⁃‧·∙○●◘◙⦿⦾]",
        spacing: MarkerSpacing::Optional,
    },
    BulletRule {
        kind: BulletKind::Dash,
        marker: "[-*+–—]",
        spacing: MarkerSpacing::Required,
    },
    BulletRule {
        kind: BulletKind::Numeric,
        marker: r"\d+(?:\.\d+)*[.)]",
        spacing: MarkerSpacing::Required,
    },
    BulletRule {
        kind: BulletKind::Parenthesized,
        marker: r"\((?:\d+|[A-Za-z])\)",
        spacing: MarkerSpacing::Required,
    },
    BulletRule {
        kind: BulletKind::Alphabetic,
        marker: r"[A-Za-z][.)]",
        spacing: MarkerSpacing::Required,
    },
    BulletRule {
        kind: BulletKind::Roman,
        marker: r"(?i:x{1,3}(?:ix|iv|v?i{0,3})|ix|iv|v?i{1,3}|v)[.)]",
        spacing: MarkerSpacing::Required,
    },
    BulletRule {
        kind: BulletKind::Section,
        marker: "§+",
        spacing: MarkerSpacing::Optional,
    },
    BulletRule {
        kind: BulletKind::Arrow,
        marker: "[►▶▸▹➢➣➤→⇒➔➜]",
        spacing: MarkerSpacing::Optional,
    },
    BulletRule {
        kind: BulletKind::Geometric,
        marker: "[■□◆◇◊▲△▼▽◼◻⬛⬜❖]",
        spacing: MarkerSpacing::Optional,
    },
    BulletRule {
        kind: BulletKind::CheckMark,
        marker: "[✓✔✗✘✕✖☐☑☒]",
        spacing: MarkerSpacing::Optional,
    },
    BulletRule {
        kind: BulletKind::Entity,
        marker: "(?:&bull;|&#8226;|&#8227;|&#8259;|&middot;|&#183;)",
        spacing: MarkerSpacing::Optional,
    },
    BulletRule {
        kind: BulletKind::SymbolFont,
        marker: "(?:[\u{F0B7}\u{F0A7}\u{F0D8}\u{F0FC}\u{F076}]|o(?:[\t\u{00A0}]|&nbsp;))",
        spacing: MarkerSpacing::Optional,
    },
];

// =============================================================================
// Compiled Patterns
// =============================================================================

/// A compiled [`BulletRule`], anchored at the start of a line
#[derive(Debug)]
pub struct BulletPattern {
    kind: BulletKind,
    regex: Regex,
}

impl BulletPattern {
    /// Compile a rule. The table is fixed, so a failure here is a bug in
    /// [`BULLET_RULES`] and is caught by the unit tests.
    fn from_rule(rule: &BulletRule) -> Option<Self> {
        let quantifier = match rule.spacing {
            MarkerSpacing::Optional => "*",
            MarkerSpacing::Required => "+",
        };
        let pattern = format!("^(?:{}){}{}", rule.marker, MARKER_SPACE, quantifier);
        compile(&pattern).map(|regex| Self {
            kind: rule.kind,
            regex,
        })
    }

    /// The marker family this pattern recognizes
    pub fn kind(&self) -> BulletKind {
        self.kind
    }

    /// Check whether `line` starts with this marker
    pub fn matches(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }

    /// Remove this marker and its trailing whitespace from the start of `line`
    pub fn strip<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.regex.find(line).map(|m| &line[m.end()..])
    }
}

/// All compiled bullet patterns, in table order
pub fn bullet_patterns() -> &'static [BulletPattern] {
    static PATTERNS: OnceLock<Vec<BulletPattern>> = OnceLock::new();
    PATTERNS.get_or_init(|| BULLET_RULES.iter().filter_map(BulletPattern::from_rule).collect())
}

/// Find the marker family a line starts with, if any
pub fn detect_bullet(line: &str) -> Option<BulletKind> {
    let line = line.trim();
    bullet_patterns()
        .iter()
        .find(|pattern| pattern.matches(line))
        .map(BulletPattern::kind)
}

/// Check if a line is a bullet or numbered list entry
pub fn is_bullet_line(line: &str) -> bool {
    detect_bullet(line).is_some()
}

/// Strip the leading list marker from a line.
///
/// Returns `None` when no marker matches. The remainder is trimmed and may be
/// empty when the line held nothing but the marker.
pub fn strip_bullet(line: &str) -> Option<&str> {
    let line = line.trim();
    bullet_patterns()
        .iter()
        .find_map(|pattern| pattern.strip(line))
        .map(str::trim)
}
