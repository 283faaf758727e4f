//! Regex helpers shared by the cleanup passes

use regex_lite::Regex;
use std::borrow::Cow;

/// Compile a built-in pattern.
///
/// Every pattern in this crate is a literal covered by unit tests, so `None`
/// only shows up while editing a pattern. The pass that owns it is skipped
/// and an error is logged instead of panicking mid-paste.
pub(crate) fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::error!("invalid built-in pattern {:?}: {}", pattern, e);
            None
        }
    }
}

/// Replace every match of `re`, leaving `text` untouched when the pattern
/// failed to compile
pub(crate) fn replace_all<'a>(re: Option<&Regex>, text: &'a str, replacement: &str) -> Cow<'a, str> {
    match re {
        Some(re) => re.replace_all(text, replacement),
        None => Cow::Borrowed(text),
    }
}
