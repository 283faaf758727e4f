//! HTML entity decoding for pasted list items
//!
//! Only the entities word processors actually leave behind are decoded.
//! Bullet entities map to their bullet glyphs rather than a space, since they
//! usually show up as leftover list markers.

/// Entity to replacement table
pub const ENTITY_TABLE: &[(&str, &str)] = &[
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&apos;", "'"),
    ("&nbsp;", " "),
    ("&#8226;", "•"),
    ("&#8227;", "‣"),
    ("&#8259;", "⁃"),
    ("&bull;", "•"),
    ("&middot;", "·"),
];

/// Decode the entities in [`ENTITY_TABLE`] in a single left-to-right pass.
///
/// Decoded output is never rescanned, so `&amp;lt;` becomes `&lt;`.
/// Unknown entities are kept verbatim.
pub fn decode_entities(text: &str) -> String {
    let mut decoded = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('&') {
        decoded.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        match ENTITY_TABLE
            .iter()
            .find(|(entity, _)| tail.starts_with(entity))
        {
            Some((entity, replacement)) => {
                decoded.push_str(replacement);
                rest = &tail[entity.len()..];
            }
            None => {
                decoded.push('&');
                rest = &tail[1..];
            }
        }
    }

    decoded.push_str(rest);
    decoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_basic_entities() {
        assert_eq!(decode_entities("Item &amp; Thing"), "Item & Thing");
        assert_eq!(decode_entities("&lt;tag&gt;"), "<tag>");
        assert_eq!(decode_entities("&quot;quoted&quot;"), "\"quoted\"");
        assert_eq!(decode_entities("it&apos;s"), "it's");
        assert_eq!(decode_entities("a&nbsp;b"), "a b");
    }

    #[test]
    fn test_decode_bullet_entities() {
        assert_eq!(decode_entities("&#8226;"), "•");
        assert_eq!(decode_entities("&#8227;"), "‣");
        assert_eq!(decode_entities("&#8259;"), "⁃");
        assert_eq!(decode_entities("&bull;"), "•");
        assert_eq!(decode_entities("&middot;"), "·");
    }

    #[test]
    fn test_no_double_decoding() {
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
        assert_eq!(decode_entities("&amp;amp;"), "&amp;");
    }

    #[test]
    fn test_unknown_and_bare_ampersands() {
        assert_eq!(decode_entities("&copy; 2024"), "&copy; 2024");
        assert_eq!(decode_entities("Tom & Jerry"), "Tom & Jerry");
        assert_eq!(decode_entities("trailing &"), "trailing &");
        assert_eq!(decode_entities(""), "");
    }

    #[test]
    fn test_multibyte_text_around_entities() {
        assert_eq!(decode_entities("Ünïcödé&amp;日本"), "Ünïcödé&日本");
    }
}
