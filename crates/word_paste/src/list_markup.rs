//! List markup rendering
//!
//! Normalized items are re-inserted into the page as an icon list: each
//! `<li>` carries a Font Awesome bullet and wraps its text in a paragraph.

use serde::{Deserialize, Serialize};

/// Classes and inline styles applied to a rendered list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListStyle {
    /// Class attribute of the `<ul>` element
    pub list_class: String,
    /// Style attribute of the `<ul>` element
    pub list_style: String,
    /// Class attribute of each `<li>` element
    pub item_class: String,
    /// Font Awesome classes of the bullet icon
    pub icon_class: String,
}

impl Default for ListStyle {
    fn default() -> Self {
        Self {
            list_class: "ulist fa-ul".to_string(),
            list_style: "padding: 0.2em 0; margin-left: 2em; line-height: 1.4em;".to_string(),
            item_class: "ulistitem".to_string(),
            icon_class: "fas fa-circle".to_string(),
        }
    }
}

/// Escape text for use in HTML content or a quoted attribute
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render one list item as an icon-list `<li>` fragment
pub fn render_list_item(item: &str, style: &ListStyle) -> String {
    format!(
        concat!(
            r#"<li class="{}" style="text-align: left;">"#,
            r#"<span class="fa-li" style="left: -2em; width: 2em;">"#,
            r#"<i class="{}" style="font-size: 0.4em; line-height: inherit; display: block;"></i>"#,
            r#"</span>"#,
            r#"<p style="margin: 0; padding: 0; text-align: left;">{}</p>"#,
            r#"</li>"#,
        ),
        escape_html(&style.item_class),
        escape_html(&style.icon_class),
        escape_html(item),
    )
}

/// Render items as a complete `<ul>` element
pub fn render_list<S: AsRef<str>>(items: &[S], style: &ListStyle) -> String {
    let mut html = format!(
        r#"<ul class="{}" style="{}">"#,
        escape_html(&style.list_class),
        escape_html(&style.list_style),
    );
    for item in items {
        html.push_str(&render_list_item(item.as_ref(), style));
    }
    html.push_str("</ul>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & c > \"d\" 'e'"), "a &lt; b &amp; c &gt; &quot;d&quot; &#39;e&#39;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_render_list_item() {
        let html = render_list_item("Coffee", &ListStyle::default());
        assert!(html.starts_with(r#"<li class="ulistitem" style="text-align: left;">"#));
        assert!(html.contains(r#"<i class="fas fa-circle""#));
        assert!(html.contains(r#"<p style="margin: 0; padding: 0; text-align: left;">Coffee</p>"#));
        assert!(html.ends_with("</li>"));
    }

    #[test]
    fn test_render_list_item_escapes_text() {
        let html = render_list_item("<script>&", &ListStyle::default());
        assert!(html.contains(">&lt;script&gt;&amp;</p>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_render_list() {
        let style = ListStyle::default();
        let html = render_list(&["A", "B"], &style);
        assert!(html.starts_with(
            r#"<ul class="ulist fa-ul" style="padding: 0.2em 0; margin-left: 2em; line-height: 1.4em;">"#
        ));
        assert_eq!(html.matches("<li ").count(), 2);
        assert!(html.ends_with("</li></ul>"));
    }

    #[test]
    fn test_custom_style() {
        let style = ListStyle {
            icon_class: "fas fa-check".to_string(),
            ..ListStyle::default()
        };
        let html = render_list(&vec!["Done".to_string()], &style);
        assert!(html.contains(r#"<i class="fas fa-check""#));
    }

    #[test]
    fn test_style_partial_json() {
        let style: ListStyle = serde_json::from_str(r#"{"item_class": "entry"}"#).unwrap();
        assert_eq!(style.item_class, "entry");
        assert_eq!(style.list_class, "ulist fa-ul");
    }
}
