//! List component targeted by commands

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A selected editor component: its tag, attributes and child markup
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListTarget {
    /// Element tag name, e.g. `ul`
    pub tag_name: String,
    /// Element attributes
    pub attributes: BTreeMap<String, String>,
    /// Child components as HTML fragments, in order
    pub children: Vec<String>,
}

impl ListTarget {
    /// Create an empty component with the given tag
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            ..Default::default()
        }
    }

    /// Builder-style attribute setter
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder-style child append
    pub fn with_child(mut self, html: impl Into<String>) -> Self {
        self.append(html);
        self
    }

    /// Check if this component is an unordered list
    pub fn is_unordered_list(&self) -> bool {
        self.tag_name.eq_ignore_ascii_case("ul")
    }

    /// Get an attribute value
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Set an attribute, replacing any previous value
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Remove all children
    pub fn reset_children(&mut self) {
        self.children.clear();
    }

    /// Append a child fragment
    pub fn append(&mut self, html: impl Into<String>) {
        self.children.push(html.into());
    }
}
