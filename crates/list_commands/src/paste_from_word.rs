//! Paste from Word command
//!
//! Replaces the children of a selected `<ul>` with items normalized from
//! pasted word-processor content, and restyles the list as an icon list.

use crate::{Command, CommandError, CommandResult, ListTarget, RestoreList, Result};
use word_paste::{render_list_item, NormalizerSettings, WordListNormalizer};

/// Command id registered with the editor
pub const PASTE_FROM_WORD_COMMAND: &str = "paste-from-word";

/// Replace a list's items with content pasted from a word processor
#[derive(Debug, Clone)]
pub struct PasteFromWord {
    content: String,
    settings: NormalizerSettings,
}

impl PasteFromWord {
    /// Create the command with default settings
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_settings(content, NormalizerSettings::default())
    }

    /// Create the command with explicit settings
    pub fn with_settings(content: impl Into<String>, settings: NormalizerSettings) -> Self {
        Self {
            content: content.into(),
            settings,
        }
    }

    /// Whether the command can run on `target`; the toolbar shows the paste
    /// button only when this holds
    pub fn is_available(target: &ListTarget) -> bool {
        target.is_unordered_list()
    }

    /// The items this command would insert
    pub fn items(&self) -> Vec<String> {
        WordListNormalizer::with_settings(&self.settings).normalize(&self.content)
    }
}

impl Command for PasteFromWord {
    fn apply(&self, target: &ListTarget) -> Result<CommandResult> {
        if !Self::is_available(target) {
            tracing::warn!(
                "Paste from Word is only available for UL elements, got {}",
                target.tag_name
            );
            return Err(CommandError::UnsupportedTarget(target.tag_name.clone()));
        }

        let items = self.items();
        let style = &self.settings.list_style;

        let mut updated = target.clone();
        updated.reset_children();
        updated.set_attribute("class", style.list_class.as_str());
        updated.set_attribute("style", style.list_style.as_str());
        for item in &items {
            updated.append(render_list_item(item, style));
        }

        tracing::debug!(
            target: "list_commands::paste",
            items = items.len(),
            "pasted Word content into list"
        );

        Ok(CommandResult {
            target: updated,
            inverse: Box::new(RestoreList::new(target.clone())),
        })
    }

    fn display_name(&self) -> &str {
        "Paste from Word"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}
