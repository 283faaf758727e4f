//! Command system for list components

use crate::{ListTarget, Result};
use serde::{Deserialize, Serialize};

/// Result of applying a command
#[derive(Debug)]
pub struct CommandResult {
    /// The component after the command
    pub target: ListTarget,
    /// The inverse command (for undo)
    pub inverse: Box<dyn Command>,
}

/// Trait for all list editing commands
pub trait Command: std::fmt::Debug + Send + Sync {
    /// Apply this command to a component
    fn apply(&self, target: &ListTarget) -> Result<CommandResult>;

    /// Get a display name for this command
    fn display_name(&self) -> &str;

    /// Clone this command into a box
    fn clone_box(&self) -> Box<dyn Command>;
}

/// Restore a component to a snapshot (for undo)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestoreList {
    pub snapshot: ListTarget,
}

impl RestoreList {
    pub fn new(snapshot: ListTarget) -> Self {
        Self { snapshot }
    }
}

impl Command for RestoreList {
    fn apply(&self, target: &ListTarget) -> Result<CommandResult> {
        Ok(CommandResult {
            target: self.snapshot.clone(),
            inverse: Box::new(RestoreList::new(target.clone())),
        })
    }

    fn display_name(&self) -> &str {
        "Restore List"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_list_swaps_snapshots() {
        let before = ListTarget::new("ul").with_child("<li>Old</li>");
        let after = ListTarget::new("ul").with_child("<li>New</li>");

        let result = RestoreList::new(before.clone()).apply(&after).unwrap();
        assert_eq!(result.target, before);

        let undone = result.inverse.apply(&result.target).unwrap();
        assert_eq!(undone.target, after);
    }
}
