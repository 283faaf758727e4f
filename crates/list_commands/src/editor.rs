//! Command execution with undo/redo for a single list component

use crate::{Command, CommandError, ListTarget, Result};

const MAX_UNDO_ENTRIES: usize = 100;

/// Holds a component and the history of commands applied to it
pub struct ListEditor {
    target: ListTarget,
    /// Inverses of applied commands, most recent last
    undo_stack: Vec<Box<dyn Command>>,
    /// Inverses of undone commands, most recent last
    redo_stack: Vec<Box<dyn Command>>,
}

impl ListEditor {
    pub fn new(target: ListTarget) -> Self {
        Self {
            target,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Get the current component
    pub fn target(&self) -> &ListTarget {
        &self.target
    }

    /// Execute a command. A failed command leaves the component and history
    /// untouched.
    pub fn execute(&mut self, command: &dyn Command) -> Result<()> {
        let result = command.apply(&self.target)?;

        tracing::debug!("executed {}", command.display_name());

        self.redo_stack.clear();
        self.undo_stack.push(result.inverse);
        if self.undo_stack.len() > MAX_UNDO_ENTRIES {
            self.undo_stack.remove(0);
        }
        self.target = result.target;
        Ok(())
    }

    /// Undo the last command
    pub fn undo(&mut self) -> Result<()> {
        let inverse = self.undo_stack.pop().ok_or(CommandError::UndoStackEmpty)?;
        let result = inverse.apply(&self.target)?;

        self.redo_stack.push(result.inverse);
        self.target = result.target;
        Ok(())
    }

    /// Redo the last undone command
    pub fn redo(&mut self) -> Result<()> {
        let command = self.redo_stack.pop().ok_or(CommandError::RedoStackEmpty)?;
        let result = command.apply(&self.target)?;

        self.undo_stack.push(result.inverse);
        self.target = result.target;
        Ok(())
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PasteFromWord;

    #[test]
    fn test_execute_undo_redo() {
        let original = ListTarget::new("ul").with_child("<li>Old</li>");
        let mut editor = ListEditor::new(original.clone());

        editor.execute(&PasteFromWord::new("• A\n• B")).unwrap();
        let pasted = editor.target().clone();
        assert_eq!(pasted.children.len(), 2);
        assert!(editor.can_undo());
        assert!(!editor.can_redo());

        editor.undo().unwrap();
        assert_eq!(editor.target(), &original);
        assert!(editor.can_redo());

        editor.redo().unwrap();
        assert_eq!(editor.target(), &pasted);
        assert!(editor.can_undo());
    }

    #[test]
    fn test_failed_command_keeps_state() {
        let original = ListTarget::new("ol");
        let mut editor = ListEditor::new(original.clone());

        assert!(editor.execute(&PasteFromWord::new("• A")).is_err());
        assert_eq!(editor.target(), &original);
        assert!(!editor.can_undo());
    }

    #[test]
    fn test_empty_stacks() {
        let mut editor = ListEditor::new(ListTarget::new("ul"));
        assert!(matches!(editor.undo(), Err(CommandError::UndoStackEmpty)));
        assert!(matches!(editor.redo(), Err(CommandError::RedoStackEmpty)));
    }
}
