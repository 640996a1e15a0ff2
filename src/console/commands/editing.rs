//! # Editing Commands
//!
//! Typing into text and number fields and cycling choice fields. Whether a
//! typed character is accepted is decided by the parameter itself.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent};
use crate::console::models::ParameterKind;

/// Append a printable character to the focused field
pub struct InsertCharCommand;

impl Command for InsertCharCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        !context.overlay_open
            && context.is_typing_field()
            && matches!(event.code, KeyCode::Char(_))
            && !event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        match event.code {
            KeyCode::Char(ch) => Ok(vec![CommandEvent::CharInsertRequested { ch }]),
            _ => Ok(Vec::new()),
        }
    }

    fn name(&self) -> &'static str {
        "InsertChar"
    }
}

/// Delete the last character of the focused field
pub struct BackspaceCommand;

impl Command for BackspaceCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        !context.overlay_open && context.is_typing_field() && event.code == KeyCode::Backspace
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::BackspaceRequested])
    }

    fn name(&self) -> &'static str {
        "Backspace"
    }
}

/// Step a choice field (Down: next option, Up: previous)
pub struct CycleChoiceCommand;

impl Command for CycleChoiceCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        !context.overlay_open
            && context.focused_kind == Some(ParameterKind::Choice)
            && matches!(event.code, KeyCode::Up | KeyCode::Down)
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::ChoiceCycleRequested {
            forward: event.code == KeyCode::Down,
        }])
    }

    fn name(&self) -> &'static str {
        "CycleChoice"
    }
}
