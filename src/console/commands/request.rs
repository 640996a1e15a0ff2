//! # Request Commands
//!
//! Sending the current endpoint's request and copying its URL.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent};

/// Send the request (Enter). Always available, even while one is in flight.
pub struct SubmitRequestCommand;

impl Command for SubmitRequestCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        !context.overlay_open && event.code == KeyCode::Enter
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::SubmitRequested])
    }

    fn name(&self) -> &'static str {
        "SubmitRequest"
    }
}

/// Copy the synthesized URL (Ctrl+Y)
pub struct CopyUrlCommand;

impl Command for CopyUrlCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        !context.overlay_open
            && matches!(event.code, KeyCode::Char('y'))
            && event.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::CopyUrlRequested])
    }

    fn name(&self) -> &'static str {
        "CopyUrl"
    }
}
