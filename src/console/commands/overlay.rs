//! # Overlay Commands
//!
//! F1 toggles the documentation overlay; `?` opens it when the focused field
//! does not take text. While it is open Esc, Enter and F1 close it.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::{Command, CommandContext, CommandEvent};
use crate::console::models::ParameterKind;

pub struct OpenOverlayCommand;

impl Command for OpenOverlayCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        if context.overlay_open {
            return false;
        }
        match event.code {
            KeyCode::F(1) => true,
            KeyCode::Char('?') => context.focused_kind != Some(ParameterKind::Text),
            _ => false,
        }
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::OverlayOpenRequested])
    }

    fn name(&self) -> &'static str {
        "OpenOverlay"
    }
}

pub struct CloseOverlayCommand;

impl Command for CloseOverlayCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.overlay_open && matches!(event.code, KeyCode::Esc | KeyCode::Enter | KeyCode::F(1))
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::OverlayCloseRequested])
    }

    fn name(&self) -> &'static str {
        "CloseOverlay"
    }
}
