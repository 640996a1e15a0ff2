//! # Navigation Commands
//!
//! Moving between parameter fields and between endpoint panels, and paging
//! through the output. Fields have no in-line cursor, so the horizontal
//! arrows are free for panel switching.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::{Command, CommandContext, CommandEvent};

/// Move field focus (Tab / Shift+Tab)
pub struct FieldFocusCommand;

impl Command for FieldFocusCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        !context.overlay_open && matches!(event.code, KeyCode::Tab | KeyCode::BackTab)
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::FieldFocusRequested {
            forward: event.code == KeyCode::Tab,
        }])
    }

    fn name(&self) -> &'static str {
        "FieldFocus"
    }
}

/// Show the previous or next endpoint (Left / Right)
pub struct SwitchPanelCommand;

impl Command for SwitchPanelCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        !context.overlay_open && matches!(event.code, KeyCode::Left | KeyCode::Right)
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::PanelSwitchRequested {
            forward: event.code == KeyCode::Right,
        }])
    }

    fn name(&self) -> &'static str {
        "SwitchPanel"
    }
}

/// Page through a long result (PageUp / PageDown)
pub struct ScrollOutputCommand;

impl Command for ScrollOutputCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        !context.overlay_open && matches!(event.code, KeyCode::PageUp | KeyCode::PageDown)
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::OutputScrollRequested {
            forward: event.code == KeyCode::PageDown,
        }])
    }

    fn name(&self) -> &'static str {
        "ScrollOutput"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn back_tab_should_move_focus_backwards() {
        let context = CommandContext::default();
        let event = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);

        assert!(FieldFocusCommand.is_relevant(&context, &event));
        assert_eq!(
            FieldFocusCommand.execute(event, &context).unwrap(),
            vec![CommandEvent::FieldFocusRequested { forward: false }]
        );
    }

    #[test]
    fn right_arrow_should_switch_to_next_panel() {
        let context = CommandContext::default();

        assert_eq!(
            SwitchPanelCommand
                .execute(key(KeyCode::Right), &context)
                .unwrap(),
            vec![CommandEvent::PanelSwitchRequested { forward: true }]
        );
    }

    #[test]
    fn page_down_should_scroll_output_forward() {
        let context = CommandContext::default();

        assert!(ScrollOutputCommand.is_relevant(&context, &key(KeyCode::PageUp)));
        assert_eq!(
            ScrollOutputCommand
                .execute(key(KeyCode::PageDown), &context)
                .unwrap(),
            vec![CommandEvent::OutputScrollRequested { forward: true }]
        );
    }

    #[test]
    fn navigation_should_not_be_relevant_under_overlay() {
        let context = CommandContext {
            overlay_open: true,
            ..CommandContext::default()
        };

        assert!(!FieldFocusCommand.is_relevant(&context, &key(KeyCode::Tab)));
        assert!(!SwitchPanelCommand.is_relevant(&context, &key(KeyCode::Left)));
        assert!(!ScrollOutputCommand.is_relevant(&context, &key(KeyCode::PageDown)));
    }
}
