//! # Command Context
//!
//! Read-only snapshot of the view model that commands use to decide whether
//! a key is theirs.

use crate::console::models::ParameterKind;
use crate::console::view_models::ViewModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommandContext {
    /// The current panel's documentation overlay is showing
    pub overlay_open: bool,
    /// Kind of the focused parameter, `None` for endpoints without parameters
    pub focused_kind: Option<ParameterKind>,
    /// The current panel has a request in flight
    pub is_pending: bool,
}

impl CommandContext {
    pub fn from_view_model(view_model: &ViewModel) -> Self {
        let panel = view_model.current_panel();
        Self {
            overlay_open: view_model.is_overlay_open(),
            focused_kind: panel
                .and_then(|p| p.focused_parameter())
                .map(|p| p.kind()),
            is_pending: panel.is_some_and(|p| p.is_pending()),
        }
    }

    /// Focused field takes typed characters
    pub fn is_typing_field(&self) -> bool {
        matches!(
            self.focused_kind,
            Some(ParameterKind::Text | ParameterKind::Number)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::models::Catalog;
    use crate::console::view_models::ColorAllocator;

    #[test]
    fn context_should_capture_focused_kind_and_overlay() {
        let mut vm = ViewModel::new(
            &Catalog::builtin(),
            "https://rnd.bgenc.dev",
            ColorAllocator::new(),
        );

        let context = CommandContext::from_view_model(&vm);
        assert_eq!(context.focused_kind, Some(ParameterKind::Number));
        assert!(context.is_typing_field());
        assert!(!context.overlay_open);

        vm.open_overlay();
        assert!(CommandContext::from_view_model(&vm).overlay_open);
    }

    #[test]
    fn endpoint_without_parameters_should_have_no_focused_kind() {
        let mut vm = ViewModel::new(
            &Catalog::builtin(),
            "https://rnd.bgenc.dev",
            ColorAllocator::new(),
        );
        for _ in 0..3 {
            vm.next_panel();
        }

        let context = CommandContext::from_view_model(&vm);

        assert_eq!(vm.current_panel().map(|p| p.name()), Some("ULID"));
        assert_eq!(context.focused_kind, None);
        assert!(!context.is_typing_field());
    }
}
