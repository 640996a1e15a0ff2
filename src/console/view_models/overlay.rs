//! # Documentation Overlay
//!
//! Open/close lifecycle of one endpoint's documentation dialog. A pointer
//! press outside the dialog content (on the backdrop) closes it; a press
//! inside does nothing.

use crate::console::geometry::{Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayController {
    id: String,
    state: OverlayState,
}

impl OverlayController {
    pub fn new(endpoint_name: &str) -> Self {
        Self {
            id: format!("modal-{endpoint_name}"),
            state: OverlayState::Closed,
        }
    }

    /// Identifier of the dialog, `modal-<endpoint name>`
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == OverlayState::Open
    }

    /// Returns true if the state changed
    pub fn open(&mut self) -> bool {
        self.transition(OverlayState::Open)
    }

    /// Returns true if the state changed
    pub fn close(&mut self) -> bool {
        self.transition(OverlayState::Closed)
    }

    /// Close when open and the press landed outside `content_box`.
    /// Returns true if the state changed.
    pub fn handle_pointer_down(&mut self, point: Position, content_box: Rect) -> bool {
        if !self.is_open() || content_box.contains(point) {
            return false;
        }
        tracing::debug!("Backdrop press at {:?} closes {}", point, self.id);
        self.close()
    }

    fn transition(&mut self, next: OverlayState) -> bool {
        if self.state == next {
            return false;
        }
        tracing::debug!("{}: {:?} -> {:?}", self.id, self.state, next);
        self.state = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_box() -> Rect {
        Rect::new(10, 5, 40, 10)
    }

    #[test]
    fn overlay_should_start_closed_with_modal_id() {
        let overlay = OverlayController::new("Dice");

        assert_eq!(overlay.id(), "modal-Dice");
        assert!(!overlay.is_open());
    }

    #[test]
    fn open_and_close_should_be_idempotent() {
        let mut overlay = OverlayController::new("Dice");

        assert!(overlay.open());
        assert!(!overlay.open());
        assert!(overlay.is_open());

        assert!(overlay.close());
        assert!(!overlay.close());
        assert_eq!(overlay.state(), OverlayState::Closed);
    }

    #[test]
    fn backdrop_press_should_close_open_overlay() {
        let mut overlay = OverlayController::new("Word");
        overlay.open();

        assert!(overlay.handle_pointer_down(Position::new(0, 0), content_box()));
        assert!(!overlay.is_open());
    }

    #[test]
    fn press_inside_content_should_keep_overlay_open() {
        let mut overlay = OverlayController::new("Word");
        overlay.open();

        assert!(!overlay.handle_pointer_down(Position::new(6, 12), content_box()));
        assert!(overlay.is_open());
    }

    #[test]
    fn press_while_closed_should_do_nothing() {
        let mut overlay = OverlayController::new("Word");

        assert!(!overlay.handle_pointer_down(Position::new(0, 0), content_box()));
        assert!(!overlay.is_open());
    }
}
