//! # View Events
//!
//! Events emitted by the view model when part of the screen is stale.
//! The controller drains them after each input and redraws only what they
//! name. A parameter edit emits exactly `ParameterChanged` for that field and
//! `UrlPreviewChanged` for its panel.

/// Events emitted when view updates are needed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewEvent {
    /// Full screen redraw required (terminal resize, panel switch, overlay)
    FullRedrawRequired,

    /// One parameter's input line changed
    ParameterChanged { panel: usize, index: usize },

    /// The synthesized URL preview of a panel changed
    UrlPreviewChanged { panel: usize },

    /// The result slot of a panel was replaced
    ResultChanged { panel: usize },

    /// The visible window of a panel's result moved
    OutputScrolled { panel: usize },

    /// A panel went from idle to pending or back
    RequestStateChanged { panel: usize },

    /// A panel's documentation overlay opened or closed
    OverlayChanged { panel: usize },

    /// Input focus moved between parameters
    FocusChanged { panel: usize },

    /// Status bar needs updating
    StatusBarUpdateRequired,
}

impl ViewEvent {
    /// Panel the event is about, if any
    pub fn panel(&self) -> Option<usize> {
        match *self {
            Self::ParameterChanged { panel, .. }
            | Self::UrlPreviewChanged { panel }
            | Self::ResultChanged { panel }
            | Self::OutputScrolled { panel }
            | Self::RequestStateChanged { panel }
            | Self::OverlayChanged { panel }
            | Self::FocusChanged { panel } => Some(panel),
            Self::FullRedrawRequired | Self::StatusBarUpdateRequired => None,
        }
    }
}
