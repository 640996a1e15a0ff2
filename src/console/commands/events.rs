//! # Command Events
//!
//! Events produced by commands that describe what should happen.
//! Commands produce these events, and the controller applies them to the ViewModel.

/// Events that commands can produce to request changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandEvent {
    /// Move input focus to the next or previous parameter
    FieldFocusRequested { forward: bool },

    /// Show the next or previous endpoint
    PanelSwitchRequested { forward: bool },

    /// Page the current result up or down
    OutputScrollRequested { forward: bool },

    /// Append a character to the focused parameter
    CharInsertRequested { ch: char },

    /// Remove the last character of the focused parameter
    BackspaceRequested,

    /// Step the focused choice parameter through its options
    ChoiceCycleRequested { forward: bool },

    /// Send the current endpoint's request
    SubmitRequested,

    /// Copy the current endpoint's URL to the clipboard
    CopyUrlRequested,

    OverlayOpenRequested,
    OverlayCloseRequested,

    /// Request to quit application
    QuitRequested,
}
