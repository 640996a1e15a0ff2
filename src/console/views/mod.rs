//! # Views Module
//!
//! Rendering of the console onto a `RenderStream`.

pub mod layout;
pub mod terminal_renderer;

// Re-export main types for convenience
pub use terminal_renderer::{TerminalRenderer, ViewRenderer};
