//! # ViewModel Module
//!
//! Console state split into focused pieces: per-endpoint panels with their
//! request and overlay lifecycles, the session color allocator, and the
//! `ViewModel` coordinating them.

mod color_allocator;
mod core;
mod endpoint_panel;
mod overlay;
mod request_controller;

pub use color_allocator::{ColorAllocator, DEFAULT_PALETTE};
pub use self::core::ViewModel;
pub use endpoint_panel::{EndpointPanel, PreviewSegment};
pub use overlay::{OverlayController, OverlayState};
pub use request_controller::{
    CompletionEffect, RequestController, RequestState, StaleResponsePolicy,
};
