//! # Random Generation Console
//!
//! One panel per API endpoint: typed parameter fields, a live URL preview,
//! the latest response and an optional documentation overlay. Parameter
//! names and documented keywords share one color per session.

pub mod commands;
pub mod controller;
pub mod errors;
pub mod events;
pub mod geometry;
pub mod io;
pub mod models;
pub mod services;
pub mod view_models;
pub mod views;

// Re-export core types
pub use controller::AppController;
pub use errors::{ConsoleError, ConsoleResult};
pub use events::ViewEvent;
pub use models::{Catalog, EndpointSpec, Parameter, ParameterKind};
pub use view_models::{ColorAllocator, ViewModel};
