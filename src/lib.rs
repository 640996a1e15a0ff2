//! # rndline - Terminal Console for a Random Generation API
//!
//! Browse the endpoints of a random generation HTTP API, fill in their
//! parameters, watch the request URL build up and fire requests, all from
//! the terminal.
//!
//! ## Architecture
//!
//! The console follows the Model-View-ViewModel (MVVM) pattern:
//!
//! ```text
//! ┌─────────────┐  ViewEvents  ┌──────────────┐   Updates    ┌──────────┐
//! │    View     │◄─────────────│  ViewModel   │─────────────►│  Models  │
//! │ - Terminal  │              │ - Panels     │              │ - Params │
//! │ - Layout    │              │ - Colors     │              │ - Results│
//! └─────────────┘              └──────────────┘              └──────────┘
//!                                  ▲        ▲
//!                         Commands │        │ Completions
//!                              ┌───┴────────┴──┐    ┌──────────────┐
//!                              │  Controller   │───►│ HttpService  │
//!                              │ - Event loop  │    │ (tokio tasks)│
//!                              └───────────────┘    └──────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod console;
pub mod logging;

// Re-export main types for easy access
pub use console::*;
