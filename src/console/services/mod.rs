//! # Services Module
//!
//! Side-effecting collaborators of the console: URL synthesis, the HTTP
//! client and the clipboard.

pub mod clipboard;
pub mod http;
pub mod query;

pub use clipboard::{copy_to_clipboard, Clipboard, MemoryClipboard, SystemClipboard};
pub use http::{
    CompletedRequest, HttpService, HttpSettings, RequestOutcome, RequestTicket,
};
pub use query::{build_url, query_string};
