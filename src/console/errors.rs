//! # Console Errors
//!
//! Domain error taxonomy for the console core. Application plumbing keeps
//! using `anyhow::Result`; these are the failures callers match on.

use thiserror::Error;

/// Result alias for console core operations
pub type ConsoleResult<T> = std::result::Result<T, ConsoleError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    /// Every palette color is already bound to another keyword
    #[error("out of colors: cannot highlight '{keyword}', all {capacity} palette colors are taken")]
    OutOfCapacity { keyword: String, capacity: usize },

    #[error("unknown parameter kind '{kind}' for parameter '{name}'")]
    UnknownParameterKind { name: String, kind: String },

    #[error("duplicate parameter '{name}' in endpoint '{endpoint}'")]
    DuplicateParameter { endpoint: String, name: String },

    #[error("invalid HTTP method '{method}' for endpoint '{endpoint}'")]
    InvalidMethod { endpoint: String, method: String },

    /// Writing to the system clipboard failed; never affects console state
    #[error("clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    /// The request never produced a response
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("invalid url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to load catalog from '{path}': {reason}")]
    CatalogLoad { path: String, reason: String },
}
