//! # Models Module
//!
//! Plain data owned by the view models: parameters, endpoint descriptions,
//! the catalog, result slots and status line state.

pub mod catalog;
pub mod documentation;
pub mod endpoint;
pub mod parameter;
pub mod request_result;
pub mod status_line;

pub use catalog::{Catalog, CatalogFile};
pub use documentation::{DocSegment, Documentation};
pub use endpoint::{EndpointDecl, EndpointSpec};
pub use parameter::{Parameter, ParameterDecl, ParameterKind};
pub use request_result::RequestResult;
pub use status_line::StatusLine;
