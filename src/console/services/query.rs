//! # Query Synthesis
//!
//! Builds the request URL of an endpoint from the base origin, the endpoint
//! path and the current parameter values. Only parameters with a value are
//! sent, in declaration order, form-urlencoded. The URL is rebuilt from
//! scratch on every call.

use crate::console::errors::{ConsoleError, ConsoleResult};
use crate::console::models::Parameter;
use reqwest::Url;

/// Origin used when only the query portion is wanted
const SCRATCH_BASE: &str = "http://localhost";

/// Build `{base}{path}?{query}` from the set parameters.
///
/// No `?` is emitted when no parameter is set.
pub fn build_url(base: &str, path: &str, parameters: &[Parameter]) -> ConsoleResult<String> {
    let raw = format!("{base}{path}");
    let mut url = Url::parse(&raw).map_err(|e| ConsoleError::InvalidUrl {
        url: raw.clone(),
        reason: e.to_string(),
    })?;

    let mut set_parameters = parameters.iter().filter(|p| p.is_set()).peekable();
    if set_parameters.peek().is_some() {
        let mut pairs = url.query_pairs_mut();
        for parameter in set_parameters {
            pairs.append_pair(parameter.name(), parameter.value().unwrap_or_default());
        }
    }

    Ok(url.to_string())
}

/// The encoded query portion alone, empty when nothing is set
pub fn query_string(parameters: &[Parameter]) -> String {
    build_url(SCRATCH_BASE, "/", parameters)
        .ok()
        .and_then(|url| url.split_once('?').map(|(_, query)| query.to_string()))
        .unwrap_or_default()
}
