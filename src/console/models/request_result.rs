//! # Request Result Model
//!
//! The single result slot of an endpoint panel. It always holds the body of
//! the most recently completed response and is replaced wholesale, never
//! appended to.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestResult {
    body: String,
    status_code: Option<u16>,
    duration_ms: Option<u64>,
    sequence: Option<u64>,
}

impl RequestResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the slot with a completed response
    pub fn replace(
        &mut self,
        body: String,
        status_code: u16,
        duration_ms: u64,
        sequence: u64,
    ) {
        self.body = body;
        self.status_code = Some(status_code);
        self.duration_ms = Some(duration_ms);
        self.sequence = Some(sequence);
    }

    /// Response body text, empty before the first completed request
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    pub fn duration_ms(&self) -> Option<u64> {
        self.duration_ms
    }

    /// Sequence number of the request that produced this content
    pub fn sequence(&self) -> Option<u64> {
        self.sequence
    }

    /// True when the stored response had a 2xx status
    pub fn is_success(&self) -> bool {
        self.status_code.is_some_and(|code| (200..300).contains(&code))
    }
}
