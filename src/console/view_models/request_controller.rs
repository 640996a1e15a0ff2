//! # Request Controller
//!
//! Submit/result lifecycle of one endpoint panel. The controller can always be
//! re-submitted; overlapping requests each carry a sequence number and, by
//! default, whichever completes last owns the result slot.

use crate::console::models::RequestResult;
use crate::console::services::{RequestOutcome, RequestTicket};
use reqwest::Method;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Pending { in_flight: usize },
}

/// What to do with a response that completes after a newer one was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaleResponsePolicy {
    /// Last completed wins
    #[default]
    Apply,
    /// Keep the result of the newest request
    Discard,
}

/// Effect of one completion on the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionEffect {
    Applied,
    Discarded,
    TransportFailed(String),
}

#[derive(Debug, Clone)]
pub struct RequestController {
    panel: usize,
    method: Method,
    state: RequestState,
    next_sequence: u64,
    last_applied_sequence: Option<u64>,
    policy: StaleResponsePolicy,
}

impl RequestController {
    pub fn new(panel: usize, method: Method) -> Self {
        Self {
            panel,
            method,
            state: RequestState::Idle,
            next_sequence: 1,
            last_applied_sequence: None,
            policy: StaleResponsePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: StaleResponsePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn state(&self) -> RequestState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, RequestState::Pending { .. })
    }

    pub fn policy(&self) -> StaleResponsePolicy {
        self.policy
    }

    pub fn last_applied_sequence(&self) -> Option<u64> {
        self.last_applied_sequence
    }

    /// Record a new submission of `url` and hand out its ticket
    pub fn begin(&mut self, url: String) -> RequestTicket {
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        self.state = match self.state {
            RequestState::Idle => RequestState::Pending { in_flight: 1 },
            RequestState::Pending { in_flight } => RequestState::Pending {
                in_flight: in_flight + 1,
            },
        };

        RequestTicket {
            panel: self.panel,
            sequence,
            method: self.method.clone(),
            url,
        }
    }

    /// Settle request `sequence`, writing a response into `result`.
    ///
    /// Transport failures leave `result` as it was.
    pub fn complete(
        &mut self,
        sequence: u64,
        outcome: RequestOutcome,
        result: &mut RequestResult,
    ) -> CompletionEffect {
        self.state = match self.state {
            RequestState::Pending { in_flight } if in_flight > 1 => RequestState::Pending {
                in_flight: in_flight - 1,
            },
            _ => RequestState::Idle,
        };

        match outcome {
            RequestOutcome::TransportFailure { message } => {
                tracing::warn!(
                    "Panel {} request #{} failed: {}",
                    self.panel,
                    sequence,
                    message
                );
                CompletionEffect::TransportFailed(message)
            }
            RequestOutcome::Response {
                status_code,
                body,
                duration_ms,
            } => {
                let stale = self
                    .last_applied_sequence
                    .is_some_and(|applied| applied > sequence);
                if stale && self.policy == StaleResponsePolicy::Discard {
                    tracing::debug!(
                        "Panel {} discarding stale response #{}",
                        self.panel,
                        sequence
                    );
                    return CompletionEffect::Discarded;
                }

                tracing::debug!(
                    "Panel {} applying response #{} (status {}, {} ms)",
                    self.panel,
                    sequence,
                    status_code,
                    duration_ms
                );
                result.replace(body, status_code, duration_ms, sequence);
                self.last_applied_sequence = Some(
                    self.last_applied_sequence
                        .map_or(sequence, |applied| applied.max(sequence)),
                );
                CompletionEffect::Applied
            }
        }
    }
}
