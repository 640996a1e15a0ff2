//! # HTTP Service
//!
//! Executes endpoint requests off the UI loop. Each request runs in its own
//! tokio task and reports back through a channel, tagged with the panel and
//! sequence number it belongs to. The UI loop drains completions and applies
//! them; tasks never touch console state directly.

use anyhow::Result;
use reqwest::{Client, Method};
use std::error::Error;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Capacity of the completion channel
const COMPLETION_CHANNEL_SIZE: usize = 32;

/// Snapshot of a submitted request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    pub panel: usize,
    pub sequence: u64,
    pub method: Method,
    pub url: String,
}

/// What came back for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    /// Any HTTP response, whatever its status
    Response {
        status_code: u16,
        body: String,
        duration_ms: u64,
    },
    /// No response at all
    TransportFailure { message: String },
}

/// Message sent from a request task back to the UI loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedRequest {
    pub panel: usize,
    pub sequence: u64,
    pub outcome: RequestOutcome,
}

/// Client settings resolved from the profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSettings {
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Service for dispatching requests and collecting their completions
pub struct HttpService {
    client: Client,
    completion_sender: mpsc::Sender<CompletedRequest>,
    completion_receiver: mpsc::Receiver<CompletedRequest>,
}

impl HttpService {
    pub fn new(settings: &HttpSettings) -> Result<Self> {
        tracing::debug!("Creating HttpService with {:?}", settings);

        let mut builder = Client::builder().user_agent(settings.user_agent.clone());
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let (completion_sender, completion_receiver) = mpsc::channel(COMPLETION_CHANNEL_SIZE);

        Ok(Self {
            client,
            completion_sender,
            completion_receiver,
        })
    }

    /// Perform one request and read the body as text
    pub async fn execute(client: &Client, method: Method, url: &str) -> RequestOutcome {
        let started = Instant::now();

        let response = match client.request(method, url).send().await {
            Ok(response) => response,
            Err(e) => return Self::transport_failure(&e),
        };

        let status_code = response.status().as_u16();
        match response.text().await {
            Ok(body) => RequestOutcome::Response {
                status_code,
                body,
                duration_ms: started.elapsed().as_millis() as u64,
            },
            Err(e) => Self::transport_failure(&e),
        }
    }

    fn transport_failure(error: &reqwest::Error) -> RequestOutcome {
        // Show the full error chain
        let mut message = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            message.push_str(&format!(": {cause}"));
            source = cause.source();
        }
        tracing::error!("HTTP request failed: {message}");
        RequestOutcome::TransportFailure { message }
    }

    /// Spawn the request described by `ticket`.
    ///
    /// The completion arrives later through [`poll_completion`] or
    /// [`next_completion`]. There is no way to cancel a dispatched request.
    ///
    /// [`poll_completion`]: HttpService::poll_completion
    /// [`next_completion`]: HttpService::next_completion
    pub fn dispatch(&self, ticket: RequestTicket) {
        let client = self.client.clone();
        let sender = self.completion_sender.clone();

        tracing::info!(
            "Dispatching {} {} (panel {}, #{})",
            ticket.method,
            ticket.url,
            ticket.panel,
            ticket.sequence
        );

        tokio::spawn(async move {
            let outcome = Self::execute(&client, ticket.method, &ticket.url).await;
            let completed = CompletedRequest {
                panel: ticket.panel,
                sequence: ticket.sequence,
                outcome,
            };
            // Receiver is gone only when the console is shutting down
            let _ = sender.send(completed).await;
        });
    }

    /// Next completion if one is ready (non-blocking)
    pub fn poll_completion(&mut self) -> Option<CompletedRequest> {
        self.completion_receiver.try_recv().ok()
    }

    /// Wait for the next completion
    pub async fn next_completion(&mut self) -> Option<CompletedRequest> {
        self.completion_receiver.recv().await
    }
}
