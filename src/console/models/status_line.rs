//! # Status Line Model
//!
//! Encapsulates all state related to the status line display,
//! providing a clean interface for status bar rendering.

/// Status line model containing all status bar display state
#[derive(Debug, Clone)]
pub struct StatusLine {
    /// Temporary status message to display
    status_message: Option<String>,

    /// Profile name the settings were loaded from
    profile_name: String,

    /// Origin every request is sent to
    base_url: String,
}

impl StatusLine {
    pub fn new(profile_name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            status_message: None,
            profile_name: profile_name.into(),
            base_url: base_url.into(),
        }
    }

    // === Status Message Methods ===

    /// Set a temporary status message
    pub fn set_status_message<S: Into<String>>(&mut self, message: S) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    /// Get the current status message
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    // === Session Information ===

    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }

    pub fn set_profile_name(&mut self, profile_name: impl Into<String>) {
        self.profile_name = profile_name.into();
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new("default", crate::config::DEFAULT_API_URL)
    }
}
