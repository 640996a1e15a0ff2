//! # Clipboard Module
//!
//! Copying the synthesized URL is the only clipboard operation the console
//! performs. Supports both memory-based and system clipboard implementations.
//! Failures are reported as `ClipboardUnavailable` and never touch console state.

use crate::console::errors::{ConsoleError, ConsoleResult};

/// Trait for clipboard implementations
pub trait Clipboard: Send {
    /// Replace the clipboard content with `text`
    fn set_text(&mut self, text: String) -> ConsoleResult<()>;

    /// Last text successfully written through this clipboard
    fn last_text(&self) -> Option<&str>;
}

/// Write `url` to the clipboard
pub fn copy_to_clipboard(clipboard: &mut dyn Clipboard, url: &str) -> ConsoleResult<()> {
    clipboard.set_text(url.to_string()).inspect_err(|e| {
        tracing::warn!("Copying URL failed: {e}");
    })
}

/// Memory-based clipboard, used when no system clipboard is wanted
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    content: Option<String>,
    unavailable: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that rejects every write
    pub fn unavailable() -> Self {
        Self {
            content: None,
            unavailable: true,
        }
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: String) -> ConsoleResult<()> {
        if self.unavailable {
            return Err(ConsoleError::ClipboardUnavailable(
                "no clipboard attached".to_string(),
            ));
        }
        tracing::debug!("Copying {} characters to memory clipboard", text.len());
        self.content = Some(text);
        Ok(())
    }

    fn last_text(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

/// System clipboard implementation backed by `arboard`
pub struct SystemClipboard {
    /// Cache for the last copied text
    cached_content: Option<String>,
    /// `None` when the platform clipboard could not be opened
    clipboard: Option<arboard::Clipboard>,
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("cached_content", &self.cached_content)
            .field("clipboard", &"<system clipboard>")
            .finish()
    }
}

impl SystemClipboard {
    /// Open the system clipboard. Opening failures are deferred to the
    /// first copy so that a headless session still starts.
    pub fn new() -> Self {
        let clipboard = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                tracing::warn!("System clipboard unavailable: {e}");
                None
            }
        };

        Self {
            cached_content: None,
            clipboard,
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: String) -> ConsoleResult<()> {
        tracing::debug!("Copying {} characters to system clipboard", text.len());

        let clipboard = self.clipboard.as_mut().ok_or_else(|| {
            ConsoleError::ClipboardUnavailable("system clipboard could not be opened".to_string())
        })?;

        clipboard
            .set_text(text.clone())
            .map_err(|e| ConsoleError::ClipboardUnavailable(e.to_string()))?;

        self.cached_content = Some(text);
        Ok(())
    }

    fn last_text(&self) -> Option<&str> {
        self.cached_content.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clipboard_should_store_copied_url() {
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.last_text(), None);

        copy_to_clipboard(&mut clipboard, "https://rnd.bgenc.dev/v1/ulid").unwrap();
        assert_eq!(clipboard.last_text(), Some("https://rnd.bgenc.dev/v1/ulid"));

        copy_to_clipboard(&mut clipboard, "https://rnd.bgenc.dev/v1/uuid").unwrap();
        assert_eq!(clipboard.last_text(), Some("https://rnd.bgenc.dev/v1/uuid"));
    }

    #[test]
    fn unavailable_clipboard_should_report_failure() {
        let mut clipboard = MemoryClipboard::unavailable();

        let result = copy_to_clipboard(&mut clipboard, "https://rnd.bgenc.dev/v1/ulid");

        assert!(matches!(result, Err(ConsoleError::ClipboardUnavailable(_))));
        assert_eq!(clipboard.last_text(), None);
    }

    #[test]
    fn system_clipboard_should_copy_or_report_unavailable() {
        // Headless hosts have no clipboard, so either outcome is valid
        let mut clipboard = SystemClipboard::new();

        match copy_to_clipboard(&mut clipboard, "https://rnd.bgenc.dev/v1/uuid") {
            Ok(()) => assert_eq!(clipboard.last_text(), Some("https://rnd.bgenc.dev/v1/uuid")),
            Err(e) => {
                assert!(matches!(e, ConsoleError::ClipboardUnavailable(_)));
                assert_eq!(clipboard.last_text(), None);
            }
        }
    }
}
