//! Clipboard sink seam.

use crate::error::ClipboardError;

/// Somewhere a password can be copied to.
pub trait ClipboardSink {
    /// Place `text` on the clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError::Unavailable`] if the write did not happen.
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// How a copy request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The clipboard now holds the password.
    Copied,
    /// The clipboard refused the write; the host should let the user select
    /// and copy the text manually.
    ManualCopyRequired {
        /// Why the clipboard write failed.
        reason: String,
    },
}

/// Clipboard held in process memory.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    /// Empty clipboard.
    #[must_use]
    pub const fn new() -> Self {
        Self { contents: None }
    }

    /// Last text written.
    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
