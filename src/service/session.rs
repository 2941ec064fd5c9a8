//! In-process generator session.
//!
//! Holds the state a UI binds to (current options, current password and its
//! strength) and exposes one method per user action.

use std::sync::Arc;

use crate::domain::{GenerationOptions, HistoryLog, Password, Settings, StrengthLevel};
use crate::error::{AppError, Result};
use crate::service::clipboard::{ClipboardSink, CopyOutcome};
use crate::service::password::{GeneratedPassword, PasswordService};
use crate::service::{HistoryStore, SettingsStore};
use crate::storage::Persisted;

/// Result of a copy action.
#[derive(Debug)]
pub struct CopyReport {
    /// What happened at the clipboard.
    pub outcome: CopyOutcome,
    /// History after recording the password.
    pub history: Persisted<HistoryLog>,
}

/// One user's generator session.
pub struct GeneratorSession {
    passwords: Arc<PasswordService>,
    history: Arc<HistoryStore>,
    settings: Arc<SettingsStore>,
    options: GenerationOptions,
    current: Option<Password>,
    strength: StrengthLevel,
}

impl GeneratorSession {
    /// Start a session using the saved settings (or defaults) as the initial
    /// options.
    pub async fn start(
        passwords: Arc<PasswordService>,
        history: Arc<HistoryStore>,
        settings: Arc<SettingsStore>,
    ) -> Self {
        let options = settings.current().await.to_options();
        Self {
            passwords,
            history,
            settings,
            options,
            current: None,
            strength: StrengthLevel::Unrated,
        }
    }

    /// Options the next generation will use.
    #[must_use]
    pub const fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Replace the options.
    pub fn set_options(&mut self, options: GenerationOptions) {
        self.options = options;
    }

    /// Password currently shown, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&Password> {
        self.current.as_ref()
    }

    /// Strength of the current password.
    #[must_use]
    pub const fn strength(&self) -> StrengthLevel {
        self.strength
    }

    /// Generate a new password from the current options.
    ///
    /// When the default classes are substituted for an empty selection, the
    /// session options are updated to match. On failure the current password
    /// is cleared.
    ///
    /// # Errors
    ///
    /// Propagates generation errors.
    pub fn generate(&mut self) -> Result<GeneratedPassword> {
        match self.passwords.generate(&self.options) {
            Ok(generated) => {
                if generated.defaulted {
                    self.options.classes.clone_from(&generated.classes);
                }
                self.current = Some(generated.password.clone());
                self.strength = generated.strength;
                Ok(generated)
            }
            Err(e) => {
                self.current = None;
                self.strength = StrengthLevel::Unrated;
                Err(e)
            }
        }
    }

    /// Copy the current password and record it in the history.
    ///
    /// A clipboard failure is not an error: the report asks the host to fall
    /// back to manual copying, and the password is still recorded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NothingToCopy`] if no password is shown.
    pub async fn copy_current(&mut self, sink: &mut dyn ClipboardSink) -> Result<CopyReport> {
        let password = self.current.clone().ok_or(AppError::NothingToCopy)?;

        let outcome = match sink.write(password.as_str()) {
            Ok(()) => CopyOutcome::Copied,
            Err(e) => {
                tracing::warn!(error = %e, "Clipboard write failed, manual copy required");
                CopyOutcome::ManualCopyRequired {
                    reason: e.to_string(),
                }
            }
        };

        let history = self.history.record(password.as_str()).await?;
        Ok(CopyReport { outcome, history })
    }

    /// Show a password from the history and copy it again.
    ///
    /// # Errors
    ///
    /// Same as [`copy_current`](Self::copy_current).
    pub async fn copy_history_item(
        &mut self,
        password: &str,
        sink: &mut dyn ClipboardSink,
    ) -> Result<CopyReport> {
        if password.is_empty() {
            return Err(AppError::NothingToCopy);
        }
        self.strength = self.passwords.score(password);
        self.current = Some(Password::from(password));
        self.copy_current(sink).await
    }

    /// Save the current options as settings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidLength`] if the length is out of bounds.
    pub async fn save_settings(&self) -> Result<Persisted<Settings>> {
        self.settings.save(Settings::from(&self.options)).await
    }

    /// Current history log.
    pub async fn history(&self) -> HistoryLog {
        self.history.snapshot().await
    }
}
