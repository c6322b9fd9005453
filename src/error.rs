//! reddit-tts Error Types
//!
//! Every backend reports failures through [`TtsError`]; nothing fails silently.

use std::fmt;
use thiserror::Error;

/// Error reported by a TTS provider (or by response validation on its behalf).
///
/// The `Display` rendering maps the TikTok proxy's status codes to a fixed
/// reason string. Log scrapers downstream match on these exact strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    pub code: i32,
    pub message: String,
}

impl ProviderError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Reason string for a provider status code
    pub fn reason(&self) -> &'static str {
        match self.code {
            1 => "probably the aid value isn't correct",
            2 => "the text is too long",
            4 => "the speaker doesn't exist",
            _ => "unknown",
        }
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Code: {}, reason: {}, message: {}",
            self.code,
            self.reason(),
            self.message
        )
    }
}

impl std::error::Error for ProviderError {}

/// Central error type for reddit-tts
#[derive(Error, Debug)]
pub enum TtsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Provider(ProviderError),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Translation error: {0}")]
    Translation(String),

    #[error("Nothing left to narrate after text processing")]
    EmptyText,

    #[error("Audio metadata error: {0}")]
    Audio(#[from] lofty::error::LoftyError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Coarse classification of a [`TtsError`], for callers deciding whether
/// to skip a post or abort the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Provider,
    Transport,
    Translation,
    Input,
    Audio,
    Io,
}

impl TtsError {
    pub fn provider(code: i32, message: impl Into<String>) -> Self {
        TtsError::Provider(ProviderError::new(code, message))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            TtsError::Config(_) => ErrorKind::Config,
            TtsError::Provider(_) => ErrorKind::Provider,
            TtsError::Transport(_) => ErrorKind::Transport,
            TtsError::Translation(_) => ErrorKind::Translation,
            TtsError::EmptyText => ErrorKind::Input,
            TtsError::Audio(_) => ErrorKind::Audio,
            TtsError::Io(_) => ErrorKind::Io,
        }
    }

    /// Provider status code, if this is a provider error
    pub fn code(&self) -> Option<i32> {
        match self {
            TtsError::Provider(e) => Some(e.code),
            _ => None,
        }
    }

    /// Connection-level failures are the only ones worth retrying.
    /// HTTP status errors are mapped to `Provider` before they get here.
    pub fn is_transient(&self) -> bool {
        match self {
            TtsError::Transport(e) => e.is_connect() || e.is_timeout(),
            _ => false,
        }
    }
}

impl From<ProviderError> for TtsError {
    fn from(err: ProviderError) -> Self {
        TtsError::Provider(err)
    }
}

/// Result type alias for reddit-tts operations
pub type TtsResult<T> = Result<T, TtsError>;
