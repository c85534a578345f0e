//! Error taxonomy for the segment player.
//!
//! Configuration errors abort construction before the provider is touched.
//! Provider errors are either fatal for one instance (creation, playback)
//! or transient (a single handle call failed and the next tick retries).

use std::fmt;

/// A player placement was rejected before any provider interaction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("videoId is required")]
    MissingVideoId,

    #[error("startTime cannot be negative (got {start})")]
    NegativeStart { start: f64 },

    #[error("startTime must be a finite number")]
    InvalidStart,

    #[error("endTime must be a finite number")]
    InvalidEnd,

    #[error("endTime must be greater than startTime (start {start}, end {end})")]
    EndNotAfterStart { start: f64, end: f64 },
}

/// A single provider call failed.
///
/// Returned by [`crate::provider::VideoProvider`] methods and by
/// [`crate::provider::ProviderFactory::create`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("player handle is not usable")]
    Unusable,

    #[error("{operation} rejected: {message}")]
    Rejected {
        operation: &'static str,
        message: String,
    },

    #[error("{0}")]
    Creation(String),
}

impl ProviderError {
    pub fn rejected(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Rejected {
            operation,
            message: message.into(),
        }
    }
}

/// Category of a playback error reported by the provider's `onError` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackErrorKind {
    InvalidIdentifier,
    UnsupportedPlayback,
    NotFound,
    DisallowedEmbedding,
    InvalidRangeConfiguration,
    Unknown(i32),
}

impl PlaybackErrorKind {
    /// Map a provider numeric error code onto the taxonomy.
    pub fn from_code(code: i32) -> Self {
        match code {
            2 => Self::InvalidIdentifier,
            5 => Self::UnsupportedPlayback,
            100 => Self::NotFound,
            101 | 150 => Self::DisallowedEmbedding,
            153 => Self::InvalidRangeConfiguration,
            other => Self::Unknown(other),
        }
    }

    /// One-line message shown in place of the controls.
    pub fn message(&self) -> String {
        match self {
            Self::InvalidIdentifier => "Invalid video ID".to_string(),
            Self::UnsupportedPlayback => "HTML5 player error".to_string(),
            Self::NotFound => "Video not found".to_string(),
            Self::DisallowedEmbedding => "Video not allowed for playback".to_string(),
            Self::InvalidRangeConfiguration => {
                "End time exceeds video length or invalid configuration".to_string()
            }
            Self::Unknown(code) => format!("Unknown Error ({})", code),
        }
    }
}

impl fmt::Display for PlaybackErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Fatal error for one player instance. Siblings are unaffected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlayerError {
    #[error("{0}")]
    Configuration(#[from] ConfigError),

    #[error("Failed to create player: {0}")]
    ProviderCreation(ProviderError),

    #[error("{0}")]
    Playback(PlaybackErrorKind),
}

/// The provider API could not be loaded for the whole process.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BootstrapError {
    #[error("Failed to load the provider API script.")]
    LoadFailed,

    #[error("Setup error: Cannot insert provider API script.")]
    InsertFailed,
}
