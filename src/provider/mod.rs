//! Capability surface of the external video provider.
//!
//! The controller only ever talks to a provider through these traits, so
//! the real embed, the terminal simulator and test fakes are
//! interchangeable.

pub mod bootstrap;
mod events;
pub mod simulated;

use std::fmt;

pub use bootstrap::{LoadStatus, ProviderBootstrap, ScriptLoader};
pub use events::{event_channel, EventSink, PlayerEvent};
pub use simulated::{SimulatedFactory, SimulatedLoader};

use crate::error::ProviderError;

/// Playback state as reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerState {
    Unstarted,
    Ended,
    Playing,
    Paused,
    Buffering,
    Cued,
}

impl PlayerState {
    /// Decode the provider's numeric state code.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::Unstarted),
            0 => Some(Self::Ended),
            1 => Some(Self::Playing),
            2 => Some(Self::Paused),
            3 => Some(Self::Buffering),
            5 => Some(Self::Cued),
            _ => None,
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::Unstarted => -1,
            Self::Ended => 0,
            Self::Playing => 1,
            Self::Paused => 2,
            Self::Buffering => 3,
            Self::Cued => 5,
        }
    }
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unstarted => "unstarted",
            Self::Ended => "ended",
            Self::Playing => "playing",
            Self::Paused => "paused",
            Self::Buffering => "buffering",
            Self::Cued => "cued",
        };
        f.write_str(name)
    }
}

/// Embed options passed at creation time.
///
/// The end bound is deliberately absent: providers cannot enforce it, the
/// boundary monitor does.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderOptions {
    /// Absolute time to start at
    pub start: f64,
    /// Show the provider's native controls
    pub native_controls: bool,
    /// Let the provider handle keyboard shortcuts
    pub native_keyboard: bool,
    /// Allow the provider's own fullscreen
    pub allow_fullscreen: bool,
    /// Play inline instead of forcing fullscreen on mobile
    pub plays_inline: bool,
    /// Show related videos at the end
    pub related_videos: bool,
}

impl ProviderOptions {
    /// Options used for every segment player: native UI off.
    pub fn for_segment(start: f64) -> Self {
        Self {
            start,
            native_controls: false,
            native_keyboard: false,
            allow_fullscreen: true,
            plays_inline: true,
            related_videos: false,
        }
    }
}

/// Handle to one embedded player.
///
/// All calls return immediately. Completion is observed through the next
/// `StateChanged` event or the next poll.
pub trait VideoProvider {
    fn play(&mut self) -> Result<(), ProviderError>;

    fn pause(&mut self) -> Result<(), ProviderError>;

    /// Seek to an absolute time. `allow_seek_ahead` requests an accurate
    /// seek rather than the nearest keyframe.
    fn seek_to(&mut self, seconds: f64, allow_seek_ahead: bool) -> Result<(), ProviderError>;

    fn current_time(&self) -> Result<f64, ProviderError>;

    /// Total media duration; 0 while unknown.
    fn duration(&self) -> Result<f64, ProviderError>;

    fn playback_rate(&self) -> Result<f64, ProviderError>;

    fn set_playback_rate(&mut self, rate: f64) -> Result<(), ProviderError>;

    fn player_state(&self) -> Result<PlayerState, ProviderError>;

    /// Put the embed element into fullscreen.
    fn request_fullscreen(&mut self) -> Result<(), ProviderError>;

    /// Whether the handle can still answer queries.
    fn is_usable(&self) -> bool {
        true
    }
}

/// Creates provider handles once the provider API is loaded.
pub trait ProviderFactory {
    /// Instantiate an embed inside `container_id`.
    ///
    /// Lifecycle events for the new handle must be sent through `events`.
    fn create(
        &self,
        container_id: &str,
        video_id: &str,
        options: &ProviderOptions,
        events: EventSink,
    ) -> Result<Box<dyn VideoProvider>, ProviderError>;
}
