//! In-process provider used by the terminal player.
//!
//! Media is a plain clock: it advances at the playback rate while playing
//! and stops at the media duration, firing `Ended`. Video ids listed in the
//! error table fire their error code instead of `Ready`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Instant;

use super::bootstrap::ScriptLoader;
use super::{EventSink, PlayerState, ProviderFactory, ProviderOptions, VideoProvider};
use crate::error::{BootstrapError, ProviderError};

/// Time source for the simulated media clock.
pub type SimClock = Rc<dyn Fn() -> Instant>;

fn wall_clock() -> SimClock {
    Rc::new(Instant::now)
}

#[derive(Debug)]
struct Media {
    duration: f64,
    position: f64,
    state: PlayerState,
    rate: f64,
    /// Instant the position was last settled while playing
    anchor: Option<Instant>,
    fullscreen: bool,
}

impl Media {
    /// Fold elapsed playing time into `position`. Returns true if the media
    /// just ran out.
    fn settle(&mut self, now: Instant) -> bool {
        let Some(anchor) = self.anchor else {
            return false;
        };
        let elapsed = now.saturating_duration_since(anchor).as_secs_f64();
        self.position += elapsed * self.rate;
        self.anchor = Some(now);

        if self.position >= self.duration {
            self.position = self.duration;
            self.anchor = None;
            self.state = PlayerState::Ended;
            return true;
        }
        false
    }
}

/// Simulated embed handle.
pub struct SimulatedProvider {
    media: RefCell<Media>,
    events: EventSink,
    clock: SimClock,
}

impl SimulatedProvider {
    fn new(duration: f64, start: f64, events: EventSink, clock: SimClock) -> Self {
        let duration = duration.max(0.0);
        Self {
            media: RefCell::new(Media {
                duration,
                position: start.clamp(0.0, duration),
                state: PlayerState::Cued,
                rate: 1.0,
                anchor: None,
                fullscreen: false,
            }),
            events,
            clock,
        }
    }

    fn settle(&self) {
        let now = (self.clock)();
        let ended = self.media.borrow_mut().settle(now);
        if ended {
            self.events.state_changed(PlayerState::Ended);
        }
    }

    fn transition(&self, state: PlayerState) {
        let now = (self.clock)();
        let mut media = self.media.borrow_mut();
        if media.state == state {
            return;
        }
        media.state = state;
        media.anchor = (state == PlayerState::Playing).then_some(now);
        drop(media);
        self.events.state_changed(state);
    }
}

impl VideoProvider for SimulatedProvider {
    fn play(&mut self) -> Result<(), ProviderError> {
        self.settle();
        {
            let mut media = self.media.borrow_mut();
            if media.position >= media.duration {
                // Replays from the top once the media ran out
                media.position = 0.0;
            }
        }
        self.transition(PlayerState::Playing);
        Ok(())
    }

    fn pause(&mut self) -> Result<(), ProviderError> {
        self.settle();
        if self.media.borrow().state == PlayerState::Ended {
            return Ok(());
        }
        self.transition(PlayerState::Paused);
        Ok(())
    }

    fn seek_to(&mut self, seconds: f64, _allow_seek_ahead: bool) -> Result<(), ProviderError> {
        if !seconds.is_finite() {
            return Err(ProviderError::rejected("seekTo", "target is not finite"));
        }
        self.settle();
        let now = (self.clock)();
        let was_ended = {
            let mut media = self.media.borrow_mut();
            media.position = seconds.clamp(0.0, media.duration);
            if media.anchor.is_some() {
                media.anchor = Some(now);
            }
            media.state == PlayerState::Ended && media.position < media.duration
        };
        if was_ended {
            self.transition(PlayerState::Paused);
        }
        Ok(())
    }

    fn current_time(&self) -> Result<f64, ProviderError> {
        self.settle();
        Ok(self.media.borrow().position)
    }

    fn duration(&self) -> Result<f64, ProviderError> {
        Ok(self.media.borrow().duration)
    }

    fn playback_rate(&self) -> Result<f64, ProviderError> {
        Ok(self.media.borrow().rate)
    }

    fn set_playback_rate(&mut self, rate: f64) -> Result<(), ProviderError> {
        if !(rate.is_finite() && rate > 0.0) {
            return Err(ProviderError::rejected(
                "setPlaybackRate",
                format!("unsupported rate {}", rate),
            ));
        }
        self.settle();
        self.media.borrow_mut().rate = rate;
        Ok(())
    }

    fn player_state(&self) -> Result<PlayerState, ProviderError> {
        self.settle();
        Ok(self.media.borrow().state)
    }

    fn request_fullscreen(&mut self) -> Result<(), ProviderError> {
        let mut media = self.media.borrow_mut();
        media.fullscreen = !media.fullscreen;
        tracing::info!(fullscreen = media.fullscreen, "simulated fullscreen toggled");
        Ok(())
    }
}

/// Factory producing [`SimulatedProvider`] handles.
pub struct SimulatedFactory {
    default_duration: f64,
    durations: HashMap<String, f64>,
    error_videos: HashMap<String, i32>,
    clock: SimClock,
}

impl SimulatedFactory {
    pub fn new(default_duration: f64) -> Self {
        Self {
            default_duration,
            durations: HashMap::new(),
            error_videos: HashMap::new(),
            clock: wall_clock(),
        }
    }

    /// Use a custom time source instead of the wall clock.
    pub fn with_clock(mut self, clock: SimClock) -> Self {
        self.clock = clock;
        self
    }

    /// Media length for one specific video id.
    pub fn with_duration(mut self, video_id: impl Into<String>, duration: f64) -> Self {
        self.durations.insert(video_id.into(), duration);
        self
    }

    /// Make a video id fail with the given provider error code.
    pub fn with_error(mut self, video_id: impl Into<String>, code: i32) -> Self {
        self.error_videos.insert(video_id.into(), code);
        self
    }

    /// Register every `(video id, code)` pair from a config table.
    pub fn with_errors<'a>(mut self, errors: impl IntoIterator<Item = (&'a String, &'a i32)>) -> Self {
        self.error_videos
            .extend(errors.into_iter().map(|(id, code)| (id.clone(), *code)));
        self
    }
}

impl ProviderFactory for SimulatedFactory {
    fn create(
        &self,
        container_id: &str,
        video_id: &str,
        options: &ProviderOptions,
        events: EventSink,
    ) -> Result<Box<dyn VideoProvider>, ProviderError> {
        if container_id.is_empty() {
            return Err(ProviderError::Creation("container not found".to_string()));
        }

        let duration = self
            .durations
            .get(video_id)
            .copied()
            .unwrap_or(self.default_duration);

        let provider =
            SimulatedProvider::new(duration, options.start, events.clone(), self.clock.clone());

        match self.error_videos.get(video_id) {
            Some(&code) => {
                tracing::debug!(video_id, code, "simulated provider reporting error");
                events.error(code);
            }
            None => events.ready(),
        }

        Ok(Box::new(provider))
    }
}

/// Script loader that succeeds immediately.
#[derive(Debug, Default)]
pub struct SimulatedLoader {
    pub requested: Vec<String>,
}

impl ScriptLoader for SimulatedLoader {
    fn inject(&mut self, url: &str) -> Result<(), BootstrapError> {
        self.requested.push(url.to_string());
        Ok(())
    }
}
