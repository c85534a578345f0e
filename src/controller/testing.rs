//! Test doubles for controller and registry tests.

use std::cell::RefCell;
use std::rc::Rc;

use super::ui::{PlayPauseGlyph, UiHost};
use crate::error::ProviderError;
use crate::provider::{EventSink, PlayerState, ProviderFactory, ProviderOptions, VideoProvider};

/// Provider command observed by the fake.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Play,
    Pause,
    Seek(f64),
    SetRate(f64),
    Fullscreen,
}

#[derive(Debug)]
pub struct FakeMedia {
    pub time: f64,
    pub duration: f64,
    pub state: PlayerState,
    pub rate: f64,
    pub usable: bool,
    /// When false, commands are recorded but do not change `time`/`state`
    pub apply_commands: bool,
    /// Operations that fail with `ProviderError::Unusable`
    pub failing: Vec<&'static str>,
    pub calls: Vec<Call>,
}

pub type SharedMedia = Rc<RefCell<FakeMedia>>;

pub fn media(time: f64, duration: f64, state: PlayerState) -> SharedMedia {
    Rc::new(RefCell::new(FakeMedia {
        time,
        duration,
        state,
        rate: 1.0,
        usable: true,
        apply_commands: true,
        failing: Vec::new(),
        calls: Vec::new(),
    }))
}

pub struct FakeProvider {
    pub media: SharedMedia,
}

impl FakeProvider {
    fn check(&self, operation: &'static str) -> Result<(), ProviderError> {
        if self.media.borrow().failing.contains(&operation) {
            Err(ProviderError::Unusable)
        } else {
            Ok(())
        }
    }
}

impl VideoProvider for FakeProvider {
    fn play(&mut self) -> Result<(), ProviderError> {
        self.check("play")?;
        let mut media = self.media.borrow_mut();
        media.calls.push(Call::Play);
        if media.apply_commands {
            media.state = PlayerState::Playing;
        }
        Ok(())
    }

    fn pause(&mut self) -> Result<(), ProviderError> {
        self.check("pause")?;
        let mut media = self.media.borrow_mut();
        media.calls.push(Call::Pause);
        if media.apply_commands {
            media.state = PlayerState::Paused;
        }
        Ok(())
    }

    fn seek_to(&mut self, seconds: f64, _allow_seek_ahead: bool) -> Result<(), ProviderError> {
        self.check("seek")?;
        let mut media = self.media.borrow_mut();
        media.calls.push(Call::Seek(seconds));
        if media.apply_commands {
            media.time = seconds;
        }
        Ok(())
    }

    fn current_time(&self) -> Result<f64, ProviderError> {
        self.check("current_time")?;
        Ok(self.media.borrow().time)
    }

    fn duration(&self) -> Result<f64, ProviderError> {
        Ok(self.media.borrow().duration)
    }

    fn playback_rate(&self) -> Result<f64, ProviderError> {
        Ok(self.media.borrow().rate)
    }

    fn set_playback_rate(&mut self, rate: f64) -> Result<(), ProviderError> {
        self.check("set_rate")?;
        let mut media = self.media.borrow_mut();
        media.calls.push(Call::SetRate(rate));
        media.rate = rate;
        Ok(())
    }

    fn player_state(&self) -> Result<PlayerState, ProviderError> {
        Ok(self.media.borrow().state)
    }

    fn request_fullscreen(&mut self) -> Result<(), ProviderError> {
        self.media.borrow_mut().calls.push(Call::Fullscreen);
        Ok(())
    }

    fn is_usable(&self) -> bool {
        self.media.borrow().usable
    }
}

/// Factory handing out fakes over a shared media per video id.
#[derive(Default)]
pub struct FakeFactory {
    pub media: RefCell<Vec<(String, SharedMedia)>>,
    pub fail_with: Option<String>,
    pub created: RefCell<Vec<String>>,
}

impl FakeFactory {
    pub fn with_media(video_id: &str, media: SharedMedia) -> Self {
        let factory = Self::default();
        factory
            .media
            .borrow_mut()
            .push((video_id.to_string(), media));
        factory
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }
}

impl ProviderFactory for FakeFactory {
    fn create(
        &self,
        container_id: &str,
        video_id: &str,
        options: &ProviderOptions,
        _events: EventSink,
    ) -> Result<Box<dyn VideoProvider>, ProviderError> {
        if let Some(message) = &self.fail_with {
            return Err(ProviderError::Creation(message.clone()));
        }
        self.created.borrow_mut().push(container_id.to_string());

        let existing = self
            .media
            .borrow()
            .iter()
            .find(|(id, _)| id == video_id)
            .map(|(_, m)| m.clone());
        let shared = existing.unwrap_or_else(|| {
            let m = media(options.start, 300.0, PlayerState::Cued);
            self.media.borrow_mut().push((video_id.to_string(), m.clone()));
            m
        });
        Ok(Box::new(FakeProvider { media: shared }))
    }
}

/// UiHost that keeps the last value pushed for every control.
#[derive(Debug, Default)]
pub struct RecordingUi {
    pub glyph: PlayPauseGlyph,
    pub progress: Option<f64>,
    pub progress_updates: usize,
    pub current_time: String,
    pub duration: String,
    pub rate: String,
    pub error: Option<String>,
    pub controls_visible: bool,
    pub help_visible: bool,
}

impl UiHost for RecordingUi {
    fn set_play_pause(&mut self, glyph: PlayPauseGlyph) {
        self.glyph = glyph;
    }

    fn set_progress(&mut self, percent: f64) {
        self.progress = Some(percent);
        self.progress_updates += 1;
    }

    fn set_current_time(&mut self, label: &str) {
        self.current_time = label.to_string();
    }

    fn set_duration(&mut self, label: &str) {
        self.duration = label.to_string();
    }

    fn set_rate(&mut self, label: &str) {
        self.rate = label.to_string();
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    fn hide_error(&mut self) {
        self.error = None;
    }

    fn set_controls_visible(&mut self, visible: bool) {
        self.controls_visible = visible;
    }

    fn set_help_visible(&mut self, visible: bool) {
        self.help_visible = visible;
    }
}
