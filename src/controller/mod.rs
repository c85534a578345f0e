//! Segment playback controller.
//!
//! One `PlaybackController` drives one embedded player. It owns the
//! provider handle, the playback session and the inbound event channel,
//! and pushes display values into its [`UiHost`].
//!
//! All work happens inside [`PlaybackController::pump`] or the public
//! transport operations, on the host's single event loop. `pump` drains
//! provider events completely before running any due timer task, so a tick
//! never observes a half-applied state change.

mod session;
#[cfg(test)]
pub(crate) mod testing;
mod ui;

pub use session::PlaybackSession;
pub use ui::{PlayPauseGlyph, UiHost};

use std::sync::mpsc::Receiver;
use std::time::Instant;

use crate::error::{PlaybackErrorKind, PlayerError, ProviderError};
use crate::provider::{
    event_channel, EventSink, PlayerEvent, PlayerState, ProviderFactory, ProviderOptions,
    VideoProvider,
};
use crate::segment::{
    format_rate, format_time, from_logical_percent, logical_duration, to_logical, BoundaryAction,
    BoundaryMonitor, PlayerConfig, PollSettings, PollTask, SEEK_TOLERANCE,
};

/// Prefix for every error shown in place of the controls.
pub const ERROR_PREFIX: &str = "Video Player Error: ";

/// Phase of a progress-slider gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekPhase {
    /// Slider is being dragged: update the display only
    Dragging,
    /// Slider was released: issue the provider seek
    Released,
}

/// Drives one segment player.
pub struct PlaybackController<U: UiHost> {
    instance_id: String,
    config: PlayerConfig,
    boundary: Option<BoundaryMonitor>,
    ui: U,
    provider: Option<Box<dyn VideoProvider>>,
    session: PlaybackSession,
    events_tx: EventSink,
    events_rx: Receiver<PlayerEvent>,
    failure: Option<PlayerError>,
    help_visible: bool,
    /// Set by `destroy`; the instance never gets a player again
    destroyed: bool,
}

impl<U: UiHost> PlaybackController<U> {
    /// Create a controller for a validated placement.
    ///
    /// No provider is created yet; see [`Self::create_player`].
    pub fn new(
        instance_id: impl Into<String>,
        config: PlayerConfig,
        ui: U,
        settings: PollSettings,
    ) -> Self {
        let boundary = config
            .end_time()
            .map(|end| BoundaryMonitor::new(end, settings.end_padding));
        let (events_tx, events_rx) = event_channel();

        Self {
            instance_id: instance_id.into(),
            config,
            boundary,
            ui,
            provider: None,
            session: PlaybackSession::new(settings),
            events_tx,
            events_rx,
            failure: None,
            help_visible: false,
            destroyed: false,
        }
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    pub fn is_ready(&self) -> bool {
        self.session.ready
    }

    pub fn has_player(&self) -> bool {
        self.provider.is_some()
    }

    pub fn playback_rate(&self) -> f64 {
        self.session.current_rate
    }

    /// Last fatal error, cleared by the next ready event.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn failure(&self) -> Option<&PlayerError> {
        self.failure.as_ref()
    }

    pub fn is_polling(&self, task: PollTask) -> bool {
        self.session.scheduler.is_armed(task)
    }

    /// When the host loop must call [`Self::pump`] next.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.session.scheduler.next_deadline()
    }

    /// Sink the provider uses to deliver events to this controller.
    pub fn event_sink(&self) -> EventSink {
        self.events_tx.clone()
    }

    /// Instantiate the provider embed for this placement.
    ///
    /// Calling this when a player already exists, or after `destroy`, is a
    /// logged no-op. A rejected creation is terminal: the error replaces the
    /// controls.
    pub fn create_player(&mut self, factory: &dyn ProviderFactory) -> Result<(), PlayerError> {
        if self.destroyed {
            tracing::warn!(instance = %self.instance_id, "player was destroyed, not creating");
            return Ok(());
        }
        if self.provider.is_some() {
            tracing::warn!(instance = %self.instance_id, "player already exists");
            return Ok(());
        }

        tracing::info!(
            instance = %self.instance_id,
            video_id = self.config.video_id(),
            start = self.config.start_time(),
            end = ?self.config.end_time(),
            "creating player"
        );

        let container_id = format!("{}-player", self.instance_id);
        let options = ProviderOptions::for_segment(self.config.start_time());
        match factory.create(
            &container_id,
            self.config.video_id(),
            &options,
            self.events_tx.clone(),
        ) {
            Ok(handle) => {
                self.provider = Some(handle);
                Ok(())
            }
            Err(e) => {
                let err = PlayerError::ProviderCreation(e);
                self.fail(err.clone());
                Err(err)
            }
        }
    }

    /// Process queued provider events, then run the timer tasks due at `now`.
    pub fn pump(&mut self, now: Instant) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event, now);
        }

        for task in self.session.scheduler.due(now) {
            match task {
                PollTask::Boundary => {
                    self.check_boundary();
                }
                PollTask::Progress => self.progress_tick(),
            }
        }
    }

    /// Apply one provider event to the state machine.
    pub fn handle_event(&mut self, event: PlayerEvent, now: Instant) {
        match event {
            PlayerEvent::Ready => self.on_ready(now),
            PlayerEvent::Error(code) => self.on_error(code),
            PlayerEvent::StateChanged(state) => self.on_state_change(state, now),
        }
    }

    fn on_ready(&mut self, now: Instant) {
        if self.provider.is_none() {
            tracing::warn!(instance = %self.instance_id, "ready event without a player");
            return;
        }
        tracing::info!(instance = %self.instance_id, "player ready");

        self.session.ready = true;
        self.failure = None;
        self.ui.hide_error();
        self.ui.set_controls_visible(true);

        self.update_duration_display();
        self.ui.set_rate(&format_rate(self.session.current_rate));
        self.refresh_progress();

        let playing = self.provider_state() == Some(PlayerState::Playing);
        self.start_polling(playing, now);
    }

    fn on_error(&mut self, code: i32) {
        let kind = PlaybackErrorKind::from_code(code);
        tracing::error!(instance = %self.instance_id, code, error = %kind, "provider error");
        self.fail(PlayerError::Playback(kind));
    }

    fn on_state_change(&mut self, state: PlayerState, now: Instant) {
        if !self.session.ready && state != PlayerState::Cued {
            tracing::debug!(instance = %self.instance_id, %state, "state change before ready ignored");
            return;
        }
        tracing::debug!(instance = %self.instance_id, %state, "state changed");
        self.session.last_state = Some(state);

        if state == PlayerState::Playing {
            self.ui.set_play_pause(PlayPauseGlyph::Pause);
            self.start_polling(true, now);
            self.check_boundary();
        } else {
            self.ui.set_play_pause(PlayPauseGlyph::Play);
            self.session.scheduler.stop();

            if state == PlayerState::Ended {
                if let Some(end) = self.config.end_time() {
                    self.seek_provider(end);
                }
            }
        }

        self.refresh_progress();
    }

    /// Mark the instance failed: timers stop and the error replaces the controls.
    fn fail(&mut self, err: PlayerError) {
        self.session.invalidate();
        self.ui.show_error(&format!("{}{}", ERROR_PREFIX, err));
        self.ui.set_controls_visible(false);
        self.failure = Some(err);
    }

    fn start_polling(&mut self, with_boundary: bool, now: Instant) {
        if !self.session.ready {
            return;
        }
        let with_boundary = with_boundary && self.boundary.is_some();
        self.session.scheduler.start(with_boundary, now);
    }

    fn progress_tick(&mut self) {
        let usable = self.provider.as_ref().is_some_and(|p| p.is_usable());
        if self.session.ready && usable {
            self.refresh_progress();
        } else {
            tracing::warn!(instance = %self.instance_id, "stopping progress polling");
            self.session.scheduler.stop();
        }
    }

    /// Run one boundary check and execute its action.
    pub fn check_boundary(&mut self) -> BoundaryAction {
        let Some(monitor) = self.boundary else {
            return BoundaryAction::Continue;
        };
        if !self.session.ready {
            return BoundaryAction::Continue;
        }
        let Some(provider) = self.provider.as_mut() else {
            return BoundaryAction::Continue;
        };

        let sample = provider
            .current_time()
            .and_then(|time| provider.player_state().map(|state| (time, state)));
        let (current, state) = match sample {
            Ok(sample) => sample,
            Err(e) => {
                self.transient("boundary check", &e);
                return BoundaryAction::Continue;
            }
        };

        let action = monitor.check(current, state);
        if let BoundaryAction::Stop { seek_to } = action {
            tracing::info!(
                instance = %self.instance_id,
                current,
                end = monitor.end_time(),
                "reached end time, pausing"
            );
            if let Err(e) = provider.pause() {
                self.transient("pause", &e);
            }
            if let Some(target) = seek_to {
                self.seek_provider(target);
            }
            self.refresh_progress();
        }
        action
    }

    /// Play, or pause when playing. At the end of a finished segment the
    /// playhead is first moved back to the segment start.
    pub fn toggle_play_pause(&mut self) {
        if !self.session.ready {
            return;
        }
        let Some(state) = self.provider_state() else {
            return;
        };

        if state == PlayerState::Playing {
            self.provider_call("pause", |p| p.pause());
            return;
        }

        if let Some(end) = self.config.end_time() {
            match self.current_time_or_start() {
                Ok(current) if current >= end - SEEK_TOLERANCE => {
                    tracing::info!(instance = %self.instance_id, "reached end, restarting from beginning");
                    self.seek_provider(self.config.start_time());
                    self.refresh_progress();
                }
                Ok(_) => {}
                Err(e) => {
                    self.transient("toggle play/pause", &e);
                    return;
                }
            }
        }
        self.provider_call("play", |p| p.play());
    }

    /// Seek by `delta` seconds, clamped to the segment.
    pub fn seek_relative(&mut self, delta: f64) {
        if !self.session.ready {
            return;
        }
        let current = match self.current_time_or_start() {
            Ok(current) => current,
            Err(e) => {
                self.transient("seek", &e);
                return;
            }
        };

        let mut target = current + delta;
        if self.config.start_time() != 0.0 {
            target = target.max(self.config.start_time());
        }
        if let Some(end) = self.config.end_time() {
            target = target.min(end);
        }

        self.seek_provider(target);
        self.refresh_progress();
    }

    /// The user grabbed the progress slider: stop polling so ticks don't
    /// fight the drag.
    pub fn begin_drag(&mut self) {
        if !self.session.ready {
            return;
        }
        self.session.dragging = true;
        self.session.scheduler.stop();
    }

    /// Move the playhead to a slider position.
    ///
    /// While dragging only the display changes. On release exactly one
    /// provider seek is issued, and polling resumes if still playing.
    pub fn seek_to_percent(&mut self, percent: f64, phase: SeekPhase, now: Instant) {
        if !self.session.ready {
            return;
        }
        let reported = self.reported_duration();
        let target = from_logical_percent(percent, &self.config, reported);
        let position = to_logical(target, &self.config, reported);

        self.ui.set_progress(position.progress_percent);
        self.ui
            .set_current_time(&format_time(position.logical_elapsed));

        match phase {
            SeekPhase::Dragging => {
                self.session.dragging = true;
            }
            SeekPhase::Released => {
                self.session.dragging = false;
                self.seek_provider(target);
                if self.provider_state() == Some(PlayerState::Playing) {
                    self.start_polling(true, now);
                }
            }
        }
    }

    /// Change the playback rate by `delta`, clamped to 0.1..=3.0.
    pub fn change_playback_rate(&mut self, delta: f64) {
        if !self.session.ready {
            return;
        }
        let Some(provider) = self.provider.as_mut() else {
            return;
        };

        let rate = self.session.next_rate(delta);
        match provider.set_playback_rate(rate) {
            Ok(()) => {
                self.session.current_rate = rate;
                self.ui.set_rate(&format_rate(rate));
                tracing::debug!(instance = %self.instance_id, rate, "playback rate changed");
            }
            Err(e) => self.transient("set playback rate", &e),
        }
    }

    pub fn toggle_fullscreen(&mut self) {
        tracing::debug!(instance = %self.instance_id, "fullscreen requested");
        self.provider_call("fullscreen", |p| p.request_fullscreen());
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
        self.ui.set_help_visible(self.help_visible);
    }

    pub fn close_help(&mut self) {
        if self.help_visible {
            self.help_visible = false;
            self.ui.set_help_visible(false);
        }
    }

    pub fn is_help_visible(&self) -> bool {
        self.help_visible
    }

    /// Release timers and the provider handle. Safe to call repeatedly.
    ///
    /// Destruction is terminal: the controller never creates a player again.
    pub fn destroy(&mut self) {
        self.destroyed = true;
        if self.provider.is_none() && self.session.scheduler.is_idle() {
            return;
        }
        tracing::info!(instance = %self.instance_id, "destroying player");
        self.session.invalidate();
        self.provider = None;
    }

    /// Re-read the provider clock and push progress and time labels.
    pub fn refresh_progress(&mut self) {
        if !self.session.ready || self.session.dragging {
            return;
        }
        let current = match self.current_time_or_start() {
            Ok(current) => current,
            Err(e) => {
                self.transient("progress refresh", &e);
                return;
            }
        };

        let position = to_logical(current, &self.config, self.reported_duration());
        self.ui.set_progress(position.progress_percent);
        self.ui
            .set_current_time(&format_time(position.logical_elapsed));
        if self.config.end_time().is_none() {
            // Remaining duration is only known once the provider has loaded
            self.ui
                .set_duration(&format_time(position.logical_duration));
        }
    }

    fn update_duration_display(&mut self) {
        let duration = logical_duration(&self.config, self.reported_duration());
        self.ui.set_duration(&format_time(duration));
    }

    fn reported_duration(&self) -> f64 {
        self.provider
            .as_ref()
            .and_then(|p| p.duration().ok())
            .unwrap_or(0.0)
    }

    fn provider_state(&mut self) -> Option<PlayerState> {
        let result = self.provider.as_ref()?.player_state();
        match result {
            Ok(state) => Some(state),
            Err(e) => {
                self.transient("player state", &e);
                None
            }
        }
    }

    /// Current provider time; 0 (not started) reads as the segment start.
    fn current_time_or_start(&self) -> Result<f64, ProviderError> {
        let provider = self.provider.as_ref().ok_or(ProviderError::Unusable)?;
        let time = provider.current_time()?;
        if time.is_finite() && time > 0.0 {
            Ok(time)
        } else {
            Ok(self.config.start_time())
        }
    }

    fn seek_provider(&mut self, target: f64) {
        self.provider_call("seek", |p| p.seek_to(target, true));
    }

    fn provider_call(
        &mut self,
        operation: &'static str,
        call: impl FnOnce(&mut dyn VideoProvider) -> Result<(), ProviderError>,
    ) {
        let Some(provider) = self.provider.as_mut() else {
            return;
        };
        if let Err(e) = call(provider.as_mut()) {
            self.transient(operation, &e);
        }
    }

    fn transient(&self, operation: &str, err: &ProviderError) {
        tracing::error!(instance = %self.instance_id, operation, error = %err, "provider call failed");
    }
}
