//! Inbound provider events.
//!
//! Each controller owns one channel. The provider side holds an
//! [`EventSink`] and pushes lifecycle notifications into it; the controller
//! drains the receiver before running any timer task.

use std::sync::mpsc::{self, Receiver, Sender};

use super::PlayerState;

/// Notification fired by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    /// The embed finished loading and accepts commands
    Ready,
    /// The provider moved to a new playback state
    StateChanged(PlayerState),
    /// The provider reported a numeric error code
    Error(i32),
}

/// Sending half of a controller's event channel.
#[derive(Debug, Clone)]
pub struct EventSink {
    tx: Sender<PlayerEvent>,
}

impl EventSink {
    /// Push an event. Dropped silently if the controller is gone.
    pub fn emit(&self, event: PlayerEvent) {
        let _ = self.tx.send(event);
    }

    pub fn ready(&self) {
        self.emit(PlayerEvent::Ready);
    }

    pub fn state_changed(&self, state: PlayerState) {
        self.emit(PlayerEvent::StateChanged(state));
    }

    pub fn error(&self, code: i32) {
        self.emit(PlayerEvent::Error(code));
    }
}

/// Create a new event channel.
pub fn event_channel() -> (EventSink, Receiver<PlayerEvent>) {
    let (tx, rx) = mpsc::channel();
    (EventSink { tx }, rx)
}
