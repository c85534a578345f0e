//! segplay - segment player over an embeddable video provider
//!
//! Plays a bounded `[start, end)` window of a video with custom transport
//! controls. Each placement gets a [`controller::PlaybackController`] that
//! drives a [`provider::VideoProvider`] handle and pushes display values to a
//! [`controller::UiHost`].
//!
//! - [`segment`]: pure segment math (config, clock, boundary, formatting) and
//!   the polling scheduler
//! - [`provider`]: provider capability traits, event channel, bootstrap and
//!   the simulated provider
//! - [`controller`]: the per-instance playback state machine
//! - [`registry`]: every instance on a page, fanned out on provider ready
//! - [`player`]: terminal host, input mapping and render loop

pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod page;
pub mod player;
pub mod provider;
pub mod registry;
pub mod segment;
pub mod theme;

pub use config::Config;
pub use controller::{PlaybackController, SeekPhase, UiHost};
pub use error::{BootstrapError, ConfigError, PlaybackErrorKind, PlayerError, ProviderError};
pub use registry::InstanceRegistry;
pub use segment::PlayerConfig;
