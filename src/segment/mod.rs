//! Segment playback primitives.
//!
//! Everything in here is independent of any provider or host:
//!
//! - `config`: validated player placement (`PlayerConfig`)
//! - `clock`: absolute <-> logical time mapping
//! - `boundary`: end-of-segment stop decision
//! - `scheduler`: the two periodic polling tasks
//! - `format`: time and rate labels

pub mod boundary;
pub mod clock;
pub mod config;
pub mod format;
pub mod scheduler;

pub use boundary::{BoundaryAction, BoundaryMonitor, END_TIME_PADDING, SEEK_TOLERANCE};
pub use clock::{from_logical_percent, logical_duration, to_logical, LogicalPosition};
pub use config::PlayerConfig;
pub use format::{format_rate, format_time};
pub use scheduler::{PollSettings, PollTask, PollingScheduler};
