//! Terminal segment player
//!
//! Hosts one or more segment players in the terminal, each driven by its
//! own `PlaybackController` over the simulated provider.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `state`: `TerminalHost` (the `UiHost`), `ControlsView` and `PageState`
//! - `input/`: Keyboard and mouse input handling
//! - `render/`: UI rendering (title, progress bar, status bar, error line, help)
//!
//! # Usage
//!
//! ```no_run
//! use segplay::config::Config;
//! use segplay::page::Page;
//! use segplay::player::play_page;
//! use std::path::Path;
//!
//! let page = Page::load(Path::new("clips.toml")).unwrap();
//! play_page(&page, &Config::default()).unwrap();
//! ```

pub(crate) mod input;
mod native;
pub mod render;
pub mod state;

pub use native::play_page;
pub use state::{ControlsView, InputResult, PageState, TerminalHost};
