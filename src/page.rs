//! Page manifests: several player placements declared in one file.
//!
//! ```toml
//! title = "Lecture clips"
//!
//! [[player]]
//! video_id = "dQw4w9WgXcQ"
//! start_time = 30
//! end_time = 90
//! ```
//!
//! Times are whole seconds. A missing start means 0 and a missing end means
//! the placement plays to the end of the media. Files ending in `.json` are
//! read as JSON with the same shape.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One declared player placement, not yet validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    #[serde(default)]
    pub video_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    /// Media length used by the simulated provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl Placement {
    pub fn start_secs(&self) -> f64 {
        self.start_time.unwrap_or(0) as f64
    }

    pub fn end_secs(&self) -> Option<f64> {
        self.end_time.map(|end| end as f64)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, rename = "player")]
    pub players: Vec<Placement>,
}

impl Page {
    /// Load a manifest, choosing the format from the file extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read page manifest: {}", path.display()))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let page = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        };
        page.with_context(|| format!("Invalid page manifest: {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}
