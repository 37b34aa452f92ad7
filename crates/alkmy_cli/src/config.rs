//! Loop file handling
//!
//! A loop file describes one logo loop plus the synthetic layout used to
//! simulate it:
//!
//! ```toml
//! [loop]
//! speed = 120
//! direction = "left"
//!
//! [[loop.items]]
//! src = "/logos/reddit.svg"
//! alt = "Reddit"
//!
//! [simulation]
//! frames = 240
//! fps = 60
//! container = 1200
//! sequence = 400
//! ```

use alkmy_marquee::LogoLoopConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Synthetic host environment for a simulation run
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Frames to run
    pub frames: u32,
    /// Display refresh rate
    pub fps: f32,
    /// Container extent along the loop axis (pixels)
    pub container: f32,
    /// Sequence extent along the loop axis (pixels)
    pub sequence: f32,
    /// Frame at which the pointer enters the track
    pub hover_at: Option<u32>,
    /// Frame at which the pointer leaves the track
    pub leave_at: Option<u32>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            frames: 240,
            fps: 60.0,
            container: 1200.0,
            sequence: 400.0,
            hover_at: None,
            leave_at: None,
        }
    }
}

/// Contents of a loop file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoopFile {
    #[serde(rename = "loop", default)]
    pub logo_loop: LogoLoopConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

impl LoopFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let file: LoopFile = toml::from_str(content)?;
        Ok(file)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize loop file")
    }
}
