//! TOML presets describing a filter configuration.
//!
//! A preset file carries the same choices as the `process` flags:
//!
//! ```toml
//! order = "second"
//! transform = "step-matched"
//! cutoff_hz = 500.0
//! q = 0.5
//! ```

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::commands::{CliOrder, CliTransform};

/// One filter configuration loaded from disk.
#[derive(Debug, Deserialize)]
pub struct FilterPreset {
    /// Filter order.
    #[serde(default)]
    pub order: CliOrder,
    /// Discretization method.
    #[serde(default)]
    pub transform: CliTransform,
    /// Cutoff (first order) or natural (second order) frequency in Hz.
    pub cutoff_hz: f32,
    /// Quality factor; only meaningful for the second order.
    #[serde(default = "default_q")]
    pub q: f32,
}

fn default_q() -> f32 {
    0.707
}

impl FilterPreset {
    /// Read and parse a preset file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading preset {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing preset {}", path.display()))
    }
}
