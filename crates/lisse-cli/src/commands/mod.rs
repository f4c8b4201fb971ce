//! CLI subcommands and the flag/core type conversions they share.

pub mod process;
pub mod response;

use clap::ValueEnum;
use lisse_core::Transform;
use serde::Deserialize;

/// Filter order selectable from the command line.
#[derive(Clone, Copy, Debug, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CliOrder {
    /// One-pole low-pass.
    First,
    /// Biquad low-pass.
    #[default]
    Second,
}

/// Discretization method selectable from the command line.
#[derive(Clone, Copy, Debug, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CliTransform {
    /// Tustin substitution (warped cutoff).
    #[default]
    Bilinear,
    /// Exact pole placement.
    Homographic,
    /// Exact sampled step response.
    StepMatched,
    /// Exact Te-scaled impulse response.
    ImpulseMatched,
}

impl From<CliTransform> for Transform {
    fn from(t: CliTransform) -> Self {
        match t {
            CliTransform::Bilinear => Transform::Bilinear,
            CliTransform::Homographic => Transform::Homographic,
            CliTransform::StepMatched => Transform::StepMatched,
            CliTransform::ImpulseMatched => Transform::ImpulseMatched,
        }
    }
}
