//! Lisse Core - discrete-time low-pass synthesis from continuous prototypes
//!
//! This crate derives recursive low-pass filters (first and second order)
//! from classical continuous-time parameters (sampling period, time constant
//! or natural frequency, quality factor) and applies them sample by sample.
//! It targets real-time control and DSP loops that think in `Te`, `tau`,
//! `w0`, `Q` rather than in hand-picked discrete coefficients.
//!
//! # Core Abstractions
//!
//! ## Filters
//!
//! - [`FirstOrder`] - one-pole low-pass from `H(s) = 1/(1 + s·tau)`
//! - [`SecondOrder`] - biquad low-pass from `H(s) = w0²/(s² + (w0/Q)s + w0²)`
//! - [`LowPass`] - order-erased union of the two, selected at configuration
//! - [`MovingAverage`] - fixed-window FIR smoother
//!
//! ## Discretization
//!
//! A [`Transform`] picks which property of the continuous prototype the
//! discrete recurrence preserves exactly:
//!
//! - [`Transform::Bilinear`] - Tustin substitution (warped cutoff)
//! - [`Transform::Homographic`] - exact pole placement
//! - [`Transform::StepMatched`] - exact sampled step response
//! - [`Transform::ImpulseMatched`] - exact `Te`-scaled impulse response
//!
//! Coefficients are derived once at configuration; stepping is a fixed-form
//! linear recurrence, O(order) arithmetic per sample, no allocation.
//!
//! ## Stepping
//!
//! - [`Filter`] - the shared trait: `step`, `step_batch`, `reset`
//! - [`Bound`] - step through caller-owned storage, optionally in place
//!
//! # Lifecycle and Errors
//!
//! A filter is either fully parameterized at construction (`new`) or created
//! [`unconfigured`](FirstOrder::unconfigured) and configured explicitly.
//! Invalid continuous parameters fail with
//! [`FilterError::InvalidParameter`]; stepping before configuration fails
//! with [`FilterError::NotInitialized`]. Errors are returned to the caller,
//! never logged or papered over.
//!
//! # Example
//!
//! ```rust
//! use lisse_core::{Filter, SecondOrder, Transform};
//!
//! // 100 Hz loop, 1 Hz natural frequency, slightly underdamped.
//! let mut lp = SecondOrder::new(0.01_f64, 6.2832, 0.7, Transform::StepMatched)?;
//! let mut out = 0.0;
//! for _ in 0..300 {
//!     out = lp.step(1.0)?;
//! }
//! assert!((out - 1.0).abs() < 0.01);
//! # Ok::<(), lisse_core::FilterError>(())
//! ```
//!
//! # no_std Support
//!
//! `no_std` compatible for embedded control loops; disable the default `std`
//! feature:
//!
//! ```toml
//! [dependencies]
//! lisse-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Design Principles
//!
//! - **Continuous in, discrete out**: callers specify analog-domain
//!   parameters; coefficient derivation happens exactly once
//! - **Real-time safe**: no allocations or I/O in the sample path
//! - **No dependencies on std**: pure `no_std` with `libm` for math
//! - **Generic precision**: every filter works in `f32` or `f64`

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod binding;
pub mod error;
pub mod filter;
pub mod first_order;
pub mod lowpass;
pub mod moving_average;
pub mod real;
pub mod second_order;
pub mod transform;

// Re-export main types at crate root
pub use binding::Bound;
pub use error::FilterError;
pub use filter::Filter;
pub use first_order::{FirstOrder, FirstOrderCoeffs};
pub use lowpass::{LowPass, Prototype};
pub use moving_average::MovingAverage;
pub use real::Real;
pub use second_order::{SecondOrder, SecondOrderCoeffs};
pub use transform::Transform;
