//! First-order (one-pole) low-pass synthesized from `H(s) = 1/(1 + s·tau)`.
//!
//! The recurrence is
//!
//! ```text
//! y[k] = cy1·y[k-1] + cx0·x[k] + cx1·x[k-1]
//! ```
//!
//! with coefficients derived once from the sampling period `Te`, the time
//! constant `tau` (cutoff `wc = 1/tau` rad/s) and the chosen [`Transform`].
//! Writing `a = Te/tau` and `p = exp(-a)`:
//!
//! | Transform        | cy1           | cx0       | cx1       |
//! |------------------|---------------|-----------|-----------|
//! | `Bilinear`       | `(2-a)/(2+a)` | `a/(2+a)` | `a/(2+a)` |
//! | `Homographic`    | `p`           | `(1-p)/2` | `(1-p)/2` |
//! | `StepMatched`    | `p`           | `0`       | `1-p`     |
//! | `ImpulseMatched` | `p`           | `a`       | `0`       |
//!
//! `p < 1` for any valid parameters, so every derived recurrence is stable.
//!
//! # Reference
//!
//! Franklin, Powell, Workman, "Digital Control of Dynamic Systems",
//! discrete equivalents of continuous transfer functions.

use crate::error::{FilterError, ensure_positive};
use crate::filter::Filter;
use crate::real::Real;
use crate::transform::Transform;

/// Derived constants of a one-pole recurrence.
///
/// Fully determined by `(Te, tau, transform)`; immutable once derived and
/// owned by the filter instance that derived them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirstOrderCoeffs<F> {
    /// Feedback coefficient on `y[k-1]` (the discrete pole).
    pub cy1: F,
    /// Feedforward coefficient on `x[k]`.
    pub cx0: F,
    /// Feedforward coefficient on `x[k-1]`.
    pub cx1: F,
}

impl<F: Real> FirstOrderCoeffs<F> {
    /// Derive the recurrence coefficients for one transform.
    ///
    /// Fails with [`FilterError::InvalidParameter`] if `te` or `tau` is not
    /// strictly positive (NaN included). Closed-form in every case, with no
    /// iteration and no implicit recomputation later.
    pub fn derive(te: F, tau: F, transform: Transform) -> Result<Self, FilterError> {
        ensure_positive(te, "Te")?;
        ensure_positive(tau, "tau")?;

        let a = te / tau;
        Ok(match transform {
            Transform::Bilinear => {
                let den = F::TWO + a;
                Self {
                    cy1: (F::TWO - a) / den,
                    cx0: a / den,
                    cx1: a / den,
                }
            }
            Transform::Homographic => {
                // Pole placed exactly at exp(-Te/tau); the Möbius zero stays
                // at z = -1 and the gain is normalized to unity at DC.
                let p = (-a).exp();
                let k = (F::ONE - p) * F::ONE_HALF;
                Self {
                    cy1: p,
                    cx0: k,
                    cx1: k,
                }
            }
            Transform::StepMatched => {
                // Unit-step output 1 - p^k, the sampled continuous response.
                let p = (-a).exp();
                Self {
                    cy1: p,
                    cx0: F::ZERO,
                    cx1: F::ONE - p,
                }
            }
            Transform::ImpulseMatched => {
                // Impulse output a·p^k = Te·h(k·Te).
                let p = (-a).exp();
                Self {
                    cy1: p,
                    cx0: a,
                    cx1: F::ZERO,
                }
            }
        })
    }

    /// Steady-state gain for a constant input.
    ///
    /// Exactly 1 for all transforms except `ImpulseMatched`, whose gain
    /// `a/(1 - e^-a)` approaches 1 as `Te → 0`.
    pub fn dc_gain(&self) -> F {
        (self.cx0 + self.cx1) / (F::ONE - self.cy1)
    }
}

/// One-pole recursive low-pass filter.
///
/// Create it fully parameterized with [`FirstOrder::new`], or start from
/// [`FirstOrder::unconfigured`] and call [`FirstOrder::configure`] before the
/// first step. Stepping an unconfigured filter returns
/// [`FilterError::NotInitialized`].
///
/// # Example
///
/// ```rust
/// use lisse_core::{Filter, FirstOrder, Transform};
///
/// let mut lp = FirstOrder::new(0.01_f64, 0.1, Transform::StepMatched)?;
/// let y = lp.step(1.0)?;
/// assert!(y < 1.0); // smoothing, not passthrough
/// # Ok::<(), lisse_core::FilterError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FirstOrder<F> {
    coeffs: Option<FirstOrderCoeffs<F>>,
    x1: F,
    y1: F,
}

impl<F: Real> FirstOrder<F> {
    /// Create a filter with coefficients derived immediately.
    pub fn new(te: F, tau: F, transform: Transform) -> Result<Self, FilterError> {
        Ok(Self {
            coeffs: Some(FirstOrderCoeffs::derive(te, tau, transform)?),
            x1: F::ZERO,
            y1: F::ZERO,
        })
    }

    /// Create an empty filter; [`FirstOrder::configure`] must run before the
    /// first step.
    pub fn unconfigured() -> Self {
        Self {
            coeffs: None,
            x1: F::ZERO,
            y1: F::ZERO,
        }
    }

    /// Derive and install new coefficients, clearing the sample history.
    ///
    /// Validation happens before anything is touched: on error the previous
    /// coefficients and state remain exactly as they were.
    pub fn configure(&mut self, te: F, tau: F, transform: Transform) -> Result<(), FilterError> {
        let coeffs = FirstOrderCoeffs::derive(te, tau, transform)?;
        self.coeffs = Some(coeffs);
        self.x1 = F::ZERO;
        self.y1 = F::ZERO;
        Ok(())
    }

    /// The installed coefficient set, if any.
    pub fn coefficients(&self) -> Option<&FirstOrderCoeffs<F>> {
        self.coeffs.as_ref()
    }
}

impl<F: Real> Filter<F> for FirstOrder<F> {
    #[inline]
    fn step(&mut self, input: F) -> Result<F, FilterError> {
        let c = self.coeffs.as_ref().ok_or(FilterError::NotInitialized)?;
        let output = c.cy1 * self.y1 + c.cx0 * input + c.cx1 * self.x1;
        self.y1 = output;
        self.x1 = input;
        Ok(output)
    }

    fn reset(&mut self) {
        self.x1 = F::ZERO;
        self.y1 = F::ZERO;
    }

    fn order(&self) -> usize {
        1
    }

    fn is_configured(&self) -> bool {
        self.coeffs.is_some()
    }
}

impl<F: Real> Default for FirstOrder<F> {
    fn default() -> Self {
        Self::unconfigured()
    }
}
