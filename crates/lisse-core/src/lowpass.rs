//! Order-erased low-pass filter selected at configuration time.
//!
//! Callers that pick the order at runtime hold a [`LowPass`] instead of a
//! boxed trait object: the variant set is closed and small, so a tagged union
//! dispatches with a plain `match` and stays `Copy`-free but allocation-free.

use crate::error::FilterError;
use crate::filter::Filter;
use crate::first_order::FirstOrder;
use crate::real::Real;
use crate::second_order::SecondOrder;
use crate::transform::Transform;

/// Continuous-domain description of a low-pass prototype.
///
/// First order: `H(s) = 1/(1 + s·tau)`.
/// Second order: `H(s) = w0²/(s² + (w0/Q)·s + w0²)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Prototype<F> {
    /// One-pole prototype: sampling period and time constant (seconds).
    FirstOrder {
        /// Sampling period in seconds.
        te: F,
        /// Time constant in seconds (cutoff `1/tau` rad/s).
        tau: F,
    },
    /// Two-pole prototype: sampling period, natural frequency, quality
    /// factor.
    SecondOrder {
        /// Sampling period in seconds.
        te: F,
        /// Natural frequency in rad/s.
        w0: F,
        /// Quality factor (damping ratio `1/(2Q)`).
        q: F,
    },
}

impl<F: Real> Prototype<F> {
    /// Filter order described by this prototype.
    pub fn order(&self) -> usize {
        match self {
            Prototype::FirstOrder { .. } => 1,
            Prototype::SecondOrder { .. } => 2,
        }
    }
}

/// A first- or second-order recursive low-pass behind one type.
///
/// # Example
///
/// ```rust
/// use lisse_core::{Filter, LowPass, Prototype, Transform};
///
/// let proto = Prototype::SecondOrder { te: 0.01, w0: 6.0, q: 0.7 };
/// let mut lp = LowPass::configure(proto, Transform::StepMatched)?;
/// assert_eq!(lp.order(), 2);
/// let _ = lp.step(1.0)?;
/// # Ok::<(), lisse_core::FilterError>(())
/// ```
#[derive(Debug, Clone)]
pub enum LowPass<F> {
    /// One-pole variant.
    FirstOrder(FirstOrder<F>),
    /// Biquad variant.
    SecondOrder(SecondOrder<F>),
}

impl<F: Real> LowPass<F> {
    /// Derive coefficients for the given prototype and transform.
    ///
    /// This is the single entry point routing every order/transform pair to
    /// its coefficient formula; both orders support all four transforms.
    pub fn configure(prototype: Prototype<F>, transform: Transform) -> Result<Self, FilterError> {
        match prototype {
            Prototype::FirstOrder { te, tau } => {
                Ok(LowPass::FirstOrder(FirstOrder::new(te, tau, transform)?))
            }
            Prototype::SecondOrder { te, w0, q } => {
                Ok(LowPass::SecondOrder(SecondOrder::new(te, w0, q, transform)?))
            }
        }
    }
}

impl<F: Real> Filter<F> for LowPass<F> {
    #[inline]
    fn step(&mut self, input: F) -> Result<F, FilterError> {
        match self {
            LowPass::FirstOrder(f) => f.step(input),
            LowPass::SecondOrder(f) => f.step(input),
        }
    }

    fn reset(&mut self) {
        match self {
            LowPass::FirstOrder(f) => f.reset(),
            LowPass::SecondOrder(f) => f.reset(),
        }
    }

    fn order(&self) -> usize {
        match self {
            LowPass::FirstOrder(f) => f.order(),
            LowPass::SecondOrder(f) => f.order(),
        }
    }

    fn is_configured(&self) -> bool {
        match self {
            LowPass::FirstOrder(f) => f.is_configured(),
            LowPass::SecondOrder(f) => f.is_configured(),
        }
    }
}

impl<F: Real> From<FirstOrder<F>> for LowPass<F> {
    fn from(filter: FirstOrder<F>) -> Self {
        LowPass::FirstOrder(filter)
    }
}

impl<F: Real> From<SecondOrder<F>> for LowPass<F> {
    fn from(filter: SecondOrder<F>) -> Self {
        LowPass::SecondOrder(filter)
    }
}
