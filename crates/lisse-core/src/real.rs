//! Floating-point abstraction for the filter core.
//!
//! Coefficient derivation and the per-sample recurrences are generic over
//! [`Real`], so the same code runs in `f32` (embedded control loops) or `f64`
//! (offline analysis, host-side tooling) with no behavioral difference beyond
//! rounding. Transcendental functions come from `libm`, keeping the crate
//! `no_std` compatible.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Scalar type usable as a filter sample and coefficient.
///
/// Implemented for `f32` and `f64`. The trait deliberately covers only what
/// the derivations need; it is not a general numeric tower.
pub trait Real:
    Copy
    + PartialEq
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// 1/2, the quality-factor boundary between damping regimes.
    const ONE_HALF: Self;
    /// 2.
    const TWO: Self;
    /// 4.
    const FOUR: Self;

    /// `e^self`.
    fn exp(self) -> Self;
    /// Sine (radians).
    fn sin(self) -> Self;
    /// Cosine (radians).
    fn cos(self) -> Self;
    /// Hyperbolic sine.
    fn sinh(self) -> Self;
    /// Hyperbolic cosine.
    fn cosh(self) -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// `true` unless NaN or infinite.
    fn is_finite(self) -> bool;
    /// Lossy conversion from `f64`, for constants and host-side values.
    fn from_f64(value: f64) -> Self;
}

impl Real for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const ONE_HALF: Self = 0.5;
    const TWO: Self = 2.0;
    const FOUR: Self = 4.0;

    #[inline]
    fn exp(self) -> Self {
        libm::expf(self)
    }

    #[inline]
    fn sin(self) -> Self {
        libm::sinf(self)
    }

    #[inline]
    fn cos(self) -> Self {
        libm::cosf(self)
    }

    #[inline]
    fn sinh(self) -> Self {
        libm::sinhf(self)
    }

    #[inline]
    fn cosh(self) -> Self {
        libm::coshf(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }

    #[inline]
    fn abs(self) -> Self {
        libm::fabsf(self)
    }

    #[inline]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Real for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const ONE_HALF: Self = 0.5;
    const TWO: Self = 2.0;
    const FOUR: Self = 4.0;

    #[inline]
    fn exp(self) -> Self {
        libm::exp(self)
    }

    #[inline]
    fn sin(self) -> Self {
        libm::sin(self)
    }

    #[inline]
    fn cos(self) -> Self {
        libm::cos(self)
    }

    #[inline]
    fn sinh(self) -> Self {
        libm::sinh(self)
    }

    #[inline]
    fn cosh(self) -> Self {
        libm::cosh(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }

    #[inline]
    fn abs(self) -> Self {
        libm::fabs(self)
    }

    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_agree_across_precisions() {
        assert_eq!(f64::from(<f32 as Real>::TWO), <f64 as Real>::TWO);
        assert_eq!(f64::from(<f32 as Real>::ONE_HALF), <f64 as Real>::ONE_HALF);
    }

    #[test]
    fn exp_matches_libm() {
        let x = 0.25_f64;
        assert!((Real::exp(-x) - libm::exp(-0.25)).abs() < 1e-15);
        let y = 0.25_f32;
        assert!((Real::exp(-y) - libm::expf(-0.25)).abs() < 1e-7);
    }

    #[test]
    fn nan_is_not_finite() {
        assert!(!Real::is_finite(f32::NAN));
        assert!(!Real::is_finite(f64::INFINITY));
    }
}
