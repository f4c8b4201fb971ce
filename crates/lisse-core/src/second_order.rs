//! Second-order low-pass synthesized from `H(s) = w0²/(s² + (w0/Q)·s + w0²)`.
//!
//! The recurrence is the Direct Form I biquad
//!
//! ```text
//! y[k] = cy1·y[k-1] + cy2·y[k-2] + cx0·x[k] + cx1·x[k-1] + cx2·x[k-2]
//! ```
//!
//! parameterized by the sampling period `Te`, the natural frequency `w0`
//! (rad/s) and the quality factor `Q` (damping ratio `zeta = 1/(2Q)`).
//!
//! `Bilinear` substitutes `s = (2/Te)(1-z⁻¹)/(1+z⁻¹)` into the quadratic
//! denominator and needs no case analysis. The other three transforms place
//! the discrete poles at the exact images `exp(s_pole·Te)` of the continuous
//! pole pair, whose form changes qualitatively with the damping regime:
//!
//! - `Q > 1/2` (underdamped): conjugate pair `-sigma ± j·wd`,
//!   `wd = w0·sqrt(1 - 1/(4Q²))`;
//! - `Q = 1/2` (critically damped): double real pole `-w0`, handled by a
//!   dedicated closed form. The boundary is a removable singularity and a
//!   numeric limit would cancel catastrophically;
//! - `Q < 1/2` (overdamped): two real poles `-sigma ± we`,
//!   `we = w0·sqrt(1/(4Q²) - 1)`.
//!
//! All three regimes reduce to the same products `r·cos`, `r·sin/w`, `r²`
//! (hyperbolic in the overdamped case, polynomial at the boundary), which is
//! what [`pole_products`] computes.
//!
//! # Reference
//!
//! Franklin, Powell, Workman, "Digital Control of Dynamic Systems",
//! discrete equivalents of continuous transfer functions.

use crate::error::{FilterError, ensure_positive};
use crate::filter::Filter;
use crate::real::Real;
use crate::transform::Transform;

/// Derived constants of a biquad recurrence.
///
/// Fully determined by `(Te, w0, Q, transform)`; immutable once derived and
/// owned by the filter instance that derived them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecondOrderCoeffs<F> {
    /// Feedback coefficient on `y[k-1]`.
    pub cy1: F,
    /// Feedback coefficient on `y[k-2]`.
    pub cy2: F,
    /// Feedforward coefficient on `x[k]`.
    pub cx0: F,
    /// Feedforward coefficient on `x[k-1]`.
    pub cx1: F,
    /// Feedforward coefficient on `x[k-2]`.
    pub cx2: F,
}

/// Shared pole geometry for the exact-pole transforms.
///
/// `rc = r·c`, `rsw = r·s/w`, `rr = r²`, where `r = exp(-sigma·Te)` and
/// `(c, s/w)` are `(cos(wd·Te), sin(wd·Te)/wd)` underdamped,
/// `(cosh(we·Te), sinh(we·Te)/we)` overdamped, and the shared limit
/// `(1, Te)` at `Q = 1/2`. In every regime the exact discrete denominator is
/// `1 - 2·rc·z⁻¹ + rr·z⁻²`.
struct PoleProducts<F> {
    rc: F,
    rsw: F,
    rr: F,
}

fn pole_products<F: Real>(te: F, w0: F, q: F) -> PoleProducts<F> {
    let sigma = w0 / (F::TWO * q);
    let r = (-sigma * te).exp();
    if q > F::ONE_HALF {
        let wd = w0 * (F::ONE - F::ONE / (F::FOUR * q * q)).sqrt();
        PoleProducts {
            rc: r * (wd * te).cos(),
            rsw: r * (wd * te).sin() / wd,
            rr: r * r,
        }
    } else if q < F::ONE_HALF {
        let we = w0 * (F::ONE / (F::FOUR * q * q) - F::ONE).sqrt();
        PoleProducts {
            rc: r * (we * te).cosh(),
            rsw: r * (we * te).sinh() / we,
            rr: r * r,
        }
    } else {
        // Critically damped boundary: sin(w·Te)/w → Te as w → 0.
        PoleProducts {
            rc: r,
            rsw: r * te,
            rr: r * r,
        }
    }
}

impl<F: Real> SecondOrderCoeffs<F> {
    /// Derive the biquad coefficients for one transform.
    ///
    /// Fails with [`FilterError::InvalidParameter`] if `te`, `w0`, or `q` is
    /// not strictly positive (NaN included). Closed-form in every case,
    /// including `Q = 1/2` exactly.
    pub fn derive(te: F, w0: F, q: F, transform: Transform) -> Result<Self, FilterError> {
        ensure_positive(te, "Te")?;
        ensure_positive(w0, "w0")?;
        ensure_positive(q, "Q")?;

        if transform == Transform::Bilinear {
            let wt = w0 * te;
            let wt2 = wt * wt;
            let den = F::TWO * wt + F::FOUR * q + q * wt2;
            let cx0 = q * wt2 / den;
            return Ok(Self {
                cy1: F::TWO * q * (F::FOUR - wt2) / den,
                cy2: (F::TWO * wt - F::FOUR * q - q * wt2) / den,
                cx0,
                cx1: F::TWO * cx0,
                cx2: cx0,
            });
        }

        let sigma = w0 / (F::TWO * q);
        let PoleProducts { rc, rsw, rr } = pole_products(te, w0, q);
        let cy1 = F::TWO * rc;
        let cy2 = -rr;

        Ok(match transform {
            Transform::Homographic => {
                // Double Möbius zero at z = -1, unity DC gain.
                let k = (F::ONE - cy1 - cy2) / F::FOUR;
                Self {
                    cy1,
                    cy2,
                    cx0: k,
                    cx1: F::TWO * k,
                    cx2: k,
                }
            }
            Transform::StepMatched => Self {
                cy1,
                cy2,
                cx0: F::ZERO,
                cx1: F::ONE - rc - sigma * rsw,
                cx2: rr - rc + sigma * rsw,
            },
            Transform::ImpulseMatched => Self {
                cy1,
                cy2,
                cx0: F::ZERO,
                cx1: te * w0 * w0 * rsw,
                cx2: F::ZERO,
            },
            Transform::Bilinear => unreachable!("handled above"),
        })
    }

    /// Steady-state gain for a constant input.
    ///
    /// Exactly 1 for all transforms except `ImpulseMatched`, where the
    /// deviation shrinks with `(w0·Te)²`.
    pub fn dc_gain(&self) -> F {
        (self.cx0 + self.cx1 + self.cx2) / (F::ONE - self.cy1 - self.cy2)
    }
}

/// Two-pole recursive low-pass filter (biquad).
///
/// Same lifecycle as [`FirstOrder`](crate::FirstOrder): either fully
/// parameterized at construction or configured explicitly before the first
/// step. The two-deep input/output history is shifted by each step.
///
/// # Example
///
/// ```rust
/// use core::f64::consts::TAU;
/// use lisse_core::{Filter, SecondOrder, Transform};
///
/// let mut lp = SecondOrder::new(0.01, TAU, 0.7, Transform::Bilinear)?;
/// let mut y = 0.0;
/// for _ in 0..400 {
///     y = lp.step(1.0)?;
/// }
/// assert!((y - 1.0).abs() < 1e-3); // settled at unity DC gain
/// # Ok::<(), lisse_core::FilterError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SecondOrder<F> {
    coeffs: Option<SecondOrderCoeffs<F>>,
    x1: F,
    x2: F,
    y1: F,
    y2: F,
}

impl<F: Real> SecondOrder<F> {
    /// Create a filter with coefficients derived immediately.
    pub fn new(te: F, w0: F, q: F, transform: Transform) -> Result<Self, FilterError> {
        Ok(Self {
            coeffs: Some(SecondOrderCoeffs::derive(te, w0, q, transform)?),
            x1: F::ZERO,
            x2: F::ZERO,
            y1: F::ZERO,
            y2: F::ZERO,
        })
    }

    /// Create an empty filter; [`SecondOrder::configure`] must run before
    /// the first step.
    pub fn unconfigured() -> Self {
        Self {
            coeffs: None,
            x1: F::ZERO,
            x2: F::ZERO,
            y1: F::ZERO,
            y2: F::ZERO,
        }
    }

    /// Derive and install new coefficients, clearing the sample history.
    ///
    /// Validation happens before anything is touched: on error the previous
    /// coefficients and state remain exactly as they were.
    pub fn configure(
        &mut self,
        te: F,
        w0: F,
        q: F,
        transform: Transform,
    ) -> Result<(), FilterError> {
        let coeffs = SecondOrderCoeffs::derive(te, w0, q, transform)?;
        self.coeffs = Some(coeffs);
        self.reset();
        Ok(())
    }

    /// The installed coefficient set, if any.
    pub fn coefficients(&self) -> Option<&SecondOrderCoeffs<F>> {
        self.coeffs.as_ref()
    }
}

impl<F: Real> Filter<F> for SecondOrder<F> {
    #[inline]
    fn step(&mut self, input: F) -> Result<F, FilterError> {
        let c = self.coeffs.as_ref().ok_or(FilterError::NotInitialized)?;
        let output = c.cy1 * self.y1 + c.cy2 * self.y2
            + c.cx0 * input
            + c.cx1 * self.x1
            + c.cx2 * self.x2;
        self.y2 = self.y1;
        self.y1 = output;
        self.x2 = self.x1;
        self.x1 = input;
        Ok(output)
    }

    fn reset(&mut self) {
        self.x1 = F::ZERO;
        self.x2 = F::ZERO;
        self.y1 = F::ZERO;
        self.y2 = F::ZERO;
    }

    fn order(&self) -> usize {
        2
    }

    fn is_configured(&self) -> bool {
        self.coeffs.is_some()
    }
}

impl<F: Real> Default for SecondOrder<F> {
    fn default() -> Self {
        Self::unconfigured()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::TAU;

    const TE: f64 = 0.01;

    /// Continuous unit-step response of the prototype, all damping regimes.
    fn continuous_step_response(w0: f64, q: f64, t: f64) -> f64 {
        let sigma = w0 / (2.0 * q);
        if q > 0.5 {
            let wd = w0 * libm::sqrt(1.0 - 1.0 / (4.0 * q * q));
            1.0 - libm::exp(-sigma * t)
                * (libm::cos(wd * t) + sigma / wd * libm::sin(wd * t))
        } else if q < 0.5 {
            let we = w0 * libm::sqrt(1.0 / (4.0 * q * q) - 1.0);
            let s1 = -sigma + we;
            let s2 = -sigma - we;
            1.0 + (s2 * libm::exp(s1 * t) - s1 * libm::exp(s2 * t)) / (s1 - s2)
        } else {
            1.0 - libm::exp(-w0 * t) * (1.0 + w0 * t)
        }
    }

    /// Continuous impulse response of the prototype, all damping regimes.
    fn continuous_impulse_response(w0: f64, q: f64, t: f64) -> f64 {
        let sigma = w0 / (2.0 * q);
        if q > 0.5 {
            let wd = w0 * libm::sqrt(1.0 - 1.0 / (4.0 * q * q));
            w0 * w0 / wd * libm::exp(-sigma * t) * libm::sin(wd * t)
        } else if q < 0.5 {
            let we = w0 * libm::sqrt(1.0 / (4.0 * q * q) - 1.0);
            let s1 = -sigma + we;
            let s2 = -sigma - we;
            w0 * w0 * (libm::exp(s1 * t) - libm::exp(s2 * t)) / (s1 - s2)
        } else {
            w0 * w0 * t * libm::exp(-w0 * t)
        }
    }

    /// Jury stability conditions for `z² - cy1·z - cy2`.
    fn assert_stable(c: &SecondOrderCoeffs<f64>, label: &str) {
        assert!(c.cy2.abs() < 1.0, "{label}: |cy2| = {}", c.cy2.abs());
        assert!(
            c.cy1.abs() < 1.0 - c.cy2,
            "{label}: cy1 = {}, cy2 = {}",
            c.cy1,
            c.cy2
        );
    }

    #[test]
    fn all_transforms_are_stable_across_regimes() {
        for &q in &[0.2, 0.5, 0.7, 2.0, 10.0] {
            for transform in Transform::ALL {
                let c = SecondOrderCoeffs::derive(TE, TAU, q, transform).unwrap();
                assert_stable(&c, transform.name());
            }
        }
    }

    #[test]
    fn dc_gain_is_unity_except_impulse_matched() {
        for &q in &[0.2, 0.5, 0.7, 2.0] {
            for transform in [
                Transform::Bilinear,
                Transform::Homographic,
                Transform::StepMatched,
            ] {
                let c = SecondOrderCoeffs::derive(TE, TAU, q, transform).unwrap();
                assert!(
                    (c.dc_gain() - 1.0).abs() < 1e-12,
                    "{transform} Q={q}: {}",
                    c.dc_gain()
                );
            }
            // Impulse invariance approximates the continuous DC gain with a
            // quadrature error of order (w0·Te)².
            let c = SecondOrderCoeffs::derive(TE, TAU, q, Transform::ImpulseMatched).unwrap();
            let wt = TAU * TE;
            assert!(
                (c.dc_gain() - 1.0).abs() < wt * wt,
                "impulse-matched Q={q}: {}",
                c.dc_gain()
            );
        }
    }

    #[test]
    fn step_matched_equals_sampled_step_response() {
        for &q in &[0.2, 0.5, 0.7, 2.0] {
            let mut lp = SecondOrder::new(TE, TAU, q, Transform::StepMatched).unwrap();
            for k in 0..300 {
                let y = lp.step(1.0).unwrap();
                let expected = continuous_step_response(TAU, q, k as f64 * TE);
                assert!(
                    (y - expected).abs() < 1e-10,
                    "Q={q}, k={k}: got {y}, expected {expected}"
                );
            }
        }
    }

    #[test]
    fn impulse_matched_equals_scaled_impulse_response() {
        for &q in &[0.2, 0.5, 0.7, 2.0] {
            let mut lp = SecondOrder::new(TE, TAU, q, Transform::ImpulseMatched).unwrap();
            for k in 0..300 {
                let x = if k == 0 { 1.0 } else { 0.0 };
                let y = lp.step(x).unwrap();
                let expected = TE * continuous_impulse_response(TAU, q, k as f64 * TE);
                assert!(
                    (y - expected).abs() < 1e-10,
                    "Q={q}, k={k}: got {y}, expected {expected}"
                );
            }
        }
    }

    #[test]
    fn homographic_places_the_pole_pair_exactly() {
        let q = 0.8;
        let c = SecondOrderCoeffs::derive(TE, TAU, q, Transform::Homographic).unwrap();
        let sigma = TAU / (2.0 * q);
        let wd = TAU * libm::sqrt(1.0 - 1.0 / (4.0 * q * q));
        let r = libm::exp(-sigma * TE);
        assert!((c.cy1 - 2.0 * r * libm::cos(wd * TE)).abs() < 1e-14);
        assert!((c.cy2 + r * r).abs() < 1e-14);
    }

    #[test]
    fn critically_damped_boundary_is_finite() {
        for transform in [Transform::StepMatched, Transform::ImpulseMatched] {
            let c = SecondOrderCoeffs::derive(TE, TAU, 0.5, transform).unwrap();
            for v in [c.cy1, c.cy2, c.cx0, c.cx1, c.cx2] {
                assert!(v.is_finite(), "{transform}: {c:?}");
            }
            let mut lp = SecondOrder::new(TE, TAU, 0.5, transform).unwrap();
            for _ in 0..100 {
                assert!(lp.step(1.0).unwrap().is_finite());
            }
        }
    }

    #[test]
    fn coefficients_are_continuous_across_the_damping_boundary() {
        for transform in [
            Transform::Homographic,
            Transform::StepMatched,
            Transform::ImpulseMatched,
        ] {
            let at = SecondOrderCoeffs::derive(TE, TAU, 0.5, transform).unwrap();
            let above = SecondOrderCoeffs::derive(TE, TAU, 0.5 + 1e-9, transform).unwrap();
            let below = SecondOrderCoeffs::derive(TE, TAU, 0.5 - 1e-9, transform).unwrap();
            for (a, b) in [
                (at.cy1, above.cy1),
                (at.cy2, above.cy2),
                (at.cx1, above.cx1),
                (at.cx2, above.cx2),
                (at.cy1, below.cy1),
                (at.cy2, below.cy2),
                (at.cx1, below.cx1),
                (at.cx2, below.cx2),
            ] {
                assert!((a - b).abs() < 1e-7, "{transform}: {a} vs {b}");
            }
        }
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        assert_eq!(
            SecondOrderCoeffs::<f64>::derive(TE, -1.0, 0.7, Transform::Bilinear),
            Err(FilterError::InvalidParameter("w0"))
        );
        assert_eq!(
            SecondOrderCoeffs::<f64>::derive(TE, TAU, 0.0, Transform::Bilinear),
            Err(FilterError::InvalidParameter("Q"))
        );
        let mut lp = SecondOrder::<f64>::unconfigured();
        assert_eq!(lp.step(1.0), Err(FilterError::NotInitialized));
    }

    #[test]
    fn failed_reconfigure_preserves_previous_filter() {
        let mut a = SecondOrder::new(TE, TAU, 0.7, Transform::StepMatched).unwrap();
        let mut b = SecondOrder::new(TE, TAU, 0.7, Transform::StepMatched).unwrap();
        a.step(1.0).unwrap();
        b.step(1.0).unwrap();

        assert!(a.configure(TE, TAU, -2.0, Transform::Bilinear).is_err());

        for _ in 0..50 {
            assert_eq!(a.step(0.5).unwrap(), b.step(0.5).unwrap());
        }
    }
}
