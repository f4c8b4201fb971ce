//! Discretization methods mapping continuous prototypes to recurrences.
//!
//! A recursive low-pass is synthesized in two stages: pick a [`Transform`],
//! then let the filter of the desired order derive its coefficients from the
//! continuous parameters. The transform choice is orthogonal to the order.
//! Every method below is defined for both supported orders, and the actual
//! formula dispatch lives in [`FirstOrderCoeffs::derive`] and
//! [`SecondOrderCoeffs::derive`].
//!
//! [`FirstOrderCoeffs::derive`]: crate::FirstOrderCoeffs::derive
//! [`SecondOrderCoeffs::derive`]: crate::SecondOrderCoeffs::derive

/// Discrete-time approximation used when deriving recursive coefficients
/// from a continuous-time prototype.
///
/// All four methods yield a stable recurrence for any valid parameters; they
/// differ in which property of the continuous filter is preserved exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Transform {
    /// Tustin substitution `s = (2/Te)(1 - z⁻¹)/(1 + z⁻¹)`.
    ///
    /// The frequency axis is warped, so the effective cutoff lands slightly
    /// below the requested one (by a factor `tan(w·Te/2)/(w·Te/2)`). No
    /// correction is applied here; callers needing an exact analog-matched
    /// cutoff should pre-warp the continuous parameter.
    #[default]
    Bilinear,
    /// Möbius mapping `s = c·(1 - z⁻¹)/(1 + z⁻¹)` with the free constant `c`
    /// pinned so the discrete poles equal `exp(s_pole·Te)` exactly.
    ///
    /// Generalizes the bilinear substitution: same zero at `z = -1`, but the
    /// pole placement is exact rather than warped.
    Homographic,
    /// Step-invariant (zero-order-hold) discretization: the response to a
    /// discrete unit step equals the continuous step response sampled at
    /// multiples of `Te`.
    StepMatched,
    /// Impulse-invariant discretization: the discrete impulse response at
    /// sample `k` equals `Te` times the continuous impulse response at
    /// `k·Te`.
    ///
    /// DC gain is `1` only in the limit `Te → 0`; the deviation shrinks
    /// linearly with the sampling period.
    ImpulseMatched,
}

impl Transform {
    /// All four methods, in declaration order. Handy for exhaustive tests.
    pub const ALL: [Transform; 4] = [
        Transform::Bilinear,
        Transform::Homographic,
        Transform::StepMatched,
        Transform::ImpulseMatched,
    ];

    /// Stable lowercase name, matching the CLI spelling.
    pub fn name(self) -> &'static str {
        match self {
            Transform::Bilinear => "bilinear",
            Transform::Homographic => "homographic",
            Transform::StepMatched => "step-matched",
            Transform::ImpulseMatched => "impulse-matched",
        }
    }
}

impl core::fmt::Display for Transform {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_distinct() {
        for (i, a) in Transform::ALL.iter().enumerate() {
            for b in &Transform::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn default_is_bilinear() {
        assert_eq!(Transform::default(), Transform::Bilinear);
    }
}
