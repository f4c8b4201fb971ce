//! Error types for filter configuration and stepping.

use crate::real::Real;

/// Errors surfaced by coefficient derivation and the step operations.
///
/// Every error is detected synchronously at the call that violates the
/// precondition and returned to the immediate caller. The core never logs,
/// retries, or substitutes default values; recovery (for example re-deriving
/// with corrected parameters) belongs entirely to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterError {
    /// A continuous-domain parameter was zero, negative, or NaN.
    /// The payload names the offending parameter.
    InvalidParameter(&'static str),
    /// A step operation was invoked before any coefficients were derived.
    NotInitialized,
    /// No coefficient formula exists for the requested order/transform pair.
    ///
    /// Reserved for future filter orders. All four transforms are defined for
    /// both supported orders, so this variant is currently unreachable.
    UnsupportedCombination,
}

impl core::fmt::Display for FilterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidParameter(name) => {
                write!(f, "parameter {name} must be strictly positive")
            }
            Self::NotInitialized => write!(f, "filter stepped before being configured"),
            Self::UnsupportedCombination => {
                write!(f, "no coefficient formula for this order/transform pair")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FilterError {}

/// Reject non-positive, infinite, and NaN continuous parameters.
///
/// NaN fails the `>` comparison, so it is caught by the same check; an
/// infinite parameter would silently degenerate the recurrence instead of
/// failing later, so it is rejected here too.
pub(crate) fn ensure_positive<F: Real>(value: F, name: &'static str) -> Result<(), FilterError> {
    if value > F::ZERO && value.is_finite() {
        Ok(())
    } else {
        Err(FilterError::InvalidParameter(name))
    }
}
