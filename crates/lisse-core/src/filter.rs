//! The `Filter` trait: the seam shared by every recursive low-pass here.
//!
//! Mirrors the sample-by-sample contract of the concrete types so callers can
//! hold `dyn Filter<F>` or stay generic. Batch application is defined as
//! repeated sequential stepping with state carried forward; each output
//! depends on the previous ones, so there is nothing to parallelize.

use crate::error::FilterError;
use crate::real::Real;

/// A discrete-time filter applied one scalar sample at a time.
///
/// Stepping before configuration fails with
/// [`FilterError::NotInitialized`]; all other methods are infallible.
/// Implementations hold no shared state, so distinct instances may be used
/// freely from distinct threads.
pub trait Filter<F: Real> {
    /// Advance the recurrence by one sample and return the output.
    fn step(&mut self, input: F) -> Result<F, FilterError>;

    /// Filter `input` into `output`, one sequential `step` per sample.
    ///
    /// Order-preserving and exactly equivalent to calling [`Filter::step`] in
    /// a loop. The default implementation does just that.
    ///
    /// # Panics
    /// Default implementation panics in debug builds if the slices differ in
    /// length.
    fn step_batch(&mut self, input: &[F], output: &mut [F]) -> Result<(), FilterError> {
        debug_assert_eq!(
            input.len(),
            output.len(),
            "input and output must have the same length"
        );
        for (x, y) in input.iter().zip(output.iter_mut()) {
            *y = self.step(*x)?;
        }
        Ok(())
    }

    /// Filter a buffer in place.
    fn step_batch_inplace(&mut self, buffer: &mut [F]) -> Result<(), FilterError> {
        for sample in buffer.iter_mut() {
            *sample = self.step(*sample)?;
        }
        Ok(())
    }

    /// Clear the sample history without touching the coefficients.
    fn reset(&mut self);

    /// Depth of the recurrence history (1 for one pole, 2 for a biquad).
    fn order(&self) -> usize;

    /// `true` once coefficients have been derived and stepping will succeed.
    fn is_configured(&self) -> bool;
}
