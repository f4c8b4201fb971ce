//! Bound-reference stepping: filter through caller-owned storage.
//!
//! A [`Bound`] wrapper ties a filter to a read source and a write sink held
//! as [`Cell`] references, so `step()` takes no argument: it reads the
//! source, advances the filter, and writes the sink. Binding both ends to
//! the same cell filters that value in place; the shared-aliasing case is
//! exactly what `Cell` exists for. The caller keeps ownership of the storage
//! for the wrapper's whole lifetime.
//!
//! This is a convenience over [`Filter::step`], not a behavioral change: the
//! inner filter is reachable through [`Bound::filter_mut`] and recoverable
//! with [`Bound::into_inner`].

use core::cell::Cell;

use crate::error::FilterError;
use crate::filter::Filter;
use crate::real::Real;

/// A filter bound to external input/output storage.
///
/// # Example
///
/// ```rust
/// use core::cell::Cell;
/// use lisse_core::{Bound, FirstOrder, Transform};
///
/// let measurement = Cell::new(0.0_f64);
/// let lp = FirstOrder::new(0.01, 0.1, Transform::StepMatched)?;
/// let mut bound = Bound::in_place(lp, &measurement);
///
/// measurement.set(1.0);
/// bound.step()?;
/// assert!(measurement.get() < 1.0); // smoothed in place
/// # Ok::<(), lisse_core::FilterError>(())
/// ```
pub struct Bound<'a, F, T> {
    filter: T,
    source: &'a Cell<F>,
    sink: &'a Cell<F>,
}

impl<'a, F: Real, T: Filter<F>> Bound<'a, F, T> {
    /// Bind `filter` to distinct read and write locations.
    pub fn new(filter: T, source: &'a Cell<F>, sink: &'a Cell<F>) -> Self {
        Self {
            filter,
            source,
            sink,
        }
    }

    /// Bind both ends to the same location: each step filters it in place.
    pub fn in_place(filter: T, io: &'a Cell<F>) -> Self {
        Self::new(filter, io, io)
    }

    /// Read the source, advance the filter, write the sink.
    ///
    /// Returns the output as well, and propagates the inner filter's errors
    /// unchanged; the sink is left untouched on error.
    pub fn step(&mut self) -> Result<F, FilterError> {
        let output = self.filter.step(self.source.get())?;
        self.sink.set(output);
        Ok(output)
    }

    /// Shared access to the inner filter.
    pub fn filter(&self) -> &T {
        &self.filter
    }

    /// Mutable access to the inner filter (for reset or reconfiguration).
    pub fn filter_mut(&mut self) -> &mut T {
        &mut self.filter
    }

    /// Unbind, returning the inner filter.
    pub fn into_inner(self) -> T {
        self.filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::first_order::FirstOrder;
    use crate::transform::Transform;

    #[test]
    fn bound_step_matches_plain_step() {
        let source = Cell::new(0.0_f64);
        let sink = Cell::new(0.0_f64);
        let mut plain = FirstOrder::new(0.01, 0.1, Transform::Bilinear).unwrap();
        let mut bound = Bound::new(
            FirstOrder::new(0.01, 0.1, Transform::Bilinear).unwrap(),
            &source,
            &sink,
        );

        for k in 0..100 {
            let x = f64::from(k % 7) * 0.1;
            source.set(x);
            let y = bound.step().unwrap();
            assert_eq!(y, plain.step(x).unwrap());
            assert_eq!(sink.get(), y);
        }
    }

    #[test]
    fn in_place_filters_the_shared_cell() {
        let io = Cell::new(1.0_f64);
        let mut reference = FirstOrder::new(0.01, 0.1, Transform::StepMatched).unwrap();
        let mut bound = Bound::in_place(
            FirstOrder::new(0.01, 0.1, Transform::StepMatched).unwrap(),
            &io,
        );

        // The bound filter reads the previous output as its next input.
        let mut value = 1.0;
        for _ in 0..20 {
            bound.step().unwrap();
            value = reference.step(value).unwrap();
            assert_eq!(io.get(), value);
        }
    }

    #[test]
    fn unconfigured_filter_leaves_sink_untouched() {
        let source = Cell::new(1.0_f64);
        let sink = Cell::new(42.0_f64);
        let mut bound = Bound::new(FirstOrder::<f64>::unconfigured(), &source, &sink);
        assert_eq!(bound.step(), Err(FilterError::NotInitialized));
        assert_eq!(sink.get(), 42.0);

        bound
            .filter_mut()
            .configure(0.01, 0.1, Transform::Bilinear)
            .unwrap();
        assert!(bound.step().is_ok());
    }
}
