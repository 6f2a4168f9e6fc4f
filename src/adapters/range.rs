//! Arithmetic sequence generation.

use crate::cursor::Cursor;
use crate::error::{CursorError, CursorResult};

/// An ascending or descending arithmetic sequence over `f64`.
///
/// The step must be strictly positive; direction is inferred from the
/// endpoints (descending when `start > end`) and the stored step is negated
/// accordingly. `end` is included when the accumulator lands on it exactly.
/// Keys are the 0-based step index.
///
/// # Examples
///
/// ```
/// use fastforward::{CursorExt, Range};
///
/// let ascending: Vec<f64> = Range::new(0.0, 5.0, 1.5).unwrap().values().collect();
/// assert_eq!(ascending, vec![0.0, 1.5, 3.0, 4.5]);
///
/// let descending: Vec<f64> = Range::new(5.0, 0.0, 1.5).unwrap().values().collect();
/// assert_eq!(descending, vec![5.0, 3.5, 2.0, 0.5]);
/// ```
#[derive(Debug)]
pub struct Range {
    start: f64,
    end: f64,
    step: f64,
    current: f64,
    index: usize,
}

impl Range {
    /// Build a range from `start` to `end` with the given positive step.
    ///
    /// Fails when the step is non-positive or exceeds the absolute
    /// difference between the endpoints.
    pub fn new(start: f64, end: f64, step: f64) -> CursorResult<Self> {
        if step <= 0.0 {
            return Err(CursorError::NonPositiveStep(step));
        }
        if step > (end - start).abs() {
            return Err(CursorError::StepExceedsSpan { start, end, step });
        }
        let step = if start > end { -step } else { step };
        Ok(Range {
            start,
            end,
            step,
            current: start,
            index: 0,
        })
    }

    /// Number of elements the range produces, or 0 when the stored
    /// direction disagrees with the relative order of the endpoints.
    pub fn count(&self) -> usize {
        if (self.step > 0.0 && self.end < self.start)
            || (self.step < 0.0 && self.end > self.start)
        {
            return 0;
        }
        ((self.end - self.start).abs() / self.step.abs()).floor() as usize + 1
    }

    fn valid(&self) -> bool {
        if self.step > 0.0 {
            self.current <= self.end
        } else {
            self.current >= self.end
        }
    }
}

impl Cursor for Range {
    type Key = usize;
    type Item = f64;

    fn reset(&mut self) {
        self.current = self.start;
        self.index = 0;
    }

    fn has_current(&mut self) -> bool {
        self.valid()
    }

    fn key(&mut self) -> Option<usize> {
        self.valid().then_some(self.index)
    }

    fn current(&mut self) -> Option<f64> {
        self.valid().then_some(self.current)
    }

    fn advance(&mut self) {
        if self.valid() {
            self.current += self.step;
            self.index += 1;
        }
    }
}
