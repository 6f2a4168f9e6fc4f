//! Error types for cursor construction.
//!
//! All errors here are invalid-argument errors raised at construction time
//! (or at the call site for lookahead peek counts). Running out of elements
//! is never an error: exhaustion is reported through
//! [`Cursor::has_current`](crate::Cursor::has_current) returning `false`.

/// Construction-time validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CursorError {
    /// A combining adapter was given fewer upstream cursors than it needs
    /// (zip requires at least two, interleave at least one).
    #[error("at least {required} cursors are required, got {provided}")]
    TooFewCursors { required: usize, provided: usize },

    /// Sliding window size must be at least 1.
    #[error("window size must be at least 1, got {0}")]
    InvalidWindowSize(usize),

    /// Range step must be strictly positive; direction is inferred from the
    /// endpoints, never from the sign of the step.
    #[error("step must be a positive number, got {0}")]
    NonPositiveStep(f64),

    /// Range step may not exceed the absolute difference between the
    /// endpoints.
    #[error("step {step} exceeds the span between {start} and {end}")]
    StepExceedsSpan { start: f64, end: f64, step: f64 },

    /// Lookahead peek counts must be at least 1.
    #[error("peek count must be at least 1")]
    InvalidPeekCount,
}

/// Result type for cursor operations.
pub type CursorResult<T> = Result<T, CursorError>;
