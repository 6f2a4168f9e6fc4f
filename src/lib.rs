//! fastforward - composable sequence cursors
//!
//! A library of lazy, composable sequence adapters built on one uniform
//! pull protocol, [`Cursor`]: wrap any collection or one-shot producer in a
//! cursor, then chain, zip, interleave, chunk, group, window, dedupe, peek
//! or replay it. Nothing is materialized eagerly unless the transformation
//! inherently requires it (keyed grouping, replay caches).
//!
//! ```
//! use fastforward::{from_iter, CursorExt};
//!
//! let windows: Vec<Vec<i32>> = from_iter(vec![1, 2, 3, 4, 5])
//!     .windowed(3)
//!     .unwrap()
//!     .values()
//!     .collect();
//! assert_eq!(windows, vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]);
//! ```

pub mod adapters;
pub mod cursor;
pub mod cursor_ext;
pub mod error;
pub mod source;

// Re-export the whole public surface at the crate root
pub use adapters::*;
pub use cursor::{BoxCursor, Cursor, Pairs, Values};
pub use cursor_ext::CursorExt;
pub use error::{CursorError, CursorResult};
pub use source::{
    emit, empty, from_fn, from_iter, from_pairs, FnCursor, IntoCursor, PairsCursor, SeqCursor,
};
