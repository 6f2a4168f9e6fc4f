//! The adapter suite. Each adapter wraps one or more upstream cursors and
//! exposes a transformed view through the same [`Cursor`](crate::Cursor)
//! protocol; composition is nesting.

pub mod chain;
pub mod chunk;
pub mod consecutive;
pub mod group_by;
pub mod interleave;
pub mod lookahead;
pub mod range;
pub mod repeat;
pub mod replay;
pub mod transform;
pub mod unique;
pub mod window;
pub mod zip;

pub use chain::{chain, Chain};
pub use chunk::Chunk;
pub use consecutive::ConsecutiveGroups;
pub use group_by::GroupBy;
pub use interleave::{interleave, Interleave};
pub use lookahead::Lookahead;
pub use range::Range;
pub use repeat::{CycleCursor, Repeatable};
pub use replay::{CachedSource, Rewindable};
pub use transform::Transform;
pub use unique::Unique;
pub use window::SlidingWindow;
pub use zip::{zip, Zip};
