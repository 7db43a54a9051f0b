//! An algebra over immutable sequences of element descriptors.
//!
//! Sequences support positional access, insertion and removal at both
//! ends, concatenation, reversal, search, replacement, filtering and
//! mapping. Every operation is pure: it returns a new [`Lyst`] and leaves
//! its input untouched, so sequences can be shared freely between threads.
//!
//! ```
//! use lyst::{lyst, Kind};
//!
//! let list = lyst![i32, f32, f64, bool];
//! let trimmed = list.pop_front().pop_back();
//! assert_eq!(trimmed, lyst![f32, f64]);
//! assert_eq!(list.at(2), Ok(&Kind::of::<f64>()));
//! ```
pub mod error;
mod macros;
mod sentinel;
mod sequence;

pub use error::{Error, Result};
pub use lyst_kind::{equals, index_range, length, Descriptor, IndexRange, Kind, Length};
pub use sentinel::{is_not_null, is_null, Null, Tombstone};
pub use sequence::{Empty, Lyst, LystCore, Many, One};
