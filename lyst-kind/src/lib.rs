//! Primitive building blocks for the lyst sequence algebra: element
//! descriptors, descriptor equality, sequence length and dense index
//! ranges.
mod kind;
mod length;
mod range;

pub use kind::{equals, Descriptor, Kind};
pub use length::{length, Length};
pub use range::{index_range, IndexRange};
