/// A sequence is an immutable ordered list of element descriptors. All
/// operations derive new sequences; none alter their input.
mod core;
mod ends;
mod removal;
mod search;
mod structure;
mod traits;
mod variant;

pub use self::core::Lyst;
pub use traits::LystCore;
pub use variant::{Empty, Many, One};
