//! Collection types: sequences and maps.
//!
//! Both collections have *shared reference* semantics: cloning a collection
//! clones the handle, not the contents. A collection can therefore contain
//! itself, and equality is identity (same allocation), which is what the
//! serializer's cycle detection keys on.

pub mod map;
pub mod sequence;

pub use map::Map;
pub use sequence::Sequence;
