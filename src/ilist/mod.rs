//! Attribute-broadcasting list module.
//!
//! Provides the `IList` container, its append/remove hooks and the
//! capability traits elements implement to take part in broadcasts.

pub mod attributes;
pub mod callbacks;
pub mod list;

// Re-exports for convenience
pub use attributes::{Abs, Attributes};
pub use callbacks::{Callback, Callbacks};
pub use list::IList;

#[cfg(test)]
mod proptests;
