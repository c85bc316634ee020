//! ilist - An "intelligent" list that broadcasts attribute reads across its elements.
//!
//! An `IList` behaves like an ordinary ordered, mutable sequence. In addition,
//! asking it for an attribute returns the list of that attribute's value from
//! every element:
//!
//! - **Attribute broadcast**: `get_attribute(name)` reads `name` from each
//!   element through the [`Attributes`] trait; one missing attribute fails the
//!   whole read
//! - **Selector broadcast**: `map()`, `try_map()`, `call_each()` and `abs()`
//! - **Hooks**: optional `on_append`/`on_remove` callbacks, see [`Callbacks`]
//!
//! # Example
//!
//! ```rust
//! use ilist::{impl_attributes, Callbacks, IList};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Complex { re: f64, im: f64 }
//! impl_attributes!(Complex => f64 { real: |c| c.re, imag: |c| c.im });
//!
//! let mut l = IList::from(vec![Complex { re: 3.0, im: 4.0 }, Complex { re: 6.0, im: 0.0 }]);
//! assert_eq!(l.get_attribute("real").unwrap(), [3.0, 6.0]);
//! assert_eq!(l.get_attribute("imag").unwrap(), [4.0, 0.0]);
//!
//! l.append(Complex { re: 1.0, im: 1.0 });
//! assert_eq!(l.get_attribute("real").unwrap(), [3.0, 6.0, 1.0]);
//! assert!(l.get_attribute("phase").is_err());
//!
//! // Hooks run after the mutation and see the updated list
//! let mut counted = IList::with_callbacks(
//!     vec![1, 2],
//!     Callbacks::new().on_append(|list: &IList<i32>, _: &i32| assert!(!list.is_empty())),
//! );
//! counted.append(3);
//! ```

pub mod error;

// List module
pub mod ilist;

// Re-exports for convenience
pub use error::{IListError, IListResult};
pub use ilist::{Abs, Attributes, Callback, Callbacks, IList};
