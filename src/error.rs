//! Error types for list operations and attribute broadcasts.

use thiserror::Error;

/// Result type alias for list operations.
pub type IListResult<T> = Result<T, IListError>;

/// Errors that can occur while reading, mutating or broadcasting over an `IList`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IListError {
    /// Index out of bounds for indexed access, assignment or removal.
    #[error("Index {index} out of range for list of length {length}")]
    IndexOutOfRange { index: usize, length: usize },

    /// Value passed to `remove` is not in the list.
    #[error("Value not found in list")]
    NotFound,

    /// An element has no attribute with the requested name.
    #[error("Element at index {index} has no attribute '{name}'")]
    AttributeMissing { index: usize, name: String },
}

impl IListError {
    /// Creates an IndexOutOfRange error.
    pub fn index_out_of_range(index: usize, length: usize) -> Self {
        Self::IndexOutOfRange { index, length }
    }

    /// Creates an AttributeMissing error.
    pub fn attribute_missing(index: usize, name: impl Into<String>) -> Self {
        Self::AttributeMissing {
            index,
            name: name.into(),
        }
    }
}
