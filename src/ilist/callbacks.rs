//! Append and remove hooks for an `IList`.

use std::fmt;
use std::sync::Arc;

use super::list::IList;

/// Hook signature: receives the list after the mutation and the element concerned.
pub type Callback<T> = Arc<dyn Fn(&IList<T>, &T) + Send + Sync>;

/// Optional hooks run after `append`/`insert` and after removals.
///
/// Cloning shares the underlying closures.
pub struct Callbacks<T> {
    pub(crate) on_append: Option<Callback<T>>,
    pub(crate) on_remove: Option<Callback<T>>,
}

impl<T> Callbacks<T> {
    /// Creates an empty set of hooks.
    pub fn new() -> Self {
        Self {
            on_append: None,
            on_remove: None,
        }
    }

    /// Builder: Set the append hook.
    pub fn on_append<F>(mut self, f: F) -> Self
    where
        F: Fn(&IList<T>, &T) + Send + Sync + 'static,
    {
        self.on_append = Some(Arc::new(f));
        self
    }

    /// Builder: Set the remove hook.
    pub fn on_remove<F>(mut self, f: F) -> Self
    where
        F: Fn(&IList<T>, &T) + Send + Sync + 'static,
    {
        self.on_remove = Some(Arc::new(f));
        self
    }

    /// Returns true if neither hook is set.
    pub fn is_empty(&self) -> bool {
        self.on_append.is_none() && self.on_remove.is_none()
    }
}

impl<T> Default for Callbacks<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Callbacks<T> {
    fn clone(&self) -> Self {
        Self {
            on_append: self.on_append.clone(),
            on_remove: self.on_remove.clone(),
        }
    }
}

impl<T> fmt::Debug for Callbacks<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_append", &self.on_append.is_some())
            .field("on_remove", &self.on_remove.is_some())
            .finish()
    }
}
