//! Capability traits that elements implement to take part in broadcasts.
//!
//! `Attributes` replaces open-ended attribute lookup: an element answers a
//! name with `Some(value)` or reports that it has no such attribute.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

// =============================================================================
// ATTRIBUTES
// =============================================================================

/// Named-field accessor used by [`IList::get_attribute`](super::IList::get_attribute).
pub trait Attributes {
    /// Type of the attribute values this element exposes.
    type Value;

    /// Returns the attribute called `name`, or `None` if the element has none.
    fn attribute(&self, name: &str) -> Option<Self::Value>;
}

impl<A: Attributes + ?Sized> Attributes for &A {
    type Value = A::Value;

    fn attribute(&self, name: &str) -> Option<Self::Value> {
        (**self).attribute(name)
    }
}

impl<A: Attributes + ?Sized> Attributes for Box<A> {
    type Value = A::Value;

    fn attribute(&self, name: &str) -> Option<Self::Value> {
        (**self).attribute(name)
    }
}

/// JSON objects expose their members; any other JSON value has no attributes.
impl Attributes for serde_json::Value {
    type Value = serde_json::Value;

    fn attribute(&self, name: &str) -> Option<Self::Value> {
        self.as_object()?.get(name).cloned()
    }
}

impl<V: Clone, S: BuildHasher> Attributes for HashMap<String, V, S> {
    type Value = V;

    fn attribute(&self, name: &str) -> Option<V> {
        self.get(name).cloned()
    }
}

impl<V: Clone> Attributes for BTreeMap<String, V> {
    type Value = V;

    fn attribute(&self, name: &str) -> Option<V> {
        self.get(name).cloned()
    }
}

/// Implements [`Attributes`] for a struct.
///
/// Either list fields to expose by name (values are cloned):
///
/// ```rust
/// use ilist::{impl_attributes, Attributes};
///
/// struct Point { x: f64, y: f64 }
/// impl_attributes!(Point => f64 { x, y });
///
/// assert_eq!(Point { x: 1.0, y: 2.0 }.attribute("y"), Some(2.0));
/// ```
///
/// or map attribute names to getters:
///
/// ```rust
/// use ilist::{impl_attributes, Attributes};
///
/// struct Complex { re: f64, im: f64 }
/// impl_attributes!(Complex => f64 { real: |c| c.re, imag: |c| c.im });
///
/// assert_eq!(Complex { re: 3.0, im: 4.0 }.attribute("real"), Some(3.0));
/// assert_eq!(Complex { re: 3.0, im: 4.0 }.attribute("re"), None);
/// ```
#[macro_export]
macro_rules! impl_attributes {
    ($ty:ty => $value:ty { $( $field:ident ),+ $(,)? }) => {
        impl $crate::Attributes for $ty {
            type Value = $value;

            fn attribute(&self, name: &str) -> Option<$value> {
                match name {
                    $( stringify!($field) => Some(::std::clone::Clone::clone(&self.$field)), )+
                    _ => None,
                }
            }
        }
    };
    ($ty:ty => $value:ty { $( $name:ident : $getter:expr ),+ $(,)? }) => {
        impl $crate::Attributes for $ty {
            type Value = $value;

            fn attribute(&self, name: &str) -> Option<$value> {
                match name {
                    $( stringify!($name) => {
                        let getter: fn(&$ty) -> $value = $getter;
                        Some(getter(self))
                    } )+
                    _ => None,
                }
            }
        }
    };
}

// =============================================================================
// ABS
// =============================================================================

/// Magnitude of an element, used by [`IList::abs`](super::IList::abs).
pub trait Abs {
    type Output;

    fn abs(&self) -> Self::Output;
}

// Unsigned output so `MIN` does not overflow.
macro_rules! impl_abs_signed {
    ($($int:ty => $uint:ty),+) => {
        $(
            impl Abs for $int {
                type Output = $uint;

                fn abs(&self) -> $uint {
                    self.unsigned_abs()
                }
            }
        )+
    };
}

impl_abs_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);

impl Abs for f32 {
    type Output = f32;

    fn abs(&self) -> f32 {
        f32::abs(*self)
    }
}

impl Abs for f64 {
    type Output = f64;

    fn abs(&self) -> f64 {
        f64::abs(*self)
    }
}
