//! Capability traits consumed by the sequence operations.
//!
//! Each operation is written against one of these traits rather than against
//! closures directly. Plain functions are lifted into a capability through
//! the adapters in [`crate::adapter`], and `&C` / `Box<C>` forward to `C` so
//! trait objects work too:
//!
//! ```
//! use pseudo_enumerable::{filter, Predicate};
//!
//! struct Even;
//!
//! impl Predicate<i32> for Even {
//!     fn is_matching(&self, item: &i32) -> bool {
//!         item % 2 == 0
//!     }
//! }
//!
//! let boxed: Box<dyn Predicate<i32>> = Box::new(Even);
//! let evens: Vec<i32> = filter(Some(1..=6), Some(boxed)).unwrap().collect();
//! assert_eq!(evens, vec![2, 4, 6]);
//! ```

use std::cmp::Ordering;

/// Decides whether an element belongs in a filtered sequence.
///
/// Implementations are expected to be pure. [`crate::filter`] calls
/// `is_matching` once per element, in iteration order.
pub trait Predicate<T> {
    /// Returns `true` if `item` should be kept.
    fn is_matching(&self, item: &T) -> bool;
}

/// Maps an element to a new value.
///
/// The output type is associated rather than generic so a lazily transformed
/// sequence has exactly one item type.
pub trait Transformer<T> {
    /// The produced value type.
    type Output;

    /// Maps `item` to its output value.
    fn transform(&self, item: T) -> Self::Output;
}

/// Defines a total order over `T`.
///
/// Implementations must be consistent (transitive and antisymmetric). This is
/// not checked.
pub trait Comparer<T> {
    /// Compares two elements.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, P: Predicate<T> + ?Sized> Predicate<T> for &P {
    fn is_matching(&self, item: &T) -> bool {
        (**self).is_matching(item)
    }
}

impl<T, P: Predicate<T> + ?Sized> Predicate<T> for Box<P> {
    fn is_matching(&self, item: &T) -> bool {
        (**self).is_matching(item)
    }
}

impl<T, M: Transformer<T> + ?Sized> Transformer<T> for &M {
    type Output = M::Output;

    fn transform(&self, item: T) -> Self::Output {
        (**self).transform(item)
    }
}

impl<T, M: Transformer<T> + ?Sized> Transformer<T> for Box<M> {
    type Output = M::Output;

    fn transform(&self, item: T) -> Self::Output {
        (**self).transform(item)
    }
}

impl<T, C: Comparer<T> + ?Sized> Comparer<T> for &C {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }
}

impl<T, C: Comparer<T> + ?Sized> Comparer<T> for Box<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }
}
