//! Adapters lifting plain functions into capability objects.
//!
//! The `_fn` operations wrap their function argument in one of these and
//! delegate to the capability-based operation, so both paths share a single
//! validation and iteration implementation.

use std::cmp::Ordering;
use std::fmt;

use crate::traits::{Comparer, Predicate, Transformer};

/// A [`Predicate`] backed by a function `Fn(&T) -> bool`.
#[derive(Clone, Copy)]
pub struct FnPredicate<F> {
    predicate: F,
}

impl<F> FnPredicate<F> {
    /// Wraps a function.
    pub fn new(predicate: F) -> Self {
        FnPredicate { predicate }
    }
}

impl<T, F> Predicate<T> for FnPredicate<F>
where
    F: Fn(&T) -> bool,
{
    fn is_matching(&self, item: &T) -> bool {
        (self.predicate)(item)
    }
}

impl<F> fmt::Debug for FnPredicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnPredicate").finish_non_exhaustive()
    }
}

/// A [`Transformer`] backed by a function `Fn(T) -> R`.
#[derive(Clone, Copy)]
pub struct FnTransformer<F> {
    mapper: F,
}

impl<F> FnTransformer<F> {
    /// Wraps a function.
    pub fn new(mapper: F) -> Self {
        FnTransformer { mapper }
    }
}

impl<T, R, F> Transformer<T> for FnTransformer<F>
where
    F: Fn(T) -> R,
{
    type Output = R;

    fn transform(&self, item: T) -> R {
        (self.mapper)(item)
    }
}

impl<F> fmt::Debug for FnTransformer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTransformer").finish_non_exhaustive()
    }
}

/// A [`Comparer`] backed by a function `Fn(&T, &T) -> Ordering`.
#[derive(Clone, Copy)]
pub struct FnComparer<F> {
    comparer: F,
}

impl<F> FnComparer<F> {
    /// Wraps a function.
    pub fn new(comparer: F) -> Self {
        FnComparer { comparer }
    }
}

impl<T, F> Comparer<T> for FnComparer<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.comparer)(a, b)
    }
}

impl<F> fmt::Debug for FnComparer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnComparer").finish_non_exhaustive()
    }
}
