//! The sequence operations and the iterators they return.
//!
//! [`filter`] and [`transform`] are lazy: they validate their arguments
//! immediately, then do no work until the returned iterator is pulled.
//! [`sort_by`] is eager and buffers the whole source.
//!
//! Arguments are taken as `Option` so a missing source or capability is
//! reported as [`SequenceError::InvalidArgument`] instead of being
//! unrepresentable. The [`SequenceExt`](crate::SequenceExt) methods skip
//! this for callers that always have both values.
//!
//! Results are as restartable as their source. A filter over a `Vec` consumes
//! the `Vec`; a filter over `&vec` or a `Clone` iterator can be rebuilt or
//! cloned and run again.

use std::cmp::Ordering;
use std::iter::FusedIterator;

use crate::adapter::{FnComparer, FnPredicate, FnTransformer};
use crate::error::{Result, SequenceError};
use crate::traits::{Comparer, Predicate, Transformer};

fn require<T>(value: Option<T>, argument: &'static str) -> Result<T> {
    value.ok_or_else(|| SequenceError::missing(argument))
}

// ============================================================================
// Filter
// ============================================================================

/// Lazy iterator over the elements that match a [`Predicate`].
///
/// Created by [`filter`], [`filter_fn`] and
/// [`SequenceExt::filter_by`](crate::SequenceExt::filter_by).
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Filter<I, P> {
    iter: I,
    predicate: P,
}

impl<I, P> Filter<I, P> {
    pub(crate) fn new(iter: I, predicate: P) -> Self {
        Filter { iter, predicate }
    }
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: Predicate<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let predicate = &self.predicate;
        self.iter.find(|item| predicate.is_matching(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}

impl<I, P> FusedIterator for Filter<I, P>
where
    I: FusedIterator,
    P: Predicate<I::Item>,
{
}

/// Keeps the elements of `source` for which `predicate` matches.
///
/// Both arguments are checked before anything else happens; the returned
/// iterator then pulls from `source` one element at a time, calling the
/// predicate once per element in order.
///
/// # Errors
///
/// [`SequenceError::InvalidArgument`] naming `source` or `predicate` if
/// either is `None`. `source` is checked first.
pub fn filter<S, P>(source: Option<S>, predicate: Option<P>) -> Result<Filter<S::IntoIter, P>>
where
    S: IntoIterator,
    P: Predicate<S::Item>,
{
    let source = require(source, "source")?;
    let predicate = require(predicate, "predicate")?;
    Ok(Filter::new(source.into_iter(), predicate))
}

/// [`filter`] taking a plain function.
///
/// # Errors
///
/// Same as [`filter`].
pub fn filter_fn<S, F>(
    source: Option<S>,
    predicate: Option<F>,
) -> Result<Filter<S::IntoIter, FnPredicate<F>>>
where
    S: IntoIterator,
    F: Fn(&S::Item) -> bool,
{
    filter(source, predicate.map(FnPredicate::new))
}

// ============================================================================
// Transform
// ============================================================================

/// Lazy iterator applying a [`Transformer`] to every element.
///
/// Created by [`transform`], [`transform_fn`] and
/// [`SequenceExt::transform_with`](crate::SequenceExt::transform_with).
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Transform<I, M> {
    iter: I,
    mapper: M,
}

impl<I, M> Transform<I, M> {
    pub(crate) fn new(iter: I, mapper: M) -> Self {
        Transform { iter, mapper }
    }
}

impl<I, M> Iterator for Transform<I, M>
where
    I: Iterator,
    M: Transformer<I::Item>,
{
    type Item = M::Output;

    fn next(&mut self) -> Option<M::Output> {
        let item = self.iter.next()?;
        Some(self.mapper.transform(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, M> ExactSizeIterator for Transform<I, M>
where
    I: ExactSizeIterator,
    M: Transformer<I::Item>,
{
}

impl<I, M> FusedIterator for Transform<I, M>
where
    I: FusedIterator,
    M: Transformer<I::Item>,
{
}

/// Maps every element of `source` through `mapper`.
///
/// The result has the same length as `source`. The mapper runs once per
/// element, in order, as the consumer pulls.
///
/// # Errors
///
/// [`SequenceError::InvalidArgument`] naming `source` or `mapper` if either
/// is `None`. `source` is checked first.
pub fn transform<S, M>(source: Option<S>, mapper: Option<M>) -> Result<Transform<S::IntoIter, M>>
where
    S: IntoIterator,
    M: Transformer<S::Item>,
{
    let source = require(source, "source")?;
    let mapper = require(mapper, "mapper")?;
    Ok(Transform::new(source.into_iter(), mapper))
}

/// [`transform`] taking a plain function.
///
/// # Errors
///
/// Same as [`transform`].
pub fn transform_fn<S, F, R>(
    source: Option<S>,
    mapper: Option<F>,
) -> Result<Transform<S::IntoIter, FnTransformer<F>>>
where
    S: IntoIterator,
    F: Fn(S::Item) -> R,
{
    transform(source, mapper.map(FnTransformer::new))
}

// ============================================================================
// Sort
// ============================================================================

/// A fully materialized, ordered sequence.
///
/// Created by [`sort_by`], [`sort_by_fn`] and
/// [`SequenceExt::sorted_by`](crate::SequenceExt::sorted_by). Iterates the
/// buffered elements by value and owns the buffer until dropped.
#[derive(Debug, Clone)]
pub struct Sorted<T> {
    items: std::vec::IntoIter<T>,
}

impl<T> Sorted<T> {
    pub(crate) fn from_iter_with<I, C>(iter: I, comparer: C) -> Self
    where
        I: IntoIterator<Item = T>,
        C: Comparer<T>,
    {
        let mut buffer: Vec<T> = iter.into_iter().collect();

        #[cfg(feature = "tracing")]
        tracing::trace!(len = buffer.len(), "materialized sequence for sort");

        buffer.sort_unstable_by(|a, b| comparer.compare(a, b));
        Sorted {
            items: buffer.into_iter(),
        }
    }

    /// Returns the elements not yet yielded, in order.
    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }

    /// Returns the elements not yet yielded as a `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.items.collect()
    }
}

impl<T> Iterator for Sorted<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<T> DoubleEndedIterator for Sorted<T> {
    fn next_back(&mut self) -> Option<T> {
        self.items.next_back()
    }
}

impl<T> ExactSizeIterator for Sorted<T> {}

impl<T> FusedIterator for Sorted<T> {}

/// Orders every element of `source` by `comparer`.
///
/// Unlike [`filter`] and [`transform`], this drains `source` into memory
/// before returning. The sort is not stable: elements that compare equal may
/// come out in any relative order.
///
/// # Errors
///
/// [`SequenceError::InvalidArgument`] naming `source` or `comparer` if
/// either is `None`. `source` is checked first.
///
/// # Panics
///
/// May panic if `comparer` does not implement a total order.
pub fn sort_by<S, C>(source: Option<S>, comparer: Option<C>) -> Result<Sorted<S::Item>>
where
    S: IntoIterator,
    C: Comparer<S::Item>,
{
    let source = require(source, "source")?;
    let comparer = require(comparer, "comparer")?;
    Ok(Sorted::from_iter_with(source, comparer))
}

/// [`sort_by`] taking a plain comparison function.
///
/// # Errors
///
/// Same as [`sort_by`].
pub fn sort_by_fn<S, F>(source: Option<S>, comparer: Option<F>) -> Result<Sorted<S::Item>>
where
    S: IntoIterator,
    F: Fn(&S::Item, &S::Item) -> Ordering,
{
    sort_by(source, comparer.map(FnComparer::new))
}
