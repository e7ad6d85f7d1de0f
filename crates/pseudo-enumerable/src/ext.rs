//! Method-call forms of the sequence operations.

use std::cmp::Ordering;

use crate::adapter::{FnComparer, FnPredicate, FnTransformer};
use crate::sequence::{Filter, Sorted, Transform};
use crate::traits::{Comparer, Predicate, Transformer};

/// Extension methods for anything that can be iterated.
///
/// The receiver and the capability are always present here, so unlike the
/// free functions these cannot fail. Laziness is the same: `filter_by` and
/// `transform_with` do no work until pulled, `sorted_by` buffers everything.
///
/// ```
/// use pseudo_enumerable::{Directed, Natural, SequenceExt};
///
/// let top: Vec<u32> = vec![4, 11, 7, 2, 9]
///     .filter_by_fn(|n: &u32| *n > 3)
///     .transform_fn(|n: u32| n * 10)
///     .sorted_by(Directed::desc(Natural))
///     .take(2)
///     .collect();
///
/// assert_eq!(top, vec![110, 90]);
/// ```
pub trait SequenceExt: IntoIterator + Sized {
    /// Lazily keeps the elements `predicate` matches.
    fn filter_by<P>(self, predicate: P) -> Filter<Self::IntoIter, P>
    where
        P: Predicate<Self::Item>,
    {
        Filter::new(self.into_iter(), predicate)
    }

    /// [`filter_by`](SequenceExt::filter_by) taking a plain function.
    fn filter_by_fn<F>(self, predicate: F) -> Filter<Self::IntoIter, FnPredicate<F>>
    where
        F: Fn(&Self::Item) -> bool,
    {
        self.filter_by(FnPredicate::new(predicate))
    }

    /// Lazily maps every element through `mapper`.
    fn transform_with<M>(self, mapper: M) -> Transform<Self::IntoIter, M>
    where
        M: Transformer<Self::Item>,
    {
        Transform::new(self.into_iter(), mapper)
    }

    /// [`transform_with`](SequenceExt::transform_with) taking a plain function.
    fn transform_fn<F, R>(self, mapper: F) -> Transform<Self::IntoIter, FnTransformer<F>>
    where
        F: Fn(Self::Item) -> R,
    {
        self.transform_with(FnTransformer::new(mapper))
    }

    /// Buffers every element and orders them by `comparer`.
    fn sorted_by<C>(self, comparer: C) -> Sorted<Self::Item>
    where
        C: Comparer<Self::Item>,
    {
        Sorted::from_iter_with(self, comparer)
    }

    /// [`sorted_by`](SequenceExt::sorted_by) taking a plain function.
    fn sorted_by_fn<F>(self, comparer: F) -> Sorted<Self::Item>
    where
        F: Fn(&Self::Item, &Self::Item) -> Ordering,
    {
        self.sorted_by(FnComparer::new(comparer))
    }
}

impl<S: IntoIterator> SequenceExt for S {}
