//! Ready-made comparers and ordering helpers.
//!
//! Provides [`Dir`] for sort direction, [`Natural`] for `Ord` types and
//! [`Directed`] to run any comparer in either direction.

use std::cmp::Ordering;

use crate::traits::Comparer;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compares values by their [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord> Comparer<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// A comparer run in a fixed direction.
///
/// ```
/// use pseudo_enumerable::{sort_by, Directed, Natural};
///
/// let sorted = sort_by(Some(vec![2, 9, 4]), Some(Directed::desc(Natural))).unwrap();
/// assert_eq!(sorted.into_vec(), vec![9, 4, 2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directed<C> {
    comparer: C,
    dir: Dir,
}

impl<C> Directed<C> {
    /// Runs `comparer` in the given direction.
    pub fn new(comparer: C, dir: Dir) -> Self {
        Directed { comparer, dir }
    }

    /// Runs `comparer` unchanged.
    pub fn asc(comparer: C) -> Self {
        Directed::new(comparer, Dir::Asc)
    }

    /// Runs `comparer` reversed.
    pub fn desc(comparer: C) -> Self {
        Directed::new(comparer, Dir::Desc)
    }

    /// Returns the direction.
    pub fn dir(&self) -> Dir {
        self.dir
    }

    /// Returns the wrapped comparer.
    pub fn into_inner(self) -> C {
        self.comparer
    }
}

impl<T, C: Comparer<T>> Comparer<T> for Directed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.dir.apply(self.comparer.compare(a, b))
    }
}

/// Returns `true` if no adjacent pair of `items` compares `Greater`.
///
/// Empty and single-element slices are ordered.
pub fn is_ordered<T, C>(items: &[T], comparer: C) -> bool
where
    C: Comparer<T>,
{
    items
        .windows(2)
        .all(|pair| comparer.compare(&pair[0], &pair[1]) != Ordering::Greater)
}
