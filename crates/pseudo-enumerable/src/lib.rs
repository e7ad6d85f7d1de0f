//! Pseudo-enumerable - filter, transform and sort over any iterator.
//!
//! A small set of query-style sequence operations written against capability
//! traits instead of bare closures:
//!
//! - [`filter`]: lazily keep elements matching a [`Predicate`]
//! - [`transform`]: lazily map elements through a [`Transformer`]
//! - [`sort_by`]: eagerly order elements with a [`Comparer`]
//!
//! Each has a `_fn` form taking a plain function, which is wrapped in an
//! adapter ([`FnPredicate`], [`FnTransformer`], [`FnComparer`]) and passed to
//! the capability form.
//!
//! # Quick Start
//!
//! ```rust
//! use pseudo_enumerable::{filter_fn, sort_by, transform_fn, Natural};
//!
//! let evens: Vec<i32> = filter_fn(Some(vec![1, 2, 3, 4, 5]), Some(|n: &i32| n % 2 == 0))
//!     .unwrap()
//!     .collect();
//! assert_eq!(evens, vec![2, 4]);
//!
//! let squares: Vec<i32> = transform_fn(Some(vec![1, 2, 3]), Some(|x: i32| x * x))
//!     .unwrap()
//!     .collect();
//! assert_eq!(squares, vec![1, 4, 9]);
//!
//! let sorted = sort_by(Some(vec![3, 1, 2]), Some(Natural)).unwrap();
//! assert_eq!(sorted.into_vec(), vec![1, 2, 3]);
//! ```
//!
//! # Missing Arguments
//!
//! The free functions take their arguments as `Option`. A `None` source or
//! capability is rejected with [`SequenceError::InvalidArgument`] at call
//! time, before anything is iterated:
//!
//! ```rust
//! use pseudo_enumerable::{sort_by, Natural, SequenceError};
//!
//! let err = sort_by(None::<Vec<i32>>, Some(Natural)).unwrap_err();
//! assert_eq!(err, SequenceError::InvalidArgument { argument: "source" });
//! ```
//!
//! Callers that always have both values can use [`SequenceExt`] instead.
//!
//! # Laziness
//!
//! | Operation | Evaluation | Result |
//! |-----------|------------|--------|
//! | `filter` | lazy, one element per pull | [`Filter`] |
//! | `transform` | lazy, one element per pull | [`Transform`] |
//! | `sort_by` | eager, buffers the source | [`Sorted`] |
//!
//! # Features
//!
//! - `tracing`: emit `tracing` events for rejected arguments and sort buffering.

mod adapter;
mod error;
mod ext;
mod ordering;
mod sequence;
mod traits;

// Re-export public API
pub use adapter::{FnComparer, FnPredicate, FnTransformer};
pub use error::{Result, SequenceError};
pub use ext::SequenceExt;
pub use ordering::{is_ordered, Dir, Directed, Natural};
pub use sequence::{
    filter, filter_fn, sort_by, sort_by_fn, transform, transform_fn, Filter, Sorted, Transform,
};
pub use traits::{Comparer, Predicate, Transformer};
