//! Lockstep iteration over several iterators.
//!
//! # Examples
//!
//! ```
//! use zip_close::prelude::*;
//!
//! let a = [1, 2, 3];
//! let b = ["one", "two", "three"];
//! let zipped: Vec<_> = (a, b).lockstep().values().collect();
//! assert_eq!(zipped, vec![(1, "one"), (2, "two"), (3, "three")]);
//! ```
//!
//! # Lockstep
//!
//! Each step pulls one element from every producer, in construction order.
//! The step stops at the first producer that is exhausted; producers after it
//! are not pulled during that step.
//!
//! | Input        | Item         | Partial values                  |
//! | ---          | ---          | ---                             |
//! | `Vec<I>`     | `Vec<T>`     | `Vec<T>`                        |
//! | `[I; N]`     | `[T; N]`     | [`Partial`][crate::array::Partial] |
//! | `(A, B, ..)` | `(A, B, ..)` | `(Option<A>, Option<B>, ..)`    |

use crate::close::{Close, NoClose, PartialValues, StrictAlignment};

#[cfg(feature = "alloc")]
pub(crate) mod array;
pub(crate) mod tuple;
#[cfg(feature = "alloc")]
mod vec;
mod zip_close;

pub use zip_close::{Values, ZipClose};

/// The outcome of pulling one lockstep step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pull<T, P> {
    /// Every producer yielded a value.
    Ready(T),
    /// A producer was exhausted; these are the values pulled before it.
    Exhausted(P),
}

/// An ordered, owned set of producers that can be advanced in lockstep.
///
/// Producers are expected to be fused: once a producer has returned `None`
/// it keeps returning `None`. The [`Lockstep`] conversions take care of this
/// by wrapping every producer in [`core::iter::Fuse`].
pub trait Producers {
    /// The values of one complete step.
    type Item;

    /// The values of a step that was cut short.
    type Partial: PartialValues;

    /// The number of producers.
    fn arity(&self) -> usize;

    /// Pull one value from every producer, stopping at the first exhausted one.
    fn advance(&mut self) -> Pull<Self::Item, Self::Partial>;

    /// Pull one more value from each producer, in order.
    ///
    /// Returns the index of the first producer that still yielded a value.
    /// Producers after that index are not pulled.
    fn residue(&mut self) -> Option<usize>;

    /// Bounds on the number of complete steps left.
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }
}

/// Zip a set of iterators in lockstep.
pub trait Lockstep {
    /// The producers the iterators are turned into.
    type Producers: Producers;

    /// Take ownership of the iterators.
    fn into_producers(self) -> Self::Producers;

    /// Zip without a termination handler, ending silently on the first
    /// exhausted iterator.
    fn lockstep(self) -> ZipClose<Self::Producers, NoClose>
    where
        Self: Sized,
    {
        ZipClose::new(self.into_producers(), None)
    }

    /// Zip, calling `close` once the first iterator runs out.
    fn lockstep_with<C>(self, close: C) -> ZipClose<Self::Producers, C>
    where
        Self: Sized,
        C: Close<Self::Producers>,
    {
        ZipClose::new(self.into_producers(), Some(close))
    }

    /// Zip, failing with an [`AlignmentError`] unless all iterators have the
    /// same length.
    ///
    /// [`AlignmentError`]: crate::close::AlignmentError
    fn lockstep_strict(self) -> ZipClose<Self::Producers, StrictAlignment>
    where
        Self: Sized,
    {
        self.lockstep_with(StrictAlignment)
    }
}
