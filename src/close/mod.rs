//! Termination handlers.
//!
//! A handler runs exactly once per zip, at the moment the first producer is
//! found exhausted. It receives every producer the zip owns, in construction
//! order, along with the values already pulled during the step that ran dry.
//!
//! | Handler             | What it does                                            |
//! | ---                 | ---                                                     |
//! | [`NoClose`]         | Nothing; the zip behaves like a plain `zip`.            |
//! | [`StrictAlignment`] | Fails unless every producer ended at the same position. |
//! | [`from_fn`]         | Runs a closure.                                         |

use core::convert::Infallible;
use core::fmt;

use crate::iter::Producers;

mod strict;

pub use strict::{AlignmentError, StrictAlignment};

/// A termination handler for a synchronous lockstep zip.
///
/// `close` is called with the producers the zip owns and the values pulled
/// before exhaustion was detected. The partial values are always fewer than
/// the number of producers. An `Err` is handed to the caller of the zip as-is.
///
/// Pulling from `producers` is allowed, but any element pulled this way is
/// gone for good.
pub trait Close<P>
where
    P: Producers,
{
    /// The error returned when the handler rejects the way the zip ended.
    type Error;

    /// Inspect the producers after the first exhaustion.
    fn close(&mut self, producers: &mut P, partial: P::Partial) -> Result<(), Self::Error>;
}

/// The values pulled during the step in which a producer ran dry.
pub trait PartialValues {
    /// The number of values pulled before exhaustion was detected.
    fn len(&self) -> usize;

    /// Returns `true` if the very first producer of the step was exhausted.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PartialValues for () {
    fn len(&self) -> usize {
        0
    }
}

#[cfg(feature = "alloc")]
impl<T> PartialValues for alloc::vec::Vec<T> {
    fn len(&self) -> usize {
        alloc::vec::Vec::len(self)
    }
}

#[cfg(feature = "alloc")]
impl<A> PartialValues for smallvec::SmallVec<A>
where
    A: smallvec::Array,
{
    fn len(&self) -> usize {
        smallvec::SmallVec::len(self)
    }
}

/// The handler type of a zip that was built without a handler.
///
/// This type has no values, so a zip using it can never call it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoClose {}

impl<P> Close<P> for NoClose
where
    P: Producers,
{
    type Error = Infallible;

    fn close(&mut self, _producers: &mut P, _partial: P::Partial) -> Result<(), Infallible> {
        match *self {}
    }
}

/// Creates a handler from a closure.
///
/// # Examples
///
/// ```
/// use core::iter::Fuse;
/// use core::str::Chars;
/// use zip_close::close;
/// use zip_close::prelude::*;
///
/// let mut seen = None;
/// let handler = close::from_fn(|producers: &mut Vec<Fuse<Chars<'static>>>, partial: Vec<char>| {
///     let leftover: Vec<String> = producers.iter_mut().map(|p| p.collect()).collect();
///     seen = Some((leftover, partial));
///     Ok::<(), ()>(())
/// });
///
/// let zipped: Vec<_> = vec!["1".chars(), "22".chars(), "333".chars()]
///     .lockstep_with(handler)
///     .collect();
/// assert_eq!(zipped, vec![Ok(vec!['1', '2', '3'])]);
/// assert_eq!(seen, Some((vec![String::new(), "2".to_string(), "33".to_string()], vec![])));
/// ```
pub fn from_fn<P, F, E>(f: F) -> FromFn<F>
where
    P: Producers,
    F: FnMut(&mut P, P::Partial) -> Result<(), E>,
{
    FromFn { f }
}

/// A handler backed by a closure.
///
/// This `struct` is created by the [`from_fn`] function. See its documentation
/// for more.
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

impl<P, F, E> Close<P> for FromFn<F>
where
    P: Producers,
    F: FnMut(&mut P, P::Partial) -> Result<(), E>,
{
    type Error = E;

    fn close(&mut self, producers: &mut P, partial: P::Partial) -> Result<(), E> {
        (self.f)(producers, partial)
    }
}
