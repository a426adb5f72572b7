//! Lockstep iteration over several streams.
//!
//! # Examples
//!
//! ```
//! use zip_close::close::AlignmentError;
//! use zip_close::prelude::*;
//! use futures_lite::future::block_on;
//! use futures_lite::{stream, StreamExt};
//!
//! block_on(async {
//!     let a = stream::iter(1..3);
//!     let b = stream::iter(3..6);
//!     let mut s = vec![a, b].lockstep_stream_strict();
//!
//!     assert_eq!(s.next().await, Some(Ok(vec![1, 3])));
//!     assert_eq!(s.next().await, Some(Ok(vec![2, 4])));
//!     assert_eq!(s.next().await, Some(Err(AlignmentError::Residue)));
//!     assert_eq!(s.next().await, None);
//! })
//! ```
//!
//! # Ordering
//!
//! Streams are polled one at a time, in construction order. A stream is only
//! polled once every stream before it has produced its value for the current
//! step, so a pending stream holds up the ones after it. At most one value
//! per stream is held while the step is being filled.

use core::convert::Infallible;
use core::pin::Pin;
use core::task::{Context, Poll};

use crate::close::{NoClose, PartialValues, StrictAlignment};
use crate::iter::Pull;

#[cfg(feature = "alloc")]
pub(crate) mod array;
#[cfg(feature = "alloc")]
pub(crate) mod vec;
mod zip_close;

pub use zip_close::ZipClose;

/// An ordered, owned set of streams that can be advanced in lockstep.
pub trait StreamProducers {
    /// The values of one complete step.
    type Item;

    /// The values of a step that was cut short.
    type Partial: PartialValues;

    /// The number of streams.
    fn arity(&self) -> usize;

    /// Poll the current step, resuming at the first stream that has not
    /// produced a value for it yet.
    fn poll_advance(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Pull<Self::Item, Self::Partial>>;

    /// Poll one more value from each stream, in order.
    ///
    /// Resolves to the index of the first stream that still yielded a value,
    /// or `None` if all of them are exhausted.
    fn poll_residue(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<usize>>;
}

/// A termination handler for a lockstep stream.
///
/// This is the polling counterpart of [`Close`][crate::close::Close]. It is
/// polled until it resolves, after which the zip is over.
pub trait PollClose<P>
where
    P: StreamProducers,
{
    /// The error returned when the handler rejects the way the zip ended.
    type Error;

    /// Inspect the streams after the first exhaustion.
    fn poll_close(
        &mut self,
        producers: Pin<&mut P>,
        partial: &P::Partial,
        cx: &mut Context<'_>,
    ) -> Poll<Result<(), Self::Error>>;
}

impl<P> PollClose<P> for NoClose
where
    P: StreamProducers,
{
    type Error = Infallible;

    fn poll_close(
        &mut self,
        _producers: Pin<&mut P>,
        _partial: &P::Partial,
        _cx: &mut Context<'_>,
    ) -> Poll<Result<(), Infallible>> {
        match *self {}
    }
}

/// Zip a set of streams in lockstep.
pub trait LockstepStream {
    /// The producers the streams are turned into.
    type Producers: StreamProducers;

    /// Take ownership of the streams.
    fn into_stream_producers(self) -> Self::Producers;

    /// Zip without a termination handler, ending silently on the first
    /// exhausted stream.
    fn lockstep_stream(self) -> ZipClose<Self::Producers, NoClose>
    where
        Self: Sized,
    {
        ZipClose::new(self.into_stream_producers(), None)
    }

    /// Zip, polling `close` once the first stream runs out.
    fn lockstep_stream_with<C>(self, close: C) -> ZipClose<Self::Producers, C>
    where
        Self: Sized,
        C: PollClose<Self::Producers>,
    {
        ZipClose::new(self.into_stream_producers(), Some(close))
    }

    /// Zip, failing with an [`AlignmentError`] unless all streams have the
    /// same length.
    ///
    /// [`AlignmentError`]: crate::close::AlignmentError
    fn lockstep_stream_strict(self) -> ZipClose<Self::Producers, StrictAlignment>
    where
        Self: Sized,
    {
        self.lockstep_stream_with(StrictAlignment)
    }
}
