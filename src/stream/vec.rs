use super::{LockstepStream, StreamProducers};
use crate::iter::Pull;
use crate::utils;

use alloc::vec::Vec;
use core::fmt;
use core::mem;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::ready;
use futures_core::Stream;
use futures_lite::stream::Fuse;
use futures_lite::StreamExt;
use pin_project::pin_project;

/// A `Vec` of streams advanced in lockstep.
///
/// This `struct` is created by the [`into_stream_producers`] method on the
/// [`LockstepStream`] trait. See its documentation for more.
///
/// [`into_stream_producers`]: LockstepStream::into_stream_producers
#[pin_project]
pub struct Streams<S>
where
    S: Stream,
{
    #[pin]
    streams: Vec<Fuse<S>>,
    filled: Vec<S::Item>,
    probe: usize,
}

impl<S> Streams<S>
where
    S: Stream,
{
    pub(crate) fn new(streams: Vec<S>) -> Self {
        let len = streams.len();
        Self {
            streams: streams.into_iter().map(|s| s.fuse()).collect(),
            filled: Vec::with_capacity(len),
            probe: 0,
        }
    }

    /// The number of streams.
    pub fn len(&self) -> usize {
        self.streams.len()
    }

    /// Returns `true` if there are no streams.
    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    /// Returns a pinned mutable reference to the stream at `index`, or `None`
    /// if the index is out of bounds.
    pub fn get_pin_mut(self: Pin<&mut Self>, index: usize) -> Option<Pin<&mut Fuse<S>>> {
        utils::get_pin_mut(self.project().streams, index)
    }
}

impl<S> fmt::Debug for Streams<S>
where
    S: Stream + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.streams.iter()).finish()
    }
}

impl<S> StreamProducers for Streams<S>
where
    S: Stream,
{
    type Item = Vec<S::Item>;
    type Partial = Vec<S::Item>;

    fn arity(&self) -> usize {
        self.streams.len()
    }

    fn poll_advance(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Pull<Self::Item, Self::Partial>> {
        let mut this = self.project();
        let len = this.streams.len();

        while let Some(stream) = utils::get_pin_mut(this.streams.as_mut(), this.filled.len()) {
            match ready!(stream.poll_next(cx)) {
                Some(item) => this.filled.push(item),
                None => return Poll::Ready(Pull::Exhausted(mem::take(this.filled))),
            }
        }

        let items = mem::replace(this.filled, Vec::with_capacity(len));
        Poll::Ready(Pull::Ready(items))
    }

    fn poll_residue(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<usize>> {
        let mut this = self.project();

        while let Some(stream) = utils::get_pin_mut(this.streams.as_mut(), *this.probe) {
            match ready!(stream.poll_next(cx)) {
                Some(_) => return Poll::Ready(Some(*this.probe)),
                None => *this.probe += 1,
            }
        }
        Poll::Ready(None)
    }
}

impl<S> LockstepStream for Vec<S>
where
    S: Stream,
{
    type Producers = Streams<S>;

    fn into_stream_producers(self) -> Self::Producers {
        Streams::new(self)
    }
}
