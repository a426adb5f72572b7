use super::{LockstepStream, StreamProducers};
use crate::iter::array::Partial;
use crate::iter::Pull;
use crate::utils;

use core::fmt;
use core::mem;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::ready;
use futures_core::Stream;
use futures_lite::stream::Fuse;
use futures_lite::StreamExt;
use pin_project::pin_project;
use smallvec::SmallVec;

/// A fixed-size array of streams advanced in lockstep.
///
/// This `struct` is created by the [`into_stream_producers`] method on the
/// [`LockstepStream`] trait. See its documentation for more.
///
/// [`into_stream_producers`]: LockstepStream::into_stream_producers
#[pin_project]
pub struct Streams<S, const N: usize>
where
    S: Stream,
{
    #[pin]
    streams: [Fuse<S>; N],
    filled: Partial<S::Item, N>,
    probe: usize,
}

impl<S, const N: usize> Streams<S, N>
where
    S: Stream,
{
    pub(crate) fn new(streams: [S; N]) -> Self {
        Self {
            streams: streams.map(|s| s.fuse()),
            filled: SmallVec::new(),
            probe: 0,
        }
    }

    /// Returns a pinned mutable reference to the stream at `index`, or `None`
    /// if the index is out of bounds.
    pub fn get_pin_mut(self: Pin<&mut Self>, index: usize) -> Option<Pin<&mut Fuse<S>>> {
        utils::get_pin_mut(self.project().streams, index)
    }
}

impl<S, const N: usize> fmt::Debug for Streams<S, N>
where
    S: Stream + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.streams.iter()).finish()
    }
}

impl<S, const N: usize> StreamProducers for Streams<S, N>
where
    S: Stream,
{
    type Item = [S::Item; N];
    type Partial = Partial<S::Item, N>;

    fn arity(&self) -> usize {
        N
    }

    fn poll_advance(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Pull<Self::Item, Self::Partial>> {
        let mut this = self.project();

        while let Some(stream) = utils::get_pin_mut(this.streams.as_mut(), this.filled.len()) {
            match ready!(stream.poll_next(cx)) {
                Some(item) => this.filled.push(item),
                None => return Poll::Ready(Pull::Exhausted(mem::take(this.filled))),
            }
        }

        match mem::take(this.filled).into_inner() {
            Ok(items) => Poll::Ready(Pull::Ready(items)),
            Err(_) => unreachable!("a complete step holds exactly N values"),
        }
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

impl<S, const N: usize> LockstepStream for [S; N]
where
    S: Stream,
{
    type Producers = Streams<S, N>;

    fn into_stream_producers(self) -> Self::Producers {
        Streams::new(self)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::Streams;
    use crate::close::AlignmentError;
    use crate::iter::array::Partial;
    use crate::stream::{LockstepStream, PollClose};

    use core::convert::Infallible;
    use core::mem;
    use core::pin::Pin;
    use core::task::{Context, Poll};

    use futures_core::{ready, Stream};
    use futures_lite::future::block_on;
    use futures_lite::prelude::*;
    use futures_lite::stream;

    #[test]
    fn zip_array_3() {
        block_on(async {
            let a = stream::repeat(1).take(2);
            let b = stream::repeat(2).take(2);
            let c = stream::repeat(3).take(2);
            let mut s = [a, b, c].lockstep_stream_strict();

            assert_eq!(s.next().await, Some(Ok([1, 2, 3])));
            assert_eq!(s.next().await, Some(Ok([1, 2, 3])));
            assert_eq!(s.next().await, None);
        })
    }

    #[test]
    fn zip_array_residue() {
        block_on(async {
            let a = stream::iter("1".chars());
            let b = stream::iter("22".chars());
            let c = stream::iter("333".chars());
            let mut s = [a, b, c].lockstep_stream_strict();

            assert_eq!(s.next().await, Some(Ok(['1', '2', '3'])));
            assert_eq!(s.next().await, Some(Err(AlignmentError::Residue)));
            assert_eq!(s.next().await, None);
        })
    }

    async fn value(n: i32) -> i32 {
        n
    }

    #[test]
    fn zip_array_not_unpin_streams() {
        block_on(async {
            let a = stream::once_future(value(1));
            let b = stream::once_future(value(2));
            let s = core::pin::pin!([a, b].lockstep_stream_strict());
            let zipped: Vec<_> = s.collect().await;
            assert_eq!(zipped, vec![Ok([1, 2])]);
        })
    }

    /// Counts the values left in each stream.
    struct Remaining<'a> {
        counts: &'a mut Vec<usize>,
        current: usize,
    }

    impl<S: Stream, const N: usize> PollClose<Streams<S, N>> for Remaining<'_> {
        type Error = Infallible;

        fn poll_close(
            &mut self,
            mut producers: Pin<&mut Streams<S, N>>,
            _partial: &Partial<S::Item, N>,
            cx: &mut Context<'_>,
        ) -> Poll<Result<(), Infallible>> {
            while let Some(stream) = producers.as_mut().get_pin_mut(self.counts.len()) {
                match ready!(Stream::poll_next(stream, cx)) {
                    Some(_) => self.current += 1,
                    None => self.counts.push(mem::take(&mut self.current)),
                }
            }
            Poll::Ready(Ok(()))
        }
    }

    #[test]
    fn custom_handler_reaches_every_stream() {
        let mut counts = Vec::new();
        block_on(async {
            let streams = [stream::iter(0..1), stream::iter(0..3), stream::iter(0..2)];
            let handler = Remaining {
                counts: &mut counts,
                current: 0,
            };
            let zipped: Vec<_> = streams.lockstep_stream_with(handler).collect().await;
            assert_eq!(zipped, vec![Ok([0, 0, 0])]);
        });
        assert_eq!(counts, vec![0, 2, 1]);
    }
}
