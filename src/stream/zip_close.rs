use super::{PollClose, StreamProducers};
use crate::close::PartialValues;
use crate::iter::Pull;

use core::fmt;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::ready;
use futures_core::stream::{FusedStream, Stream};
use pin_project::pin_project;

/// A stream that advances several streams in lockstep and reports how they
/// ended.
///
/// This `struct` is created by the methods on the [`LockstepStream`] trait,
/// or by [`ZipClose::new`]. See their documentation for more.
///
/// [`LockstepStream`]: super::LockstepStream
#[pin_project]
pub struct ZipClose<P, C>
where
    P: StreamProducers,
    C: PollClose<P>,
{
    #[pin]
    producers: P,
    close: Option<C>,
    state: State<P::Partial>,
}

enum State<T> {
    Zipping,
    Closing(T),
    Done,
}

impl<P, C> ZipClose<P, C>
where
    P: StreamProducers,
    C: PollClose<P>,
{
    /// Create a zip over `producers`, with an optional termination handler.
    pub fn new(producers: P, close: Option<C>) -> Self {
        Self {
            producers,
            close,
            state: State::Zipping,
        }
    }
}

impl<P, C> fmt::Debug for ZipClose<P, C>
where
    P: StreamProducers + fmt::Debug,
    C: PollClose<P>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZipClose")
            .field("producers", &self.producers)
            .field("done", &self.is_terminated())
            .finish_non_exhaustive()
    }
}

impl<P, C> Stream for ZipClose<P, C>
where
    P: StreamProducers,
    C: PollClose<P>,
{
    type Item = Result<P::Item, C::Error>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            match this.state {
                State::Done => return Poll::Ready(None),
                State::Zipping => {
                    let arity = this.producers.arity();
                    if arity == 0 {
                        tracing::trace!("lockstep zip over zero streams is empty");
                        *this.state = State::Done;
                        continue;
                    }

                    match ready!(this.producers.as_mut().poll_advance(cx)) {
                        Pull::Ready(item) => return Poll::Ready(Some(Ok(item))),
                        Pull::Exhausted(partial) => {
                            debug_assert!(partial.len() < arity);
                            tracing::trace!(
                                arity,
                                index = partial.len(),
                                "lockstep stream exhausted"
                            );
                            *this.state = match this.close {
                                Some(_) => State::Closing(partial),
                                None => State::Done,
                            };
                        }
                    }
                }
                State::Closing(partial) => {
                    let outcome = match this.close.as_mut() {
                        Some(close) => ready!(close.poll_close(this.producers.as_mut(), partial, cx)),
                        None => Ok(()),
                    };
                    *this.state = State::Done;
                    if let Err(err) = outcome {
                        return Poll::Ready(Some(Err(err)));
                    }
                }
            }
        }
    }
}

impl<P, C> FusedStream for ZipClose<P, C>
where
    P: StreamProducers,
    C: PollClose<P>,
{
    fn is_terminated(&self) -> bool {
        matches!(self.state, State::Done)
    }
}
