use core::fmt;
use core::iter::FusedIterator;

use super::{Producers, Pull};
use crate::close::{Close, NoClose, PartialValues};

/// An iterator that advances several producers in lockstep and reports how
/// they ended.
///
/// This `struct` is created by the methods on the [`Lockstep`] trait, or by
/// [`ZipClose::new`]. See their documentation for more.
///
/// [`Lockstep`]: super::Lockstep
pub struct ZipClose<P, C>
where
    P: Producers,
    C: Close<P>,
{
    producers: P,
    close: Option<C>,
    done: bool,
}

impl<P, C> ZipClose<P, C>
where
    P: Producers,
    C: Close<P>,
{
    /// Create a zip over `producers`, with an optional termination handler.
    ///
    /// Nothing is pulled until the zip itself is advanced.
    pub fn new(producers: P, close: Option<C>) -> Self {
        Self {
            producers,
            close,
            done: false,
        }
    }

    /// Try to advance the zip by one step.
    ///
    /// Returns `Ok(Some(values))` while every producer yields, and `Ok(None)`
    /// once a producer runs out. The handler runs exactly once, during the
    /// call that detects exhaustion; its error is returned from that call.
    /// Every later call returns `Ok(None)`.
    pub fn try_next(&mut self) -> Result<Option<P::Item>, C::Error> {
        if self.done {
            return Ok(None);
        }

        let arity = self.producers.arity();
        if arity == 0 {
            tracing::trace!("lockstep zip over zero producers is empty");
            self.done = true;
            return Ok(None);
        }

        match self.producers.advance() {
            Pull::Ready(item) => Ok(Some(item)),
            Pull::Exhausted(partial) => {
                self.done = true;
                debug_assert!(partial.len() < arity);
                tracing::trace!(arity, index = partial.len(), "lockstep producer exhausted");
                if let Some(close) = self.close.as_mut() {
                    close.close(&mut self.producers, partial)?;
                }
                Ok(None)
            }
        }
    }

    /// Returns `true` once a producer has run out.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Gets a reference to the underlying producers.
    pub fn producers(&self) -> &P {
        &self.producers
    }

    /// Consumes the zip, returning the underlying producers.
    pub fn into_producers(self) -> P {
        self.producers
    }
}

impl<P> ZipClose<P, NoClose>
where
    P: Producers,
{
    /// Iterate over the zipped values directly.
    ///
    /// A zip without a handler cannot fail, so there is no `Result` to unwrap.
    pub fn values(self) -> Values<P> {
        Values { inner: self }
    }
}

impl<P, C> fmt::Debug for ZipClose<P, C>
where
    P: Producers + fmt::Debug,
    C: Close<P>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZipClose")
            .field("producers", &self.producers)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

impl<P, C> Iterator for ZipClose<P, C>
where
    P: Producers,
    C: Close<P>,
{
    type Item = Result<P::Item, C::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().transpose()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done || self.producers.arity() == 0 {
            return (0, Some(0));
        }
        let (low, high) = self.producers.size_hint();
        // The handler may add one error item.
        match self.close {
            Some(_) => (low, high.and_then(|high| high.checked_add(1))),
            None => (low, high),
        }
    }
}

impl<P, C> FusedIterator for ZipClose<P, C>
where
    P: Producers,
    C: Close<P>,
{
}

/// An iterator over the values of a zip without a termination handler.
///
/// This `struct` is created by the [`values`] method on [`ZipClose`]. See its
/// documentation for more.
///
/// [`values`]: ZipClose::values
pub struct Values<P>
where
    P: Producers,
{
    inner: ZipClose<P, NoClose>,
}

impl<P> Values<P>
where
    P: Producers,
{
    /// Consumes the iterator, returning the underlying producers.
    pub fn into_producers(self) -> P {
        self.inner.into_producers()
    }
}

impl<P> fmt::Debug for Values<P>
where
    P: Producers + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Values").field(&self.inner).finish()
    }
}

impl<P> Iterator for Values<P>
where
    P: Producers,
{
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.inner.try_next() {
            Ok(item) => item,
            Err(never) => match never {},
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<P> FusedIterator for Values<P> where P: Producers {}
