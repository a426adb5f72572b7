use core::pin::Pin;
use core::task::{Context, Poll};

use super::{Close, PartialValues};
use crate::iter::Producers;
use crate::stream::{PollClose, StreamProducers};

/// The ways in which producers can fail to end together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum AlignmentError {
    /// Some producers yielded a value in the step where another one ran dry.
    #[error("producers have different lengths: a step ended half-filled")]
    Partial,
    /// A producer still had elements after the zip ended.
    #[error("producers have different lengths: elements were left over")]
    Residue,
}

/// A handler which requires every producer to end at the same position.
///
/// The check fails with [`AlignmentError::Partial`] if any value was pulled
/// in the step that ran dry. Otherwise every producer is pulled one more time,
/// in order, and the first one that still yields a value fails the check with
/// [`AlignmentError::Residue`].
///
/// That extra pull consumes an element, so the producers should not be used
/// after this handler has run.
///
/// # Examples
///
/// ```
/// use zip_close::close::{AlignmentError, StrictAlignment};
/// use zip_close::prelude::*;
///
/// let mut zip = ["333".chars(), "22".chars(), "1".chars()].lockstep_with(StrictAlignment);
/// assert_eq!(zip.next(), Some(Ok(['3', '2', '1'])));
/// assert_eq!(zip.next(), Some(Err(AlignmentError::Partial)));
/// assert_eq!(zip.next(), None);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StrictAlignment;

impl<P> Close<P> for StrictAlignment
where
    P: Producers,
{
    type Error = AlignmentError;

    fn close(&mut self, producers: &mut P, partial: P::Partial) -> Result<(), AlignmentError> {
        if !partial.is_empty() {
            tracing::debug!(
                arity = producers.arity(),
                filled = partial.len(),
                "lockstep step ended half-filled"
            );
            return Err(AlignmentError::Partial);
        }

        match producers.residue() {
            Some(index) => {
                tracing::debug!(arity = producers.arity(), index, "producer outlived the zip");
                Err(AlignmentError::Residue)
            }
            None => Ok(()),
        }
    }
}

impl<P> PollClose<P> for StrictAlignment
where
    P: StreamProducers,
{
    type Error = AlignmentError;

    fn poll_close(
        &mut self,
        producers: Pin<&mut P>,
        partial: &P::Partial,
        cx: &mut Context<'_>,
    ) -> Poll<Result<(), AlignmentError>> {
        if !partial.is_empty() {
            tracing::debug!(
                arity = producers.arity(),
                filled = partial.len(),
                "lockstep step ended half-filled"
            );
            return Poll::Ready(Err(AlignmentError::Partial));
        }

        producers.poll_residue(cx).map(|residue| match residue {
            Some(index) => {
                tracing::debug!(index, "stream outlived the zip");
                Err(AlignmentError::Residue)
            }
            None => Ok(()),
        })
    }
}
