//! Utilities to implement the different zips of this crate.

#[cfg(feature = "alloc")]
mod pin;
mod tuple;

#[cfg(feature = "alloc")]
pub(crate) use pin::get_pin_mut;
pub(crate) use tuple::tuple_len;

/// Combine the size hints of producers advanced in lockstep: the zip is as
/// long as its shortest producer.
pub(crate) fn min_size_hint<I>(hints: I) -> (usize, Option<usize>)
where
    I: IntoIterator<Item = (usize, Option<usize>)>,
{
    hints
        .into_iter()
        .fold((usize::MAX, None), |(low, high), (l, h)| {
            let high = match (high, h) {
                (Some(a), Some(b)) => Some(a.min(b)),
                (a, b) => a.or(b),
            };
            (low.min(l), high)
        })
}
