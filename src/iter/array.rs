use super::{Lockstep, Producers, Pull};

use core::iter::Fuse;
use smallvec::SmallVec;

/// The values pulled from an array of producers during a step that was cut
/// short. It holds fewer than `N` values and never allocates.
pub type Partial<T, const N: usize> = SmallVec<[T; N]>;

impl<I, const N: usize> Producers for [Fuse<I>; N]
where
    I: Iterator,
{
    type Item = [I::Item; N];
    type Partial = Partial<I::Item, N>;

    fn arity(&self) -> usize {
        N
    }

    fn advance(&mut self) -> Pull<Self::Item, Self::Partial> {
        let mut values: Self::Partial = SmallVec::new();
        for iter in self.iter_mut() {
            match iter.next() {
                Some(value) => values.push(value),
                None => return Pull::Exhausted(values),
            }
        }
        match values.into_inner() {
            Ok(values) => Pull::Ready(values),
            Err(_) => unreachable!("a complete step holds exactly N values"),
        }
    }

    fn residue(&mut self) -> Option<usize> {
        self.iter_mut().position(|iter| iter.next().is_some())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        crate::utils::min_size_hint(self.iter().map(Iterator::size_hint))
    }
}

impl<I, const N: usize> Lockstep for [I; N]
where
    I: IntoIterator,
{
    type Producers = [Fuse<I::IntoIter>; N];

    fn into_producers(self) -> Self::Producers {
        self.map(|i| i.into_iter().fuse())
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use crate::close::{self, AlignmentError};
    use crate::iter::Lockstep;

    use core::iter::Fuse;
    use core::str::Chars;

    #[test]
    fn zip_array_3() {
        let a = core::iter::repeat(1).take(2);
        let b = core::iter::repeat(2).take(2);
        let c = core::iter::repeat(3).take(2);
        let mut s = [a, b, c].lockstep_strict();

        assert_eq!(s.next(), Some(Ok([1, 2, 3])));
        assert_eq!(s.next(), Some(Ok([1, 2, 3])));
        assert_eq!(s.next(), None);
    }

    #[test]
    fn zip_array_residue() {
        let mut s = ["1".chars(), "22".chars(), "333".chars()].lockstep_strict();
        assert_eq!(s.next(), Some(Ok(['1', '2', '3'])));
        assert_eq!(s.next(), Some(Err(AlignmentError::Residue)));
        assert_eq!(s.next(), None);
    }

    #[test]
    fn partial_holds_pulled_prefix() {
        let mut seen = Vec::new();
        let handler = close::from_fn(
            |_: &mut [Fuse<Chars<'static>>; 3], partial: super::Partial<char, 3>| {
                seen.extend(partial);
                Ok::<(), ()>(())
            },
        );
        let zipped: Vec<_> = ["333".chars(), "22".chars(), "1".chars()]
            .lockstep_with(handler)
            .collect();
        assert_eq!(zipped, vec![Ok(['3', '2', '1'])]);
        assert_eq!(seen, vec!['3', '2']);
    }
}
