use super::{Lockstep, Producers, Pull};

use alloc::vec::Vec;
use core::iter::Fuse;

impl<I> Producers for Vec<Fuse<I>>
where
    I: Iterator,
{
    type Item = Vec<I::Item>;
    type Partial = Vec<I::Item>;

    fn arity(&self) -> usize {
        self.len()
    }

    fn advance(&mut self) -> Pull<Self::Item, Self::Partial> {
        let mut values = Vec::with_capacity(self.len());
        for iter in self.iter_mut() {
            match iter.next() {
                Some(value) => values.push(value),
                None => return Pull::Exhausted(values),
            }
        }
        Pull::Ready(values)
    }

    fn residue(&mut self) -> Option<usize> {
        self.iter_mut().position(|iter| iter.next().is_some())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        crate::utils::min_size_hint(self.iter().map(Iterator::size_hint))
    }
}

impl<I> Lockstep for Vec<I>
where
    I: IntoIterator,
{
    type Producers = Vec<Fuse<I::IntoIter>>;

    fn into_producers(self) -> Self::Producers {
        self.into_iter().map(|i| i.into_iter().fuse()).collect()
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use crate::close::AlignmentError;
    use crate::iter::Lockstep;

    #[test]
    fn zip_vec_3() {
        let a = core::iter::repeat(1).take(2);
        let b = core::iter::repeat(2).take(2);
        let c = core::iter::repeat(3).take(2);
        let mut s = vec![a, b, c].lockstep_strict();

        assert_eq!(s.next(), Some(Ok(vec![1, 2, 3])));
        assert_eq!(s.next(), Some(Ok(vec![1, 2, 3])));
        assert_eq!(s.next(), None);
    }

    #[test]
    fn zip_vec_partial() {
        let mut s = vec!["333".chars(), "22".chars(), "1".chars()].lockstep_strict();
        assert_eq!(s.next(), Some(Ok(vec!['3', '2', '1'])));
        assert_eq!(s.next(), Some(Err(AlignmentError::Partial)));
        assert_eq!(s.next(), None);
    }

    #[test]
    fn zip_vec_empty() {
        let mut s = Vec::<core::ops::Range<u8>>::new().lockstep_strict();
        assert_eq!(s.next(), None);
    }

    #[test]
    fn zip_vec_size_hint() {
        let s = vec![0..4, 0..2, 0..9].lockstep();
        assert_eq!(s.size_hint(), (2, Some(2)));
    }
}
