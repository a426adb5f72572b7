use super::{Lockstep, Producers, Pull};
use crate::close::PartialValues;
use crate::utils;

use core::iter::Fuse;

impl Producers for () {
    type Item = ();
    type Partial = ();

    fn arity(&self) -> usize {
        0
    }

    fn advance(&mut self) -> Pull<(), ()> {
        Pull::Exhausted(())
    }

    fn residue(&mut self) -> Option<usize> {
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(0))
    }
}

impl Lockstep for () {
    type Producers = ();

    fn into_producers(self) -> Self::Producers {}
}

macro_rules! impl_lockstep_tuple {
    ($($F:ident=$idx:tt)+) => {
        impl<$($F),+> PartialValues for ($(Option<$F>,)+) {
            fn len(&self) -> usize {
                0 $(+ usize::from(self.$idx.is_some()))+
            }
        }

        impl<$($F),+> Producers for ($(Fuse<$F>,)+)
        where $(
            $F: Iterator,
        )+ {
            type Item = ($($F::Item,)+);
            type Partial = ($(Option<$F::Item>,)+);

            fn arity(&self) -> usize {
                utils::tuple_len!($($F,)+)
            }

            fn advance(&mut self) -> Pull<Self::Item, Self::Partial> {
                let mut partial: Self::Partial = ($(None::<$F::Item>,)+);
                $(
                    match self.$idx.next() {
                        Some(value) => partial.$idx = Some(value),
                        None => return Pull::Exhausted(partial),
                    }
                )+
                match partial {
                    ($(Some($F),)+) => Pull::Ready(($($F,)+)),
                    _ => unreachable!("a complete step holds a value for every producer"),
                }
            }

            fn residue(&mut self) -> Option<usize> {
                $(
                    if self.$idx.next().is_some() {
                        return Some($idx);
                    }
                )+
                None
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                utils::min_size_hint([$(self.$idx.size_hint()),+])
            }
        }

        impl<$($F),+> Lockstep for ($($F,)+)
        where $(
            $F: IntoIterator,
        )+ {
            type Producers = ($(Fuse<$F::IntoIter>,)+);

            fn into_producers(self) -> Self::Producers {
                let ($($F,)+) = self;
                ($($F.into_iter().fuse(),)+)
            }
        }
    };
}

impl_lockstep_tuple! { A=0 }
impl_lockstep_tuple! { A=0 B=1 }
impl_lockstep_tuple! { A=0 B=1 C=2 }
impl_lockstep_tuple! { A=0 B=1 C=2 D=3 }
impl_lockstep_tuple! { A=0 B=1 C=2 D=3 E=4 }
impl_lockstep_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 }
impl_lockstep_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 G=6 }
impl_lockstep_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 G=6 H=7 }
impl_lockstep_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 G=6 H=7 I=8 }
impl_lockstep_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 G=6 H=7 I=8 J=9 }
impl_lockstep_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 G=6 H=7 I=8 J=9 K=10 }
impl_lockstep_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 G=6 H=7 I=8 J=9 K=10 L=11 }

#[cfg(all(test, feature = "std"))]
mod tests {
    use crate::close::{self, AlignmentError, PartialValues};
    use crate::iter::{Lockstep, Producers, Pull};

    use core::iter::Fuse;
    use core::str::Chars;

    type Chars3 = (
        Fuse<Chars<'static>>,
        Fuse<Chars<'static>>,
        Fuse<Chars<'static>>,
    );
    type Partial3 = (Option<char>, Option<char>, Option<char>);

    #[test]
    fn zip_tuple_1() {
        let zipped: Vec<_> = ("ab".chars(),).lockstep().values().collect();
        assert_eq!(zipped, vec![('a',), ('b',)]);
    }

    #[test]
    fn zip_tuple_heterogenous() {
        let mut s = (0..2u8, ["x", "y"], "pq".chars()).lockstep_strict();
        assert_eq!(s.next(), Some(Ok((0, "x", 'p'))));
        assert_eq!(s.next(), Some(Ok((1, "y", 'q'))));
        assert_eq!(s.next(), None);
    }

    #[test]
    fn zip_tuple_12() {
        let mut s = (
            0..1, 0..1, 0..1, 0..1, 0..1, 0..1, 0..1, 0..1, 0..1, 0..1, 0..1, 0..2,
        )
            .lockstep_strict();
        assert_eq!(s.next(), Some(Ok((0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0))));
        assert_eq!(s.next(), Some(Err(AlignmentError::Residue)));
    }

    #[test]
    fn advance_reports_exhaustion_index() {
        let mut producers = (0..1, 0..1, 0..0).into_producers();
        assert_eq!(producers.advance(), Pull::Exhausted((Some(0), Some(0), None)));
        assert_eq!(producers.arity(), 3);
    }

    #[test]
    fn partial_len_counts_filled_prefix() {
        assert_eq!((None::<u8>, None::<u8>).len(), 0);
        assert!((None::<u8>, None::<u8>).is_empty());
        assert_eq!((Some(1), Some(2), None::<u8>).len(), 2);
    }

    #[test]
    fn handler_sees_live_producers() {
        let mut leftover = Vec::new();
        let mut partials = Vec::new();
        let handler = close::from_fn(|producers: &mut Chars3, partial: Partial3| {
            leftover.push(producers.0.by_ref().collect::<String>());
            leftover.push(producers.1.by_ref().collect::<String>());
            leftover.push(producers.2.by_ref().collect::<String>());
            partials.push(partial);
            Ok::<(), ()>(())
        });
        let zipped: Vec<_> = ("1".chars(), "22".chars(), "333".chars())
            .lockstep_with(handler)
            .collect();
        assert_eq!(zipped, vec![Ok(('1', '2', '3'))]);
        assert_eq!(leftover, vec!["", "2", "33"]);
        assert_eq!(partials, vec![(None, None, None)]);
    }
}
