#![no_std]

use zip_close::close::AlignmentError;
use zip_close::prelude::*;

// These tests ensure that the traits provided by `zip-close` work in a no std environment.

#[test]
fn lockstep_tuple() {
    let mut zip = ("ab".chars(), 0..2).lockstep_strict();
    assert_eq!(zip.next(), Some(Ok(('a', 0))));
    assert_eq!(zip.next(), Some(Ok(('b', 1))));
    assert_eq!(zip.next(), None);
}

#[test]
fn lockstep_tuple_misaligned() {
    let mut zip = ("ab".chars(), 0..1).lockstep_strict();
    assert_eq!(zip.next(), Some(Ok(('a', 0))));
    assert_eq!(zip.next(), Some(Err(AlignmentError::Partial)));
    assert_eq!(zip.next(), None);
}

#[test]
fn lockstep_values() {
    let mut zip = ([1, 2], [3, 4]).lockstep().values();
    assert_eq!(zip.next(), Some((1, 3)));
    assert_eq!(zip.next(), Some((2, 4)));
    assert_eq!(zip.next(), None);
}
