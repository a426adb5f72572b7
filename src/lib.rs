//! Lockstep zipping of [`Iterator`]s and `Stream`s, with a hook that runs when
//! the zip ends.
//!
//! The standard `zip` stops at the first exhausted input and silently drops
//! whatever the other inputs still had. [`ZipClose`][iter::ZipClose] advances
//! every input by one element per step in a fixed order, and on the first
//! exhaustion hands the remaining inputs plus the partially collected step to
//! a termination handler. The provided [`StrictAlignment`][close::StrictAlignment]
//! handler uses this to tell "all inputs ended together" apart from "the
//! inputs had different lengths".
//!
//! # Operations
//!
//! This library provides the following operations on arrays, vecs, and tuples:
//!
//! - [`iter::Lockstep`]: Zip iterators in lockstep, optionally with a termination handler.
//! - [`stream::LockstepStream`]: Zip streams in lockstep, polling them in order.
//!
//! # Examples
//!
//! Zip three iterators and check that they all end at the same position:
//! ```rust
//! use zip_close::prelude::*;
//! use zip_close::close::AlignmentError;
//!
//! let aligned: Result<Vec<_>, _> = ("1".chars(), "2".chars(), "3".chars())
//!     .lockstep_strict()
//!     .collect();
//! assert_eq!(aligned, Ok(vec![('1', '2', '3')]));
//!
//! let misaligned: Result<Vec<_>, _> = ("1".chars(), "22".chars(), "333".chars())
//!     .lockstep_strict()
//!     .collect();
//! assert_eq!(misaligned, Err(AlignmentError::Residue));
//! ```
//!
//! # Termination
//!
//! A zip ends exactly once. When the producer at index `i` is the first to run
//! dry during a step, the handler receives every producer and the `i` values
//! already pulled in that step. Producers past `i` were not touched during
//! that step. Whatever the handler returns, the zip is over afterwards: an
//! `Err` is yielded once and then the zip only yields `None`.
//!
//! Handlers are free to pull from the producers they are given. Doing so
//! consumes their elements, so producers should not be reused after a handler
//! like [`StrictAlignment`][close::StrictAlignment] has inspected them.
//!
//! A zip over zero producers is empty: it ends on the first pull and never
//! calls its handler.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]
#![allow(non_snake_case)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod utils;

/// The zip-close prelude.
pub mod prelude {
    pub use super::iter::Lockstep as _;
    pub use super::stream::LockstepStream as _;
}

pub mod close;
pub mod iter;
pub mod stream;

/// Helper functions and types for fixed-length arrays.
#[cfg(feature = "alloc")]
pub mod array {
    pub use crate::iter::array::Partial;
    pub use crate::stream::array::Streams;
}

/// Helper functions and types for contiguous growable array type with heap-allocated contents,
/// written `Vec<T>`.
#[cfg(feature = "alloc")]
pub mod vec {
    pub use crate::stream::vec::Streams;
}
