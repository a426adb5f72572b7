//! Zip a few strings in lockstep and print what is left over when the zip ends.
//!
//! Run with `RUST_LOG=trace` to see the zip's own diagnostics.

use core::iter::Fuse;
use core::str::Chars;

use zip_close::close::{self, StrictAlignment};
use zip_close::prelude::*;

type Producers = Vec<Fuse<Chars<'static>>>;

fn show(inputs: [&'static str; 3]) {
    let handler = close::from_fn(|producers: &mut Producers, partial: Vec<char>| {
        let leftover: Vec<Vec<char>> = producers.iter_mut().map(|p| p.collect()).collect();
        println!("{leftover:?}");
        println!("{partial:?}");
        Ok::<(), ()>(())
    });

    let zipped: Result<Vec<_>, _> = Vec::from(inputs.map(str::chars))
        .lockstep_with(handler)
        .collect();
    println!("{zipped:?}");

    let strict: Result<Vec<_>, _> = Vec::from(inputs.map(str::chars))
        .lockstep_with(StrictAlignment)
        .collect();
    println!("strict: {strict:?}");
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let plain: Vec<_> = ("1".chars(), "2".chars(), "3".chars()).lockstep().values().collect();
    println!("{plain:?}");

    for inputs in [["1", "2", "3"], ["1", "22", "333"], ["333", "22", "1"]] {
        println!();
        show(inputs);
    }
}
