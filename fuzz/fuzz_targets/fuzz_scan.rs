//! Fuzz target for the full elide-then-scan pipeline.
//!
//! Whatever the input, the pipeline must return typed results; a successful
//! scan must keep its three output lines the same length.

#![no_main]

use hexameter::{elide, scan};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let _ = scan(data);

    if let Ok(elided) = elide(data) {
        if let Ok(scansion) = scan(&elided) {
            assert_eq!(scansion.numbers.len(), scansion.lengths.len());
            assert_eq!(scansion.numbers.len(), scansion.text.len());
        }
    }
});
