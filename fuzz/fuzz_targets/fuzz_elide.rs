//! Fuzz target for elision.
//!
//! Elision must be total over arbitrary strings: either an elided line or a
//! typed error, never a panic.

#![no_main]

use hexameter::{RulePolicy, elide_with};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    for bits in 0..4u8 {
        let policy = RulePolicy::from_bits_truncate(bits);
        let _ = elide_with(data, policy);
    }
});
