//! Property-based tests for elision and scansion invariants.
//!
//! Uses proptest to verify what must hold across all inputs: total
//! functions never panic, results are deterministic, and the prosodic
//! acceptance gate is airtight.

use hexameter::{Error, RulePolicy, elide, elide_with, normalize, scan, scan_with};
use proptest::prelude::*;

/// Arbitrary printable strings, including non-ASCII.
fn any_line() -> impl Strategy<Value = String> {
    "\\PC{0,80}"
}

/// Single words: ASCII letters only, so tokenization is trivial.
fn word() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,20}"
}

/// Lines of words that never trigger elision: every word ends in a plain
/// consonant (no vowel, no m) and contains no h for the drop rule to eat.
fn inert_line() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-gik-lnop-uvz]{0,6}[bcdfgklnpqrstvz]", 1..6)
        .prop_map(|words| words.join(" "))
}

proptest! {
    /// Elision is total modulo the typed EmptyVerse failure.
    #[test]
    fn elide_never_panics(line in any_line()) {
        let _ = elide(&line);
    }

    /// Scansion is total modulo its typed failures.
    #[test]
    fn scan_never_panics(line in any_line()) {
        let _ = scan(&line);
    }

    /// The full pipeline is total, under every policy combination.
    #[test]
    fn pipeline_never_panics(line in any_line(), bits in 0u8..4) {
        let policy = RulePolicy::from_bits_truncate(bits);
        if let Ok(elided) = elide_with(&line, policy) {
            let _ = scan_with(&elided, policy);
        }
    }

    /// Same input, same output.
    #[test]
    fn elide_is_deterministic(line in any_line()) {
        prop_assert_eq!(elide(&line), elide(&line));
    }

    /// A successful scan always carries 13..=17 nucleus marks.
    #[test]
    fn accepted_verses_have_hexameter_nucleus_counts(line in any_line()) {
        if let Ok(scansion) = scan(&line) {
            let nuclei = scansion.lengths.chars().filter(|&c| c != ' ').count();
            prop_assert!((13..=17).contains(&nuclei), "nucleus count {} out of range", nuclei);
        }
    }

    /// A lone word passes through elision untouched.
    #[test]
    fn single_words_are_returned_unchanged(word in word()) {
        prop_assert_eq!(elide(&word).unwrap(), word);
    }

    /// Lines where no rule can fire survive elision byte for byte.
    #[test]
    fn inert_lines_round_trip(line in inert_line()) {
        prop_assert_eq!(elide(&line).unwrap(), line);
    }

    /// Only a wordless line is an empty verse.
    #[test]
    fn empty_verse_means_no_words(spaces in " {0,10}") {
        prop_assert_eq!(elide(&spaces), Err(Error::EmptyVerse));
    }

    /// Lowering twice is lowering once.
    #[test]
    fn lower_is_idempotent(line in any_line()) {
        let once = normalize::lower(&line);
        prop_assert_eq!(normalize::lower(&once), once);
    }

    /// Stripping an already-stripped lowercase line changes nothing and
    /// records no boundaries.
    #[test]
    fn strip_is_idempotent(line in any_line()) {
        let (stripped, _) = normalize::strip(&line);
        let lowered = normalize::lower(&stripped);
        let (again, boundaries) = normalize::strip(&lowered);
        prop_assert_eq!(again, lowered);
        prop_assert!(boundaries.is_empty());
    }

    /// Boundary positions are strictly increasing.
    #[test]
    fn boundaries_are_strictly_increasing(line in any_line()) {
        let (_, boundaries) = normalize::strip(&line);
        for pair in boundaries.positions().windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }
}
