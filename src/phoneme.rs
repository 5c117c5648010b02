//! Phoneme predicates: vowels, diphthongs, and hiatus exceptions.

use crate::normalize::BoundaryMap;
use crate::policy::RulePolicy;

/// The Latin vowels.
const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

/// The Latin diphthongs, as ordered character pairs.
const DIPHTHONGS: [(char, char); 5] = [('a', 'e'), ('a', 'u'), ('e', 'i'), ('e', 'u'), ('o', 'e')];

/// Words whose `ei`/`eu`-class vowel pair is pronounced in hiatus, not as a
/// diphthong. Each entry is the word plus the offset of the vowel pair
/// within it, so the word's start can be located from the pair's position.
const HIATUS_EXCEPTIONS: [(&str, usize); 4] = [("ei", 0), ("eis", 0), ("mei", 1), ("meis", 1)];

/// Check whether the character at `index` is a vowel.
///
/// A `u` immediately preceded by `q` is pronounced as a glide /w/ and does
/// not count.
#[must_use]
pub fn is_vowel(text: &[char], index: usize) -> bool {
    let Some(&ch) = text.get(index) else {
        return false;
    };
    if index != 0 && ch == 'u' && text[index - 1] == 'q' {
        return false;
    }
    VOWELS.contains(&ch)
}

/// Check whether an ordered character pair is a diphthong.
///
/// This is the bare pair rule; the lexical hiatus exceptions do not apply.
/// Elision uses this form directly.
#[must_use]
pub fn is_diphthong_pair(first: char, second: char) -> bool {
    DIPHTHONGS.contains(&(first, second))
}

/// Check whether the characters at `index` and `index + 1` form a diphthong,
/// honoring the lexical hiatus exceptions when the policy enables them.
///
/// An exception fires only when the exception word spells out exactly around
/// the pair *and* both the word's start and end indices are recorded word
/// boundaries in `boundaries`. A word match whose boundary test fails falls
/// through to the next exception entry; no exception match means the
/// ordinary pair rule stands.
#[must_use]
pub fn is_diphthong_at(
    line: &[char],
    index: usize,
    boundaries: &BoundaryMap,
    policy: RulePolicy,
) -> bool {
    if index + 1 >= line.len() {
        return false;
    }
    if !is_diphthong_pair(line[index], line[index + 1]) {
        return false;
    }
    if !policy.contains(RulePolicy::HIATUS_EXCEPTIONS) {
        return true;
    }
    for &(word, offset) in &HIATUS_EXCEPTIONS {
        let Some(start) = index.checked_sub(offset) else {
            continue;
        };
        let len = word.len();
        if line.len() - start < len {
            continue;
        }
        if !line[start..start + len].iter().copied().eq(word.chars()) {
            continue;
        }
        if boundaries.contains(start) && boundaries.contains(start + len) {
            return false;
        }
    }
    true
}
