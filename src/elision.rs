//! Vowel elision between words.
//!
//! A word-final vowel (or vowel + `m`) is dropped in pronunciation when the
//! next word begins with a vowel or `h`. The elided characters are replaced
//! with blanks so every word keeps its original column span, which keeps the
//! scansion lines aligned with the verse as typed.

use crate::error::{Error, Result};
use crate::normalize;
use crate::phoneme;
use crate::policy::RulePolicy;

/// Apply elision to a raw verse line under the default policy.
///
/// # Errors
///
/// Returns [`Error::EmptyVerse`] when the line tokenizes to zero words.
pub fn elide(line: &str) -> Result<String> {
    elide_with(line, RulePolicy::default())
}

/// Apply elision to a raw verse line under an explicit policy.
///
/// # Errors
///
/// Returns [`Error::EmptyVerse`] when the line tokenizes to zero words.
pub fn elide_with(line: &str, policy: RulePolicy) -> Result<String> {
    let lowered = normalize::lower(&normalize::fold(line));
    let words: Vec<Vec<char>> = lowered
        .split(' ')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(|w| w.chars().collect())
        .collect();

    if words.is_empty() {
        return Err(Error::EmptyVerse);
    }
    // Elision needs two words; a lone word passes through untouched.
    if words.len() < 2 {
        return Ok(line.to_string());
    }

    let mut out = String::with_capacity(lowered.len());
    for (word, next) in words.iter().zip(words.iter().skip(1)) {
        let last = word.len() - 1;
        let ends_open = word[last] == 'm' || phoneme::is_vowel(word, last);
        if !ends_open {
            copy_word(&mut out, word, policy);
            out.push(' ');
            continue;
        }

        let begins_open = next[0] == 'h' || phoneme::is_vowel(next, 0);
        if begins_open {
            let mut keep = word.len();
            if word[keep - 1] == 'm' {
                keep -= 1;
            }
            // The pair now at the end may be a diphthong that elides as one
            // nucleus. Words already shorter than the pair are clamped.
            if keep >= 2 && phoneme::is_diphthong_pair(word[keep - 2], word[keep - 1]) {
                keep -= 1;
            }
            // The vowel itself.
            keep = keep.saturating_sub(1);

            copy_word(&mut out, &word[..keep], policy);
            // Blanks stand in for the elided tail; together with the
            // separator they restore the word's original span.
            for _ in 1..word.len() - keep {
                out.push(' ');
            }
        } else {
            out.extend(word.iter());
        }
        out.push(' ');
    }
    out.extend(words[words.len() - 1].iter());
    Ok(out)
}

fn copy_word(out: &mut String, word: &[char], policy: RulePolicy) {
    let drop_h = policy.contains(RulePolicy::DROP_H);
    for &ch in word {
        if drop_h && ch == 'h' {
            continue;
        }
        out.push(ch);
    }
}
