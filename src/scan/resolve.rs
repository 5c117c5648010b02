//! Length resolution: contextual relaxation rounds and the global short
//! heuristic.

use super::number::{self, Numbering};
use super::syllable::Length;

/// Fixed number of relaxation rounds. The pattern rules have bounded reach,
/// so a small constant suffices; this is not a fixpoint loop.
const RELAX_ROUNDS: usize = 3;

/// Run the relaxation rounds: each round numbers the feet, forces foot
/// starts long, then applies one contextual pass over interior syllables.
pub fn relax(lengths: &mut [Length]) {
    for _ in 0..RELAX_ROUNDS {
        let numbering = number::mark_foot_starts_long(lengths);
        contextual_pass(lengths, &numbering);
    }
}

/// One left-to-right pass over interior syllables, forcing lengths that the
/// surrounding pattern admits only one way.
fn contextual_pass(lengths: &mut [Length], numbering: &Numbering) {
    use Length::{Long, Short, Unknown};

    let n = lengths.len();
    if n < 2 {
        return;
    }
    for i in 1..n - 1 {
        if lengths[i] != Unknown {
            continue;
        }

        // _ ? _  |  u u ?  |  ? u u
        if (lengths[i - 1] == Long && lengths[i + 1] == Long)
            || (i >= 2 && lengths[i - 2] == Short && lengths[i - 1] == Short)
            || (i < n - 2 && lengths[i + 1] == Short && lengths[i + 2] == Short)
        {
            lengths[i] = Long;
            continue;
        }

        // u ? _  |  _ u ?  |  ? u _
        if (lengths[i - 1] == Short && lengths[i + 1] == Long)
            || (i >= 2 && lengths[i - 2] == Long && lengths[i - 1] == Short)
            || (i < n - 2 && lengths[i + 1] == Short && lengths[i + 2] == Long)
        {
            lengths[i] = Short;
            continue;
        }

        // _ ? ? _ where the longs carry consecutive foot numbers: the two
        // unknowns are the short half of a dactyl
        if i < n - 2 && lengths[i - 1] == Long && lengths[i + 2] == Long {
            if let (Some(before), Some(after)) = (numbering.foot_at(i - 1), numbering.foot_at(i + 2))
            {
                if before + 1 == after {
                    lengths[i] = Short;
                }
            }
        }
    }
}

/// The global resolution step: when the arithmetic of the verse admits no
/// more long syllables, every remaining unknown must be short.
///
/// Trigger (a): the long count already equals the exact long count a valid
/// hexameter of this length must have, `N - (N - 12) * 2`.
/// Trigger (b): `(6 - assigned) * 2 + 2` equals the unknown count — the
/// numbering can only complete if every unknown is short.
///
/// This is a coarse arithmetic shortcut, kept exactly as attested; the
/// verse corpora it was validated against depend on these two conditions.
pub fn settle_remaining(lengths: &mut [Length]) {
    use Length::{Long, Short, Unknown};

    let n = lengths.len();
    debug_assert!((super::syllable::MIN_SYLLABLES..=super::syllable::MAX_SYLLABLES).contains(&n));

    let longs = lengths.iter().filter(|&&l| l == Long).count();
    let shorts_expected = (n - 12) * 2;
    let longs_expected = n - shorts_expected;
    let mut all_short = longs == longs_expected;

    let numbering = number::number_feet(lengths);
    let unknowns = lengths.iter().filter(|&&l| l == Unknown).count();
    if numbering.assigned() <= 6 && (6 - numbering.assigned()) * 2 + 2 == unknowns {
        all_short = true;
    }

    if all_short {
        for length in lengths.iter_mut() {
            if *length == Unknown {
                *length = Short;
            }
        }
    }
}
