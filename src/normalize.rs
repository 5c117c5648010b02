//! Text normalization: transliteration folding, letter stripping, and the
//! boundary map that lets word spacing be reinserted after scansion.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::canonical_combining_class;

/// Positions in a stripped line where a run of non-letter characters was
/// removed.
///
/// Indices are strictly increasing and refer to the *stripped* line; each
/// recorded run is reinserted as exactly one blank column at render time,
/// so the map is a lossy approximation of the original spacing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoundaryMap {
    positions: Vec<usize>,
}

impl BoundaryMap {
    /// Record a boundary. Consecutive duplicates collapse to one entry.
    pub fn push(&mut self, position: usize) {
        if self.positions.last() != Some(&position) {
            debug_assert!(self.positions.last().is_none_or(|&last| last < position));
            self.positions.push(position);
        }
    }

    /// Check whether `position` is a recorded boundary.
    #[must_use]
    pub fn contains(&self, position: usize) -> bool {
        self.positions.binary_search(&position).is_ok()
    }

    /// The recorded boundary positions, in increasing order.
    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Fold a raw line to plain Latin letters.
///
/// Decomposes to NFD and drops combining marks, so vowels carrying macrons
/// or breves (`ā`, `ă`) scan as their base letter, and expands the æ/œ
/// ligatures to their two-letter spellings. Non-letter characters pass
/// through unchanged.
#[must_use]
pub fn fold(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.nfd() {
        match ch {
            'æ' => out.push_str("ae"),
            'Æ' => out.push_str("AE"),
            'œ' => out.push_str("oe"),
            'Œ' => out.push_str("OE"),
            c if canonical_combining_class(c) != 0 => {}
            c => out.push(c),
        }
    }
    out
}

/// Strip a raw line to its letters, recording where anything else was.
///
/// Folds first (see [`fold`]), then copies only ASCII alphabetic characters
/// (case preserved); every maximal run of other characters records the
/// current output length in the [`BoundaryMap`] once. Total over arbitrary
/// input: empty input yields an empty line and an empty map.
#[must_use]
pub fn strip(raw: &str) -> (String, BoundaryMap) {
    let mut stripped = String::new();
    let mut boundaries = BoundaryMap::default();
    for ch in fold(raw).chars() {
        if ch.is_ascii_alphabetic() {
            stripped.push(ch);
        } else {
            boundaries.push(stripped.len());
        }
    }
    (stripped, boundaries)
}

/// ASCII-lowercase a line; non-ASCII characters pass through unchanged.
#[must_use]
pub fn lower(text: &str) -> String {
    text.chars().map(|c| c.to_ascii_lowercase()).collect()
}
