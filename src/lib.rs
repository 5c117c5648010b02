//! `hexameter` - dactylic-hexameter scansion for Latin verse.
//!
//! Takes a single line of Latin poetry and determines its meter: which
//! syllables are long or short, and where the six metrical feet begin. Two
//! transformations run in sequence - vowel [elision](elide) between words,
//! then syllable-length [scansion](scan) - and the result renders as three
//! aligned text lines: foot numbers, length marks, and the normalized verse.
//!
//! Some rare valid patterns (a fifth foot of two longs, for one) are not
//! recognized; the scanner then returns its best effort with
//! [`Scansion::is_complete`] false rather than guessing.
//!
//! # Examples
//!
//! ```
//! let elided = hexameter::elide("arma virumque cano troiae qui primus ab oris").unwrap();
//! let scansion = hexameter::scan(&elided).unwrap();
//! assert!(scansion.is_complete());
//! assert_eq!(scansion.text, "arma virumque cano troiae qui primus ab oris");
//! ```

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // Allow scan::Scansion etc
#![allow(clippy::must_use_candidate)] // must_use placed where it matters
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow Latin terms without backticks
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine

pub mod elision;
pub mod error;
pub mod event;
pub mod normalize;
pub mod phoneme;
pub mod policy;
pub mod render;
pub mod scan;

// Re-export the core API at the crate root
pub use elision::{elide, elide_with};
pub use error::{Error, Result};
pub use event::{LogLevel, emit_log, set_log_callback};
pub use normalize::BoundaryMap;
pub use policy::RulePolicy;
pub use scan::{Length, MAX_SYLLABLES, MIN_SYLLABLES, Scansion, scan, scan_with};
