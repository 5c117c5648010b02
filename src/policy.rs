//! Rule-variant policy flags.
//!
//! Two behaviors of the elision/scansion rule set are attested in more than
//! one form in the source material, so both are carried as policy rather
//! than hard-coded:
//!
//! - whether silent `h` characters are dropped from words copied during
//!   elision ([`RulePolicy::DROP_H`]);
//! - whether the lexical hiatus exceptions (ei, eis, mei, meis) are honored
//!   during syllabification ([`RulePolicy::HIATUS_EXCEPTIONS`]).
//!
//! The default policy enables both.

use bitflags::bitflags;

bitflags! {
    /// Switches for the attested rule variants.
    #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
    pub struct RulePolicy: u8 {
        /// Drop silent `h` from words copied through elision.
        const DROP_H            = 0x01;
        /// Honor the lexical hiatus exceptions during syllabification.
        const HIATUS_EXCEPTIONS = 0x02;
    }
}

impl Default for RulePolicy {
    fn default() -> Self {
        Self::all()
    }
}
