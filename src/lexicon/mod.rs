//! Per-locale number words.
//!
//! Every profile carries the words for the ten digits and for the full
//! numbers 1 to 90. The tables are fixed-size arrays, so a profile with a
//! missing entry does not compile.

mod english;
mod french;
mod italian;
mod portuguese;
mod spanish;

use crate::locale::{Locale, UnknownLocale};
use crate::phrase::TemplateSource;

/// Highest number with a full-word entry.
pub const MAX_NUMBER: u8 = 90;

/// Phrase shapes shared by every locale without typographic specifics.
pub(crate) const DEFAULT_TEMPLATES: TemplateSource = TemplateSource {
    single_90: "{num_word}!",
    two_digit_90: "{num_word}!{pause}... {d1}-{d2}",
    single_75: "{letter} {num_word}!",
    two_digit_75: "{letter} {num_word}!{pause}... {letter} {d1}-{d2}",
};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LexiconError {
    #[error(transparent)]
    UnknownLocale(#[from] UnknownLocale),
    #[error("No word for number {0} (supported: 1-90)")]
    NumberOutOfRange(u8),
    #[error("No word for digit {0} (supported: 0-9)")]
    DigitOutOfRange(u8),
}

/// Immutable word tables and phrase templates for one language.
#[derive(Debug)]
pub struct LanguageProfile {
    /// Words for 0..=9, indexed by digit.
    pub(crate) digits: [&'static str; 10],
    /// Words for 1..=90, index `n - 1`.
    pub(crate) numbers: [&'static str; MAX_NUMBER as usize],
    pub(crate) templates: TemplateSource,
}

impl LanguageProfile {
    /// Word for a full number in 1..=90.
    pub fn number_word(&self, n: u8) -> Result<&'static str, LexiconError> {
        if n == 0 {
            return Err(LexiconError::NumberOutOfRange(n));
        }
        self.numbers
            .get(usize::from(n - 1))
            .copied()
            .ok_or(LexiconError::NumberOutOfRange(n))
    }

    /// Word for a single digit in 0..=9.
    pub fn digit_word(&self, d: u8) -> Result<&'static str, LexiconError> {
        self.digits
            .get(usize::from(d))
            .copied()
            .ok_or(LexiconError::DigitOutOfRange(d))
    }

    pub fn templates(&self) -> &TemplateSource {
        &self.templates
    }
}

/// Profile for a locale. `en-GB` shares the `en-US` tables.
pub fn profile(locale: Locale) -> &'static LanguageProfile {
    match locale {
        Locale::EsEs => &spanish::PROFILE,
        Locale::EnUs | Locale::EnGb => &english::PROFILE,
        Locale::FrFr => &french::PROFILE,
        Locale::PtBr => &portuguese::PROFILE,
        Locale::ItIt => &italian::PROFILE,
    }
}

/// Profile for a locale identifier such as `"fr-FR"`.
pub fn profile_for(id: &str) -> Result<&'static LanguageProfile, LexiconError> {
    Ok(profile(id.parse()?))
}
