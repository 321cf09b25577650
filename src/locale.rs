use std::fmt;
use std::str::FromStr;

/// A language-region identifier selecting a lexicon and a set of voices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locale {
    EsEs,
    EnUs,
    EnGb,
    FrFr,
    PtBr,
    ItIt,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "Language '{0}' not found. Available: {available}",
    available = Locale::available()
)]
pub struct UnknownLocale(pub String);

impl Locale {
    pub const ALL: [Locale; 6] = [
        Locale::EsEs,
        Locale::EnUs,
        Locale::EnGb,
        Locale::FrFr,
        Locale::PtBr,
        Locale::ItIt,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::EsEs => "es-ES",
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::FrFr => "fr-FR",
            Locale::PtBr => "pt-BR",
            Locale::ItIt => "it-IT",
        }
    }

    /// Language subcode sent to the synthesis API (`es-ES` -> `es`).
    pub fn api_code(self) -> &'static str {
        let id = self.as_str();
        id.split('-').next().unwrap_or(id)
    }

    /// Comma-separated list of every supported identifier.
    pub fn available() -> String {
        Self::ALL
            .iter()
            .map(|l| l.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| UnknownLocale(s.to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{Locale, UnknownLocale};

    #[test]
    fn parses_every_identifier() {
        for locale in Locale::ALL {
            assert_eq!(locale.as_str().parse::<Locale>(), Ok(locale));
        }
    }

    #[test]
    fn identifiers_are_case_sensitive() {
        assert_eq!(
            "es-es".parse::<Locale>(),
            Err(UnknownLocale("es-es".to_string()))
        );
    }

    #[test]
    fn unknown_locale_lists_choices() {
        let err = "de-DE".parse::<Locale>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'de-DE'"));
        assert!(msg.contains("es-ES, en-US, en-GB, fr-FR, pt-BR, it-IT"));
    }

    #[test]
    fn api_code_is_language_part() {
        assert_eq!(Locale::EsEs.api_code(), "es");
        assert_eq!(Locale::EnGb.api_code(), "en");
        assert_eq!(Locale::PtBr.api_code(), "pt");
    }
}
