//! French words and phrases.

use super::{LanguageProfile, DEFAULT_TEMPLATES};

#[rustfmt::skip]
pub(super) static PROFILE: LanguageProfile = LanguageProfile {
    digits: [
        "zero", "un", "deux", "trois", "quatre",
        "cinq", "six", "sept", "huit", "neuf",
    ],
    numbers: [
        "un", "deux", "trois", "quatre", "cinq",
        "six", "sept", "huit", "neuf", "dix",
        "onze", "douze", "treize", "quatorze", "quinze",
        "seize", "dix-sept", "dix-huit", "dix-neuf", "vingt",
        "vingt et un", "vingt-deux", "vingt-trois", "vingt-quatre", "vingt-cinq",
        "vingt-six", "vingt-sept", "vingt-huit", "vingt-neuf", "trente",
        "trente et un", "trente-deux", "trente-trois", "trente-quatre", "trente-cinq",
        "trente-six", "trente-sept", "trente-huit", "trente-neuf", "quarante",
        "quarante et un", "quarante-deux", "quarante-trois", "quarante-quatre", "quarante-cinq",
        "quarante-six", "quarante-sept", "quarante-huit", "quarante-neuf", "cinquante",
        "cinquante et un", "cinquante-deux", "cinquante-trois",
        "cinquante-quatre", "cinquante-cinq",
        "cinquante-six", "cinquante-sept", "cinquante-huit", "cinquante-neuf", "soixante",
        "soixante et un", "soixante-deux", "soixante-trois", "soixante-quatre", "soixante-cinq",
        "soixante-six", "soixante-sept", "soixante-huit", "soixante-neuf", "soixante-dix",
        "soixante et onze", "soixante-douze", "soixante-treize",
        "soixante-quatorze", "soixante-quinze",
        "soixante-seize", "soixante-dix-sept", "soixante-dix-huit",
        "soixante-dix-neuf", "quatre-vingts",
        "quatre-vingt-un", "quatre-vingt-deux", "quatre-vingt-trois",
        "quatre-vingt-quatre", "quatre-vingt-cinq",
        "quatre-vingt-six", "quatre-vingt-sept", "quatre-vingt-huit",
        "quatre-vingt-neuf", "quatre-vingt-dix",
    ],
    templates: DEFAULT_TEMPLATES,
};
