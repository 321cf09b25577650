//! Italian words and phrases.

use super::{LanguageProfile, DEFAULT_TEMPLATES};

#[rustfmt::skip]
pub(super) static PROFILE: LanguageProfile = LanguageProfile {
    digits: [
        "zero", "uno", "due", "tre", "quattro",
        "cinque", "sei", "sette", "otto", "nove",
    ],
    numbers: [
        "uno", "due", "tre", "quattro", "cinque",
        "sei", "sette", "otto", "nove", "dieci",
        "undici", "dodici", "tredici", "quattordici", "quindici",
        "sedici", "diciassette", "diciotto", "diciannove", "venti",
        "ventuno", "ventidue", "ventitré", "ventiquattro", "venticinque",
        "ventisei", "ventisette", "ventotto", "ventinove", "trenta",
        "trentuno", "trentadue", "trentatré", "trentaquattro", "trentacinque",
        "trentasei", "trentasette", "trentotto", "trentanove", "quaranta",
        "quarantuno", "quarantadue", "quarantatré", "quarantaquattro", "quarantacinque",
        "quarantasei", "quarantasette", "quarantotto", "quarantanove", "cinquanta",
        "cinquantuno", "cinquantadue", "cinquantatré", "cinquantaquattro", "cinquantacinque",
        "cinquantasei", "cinquantasette", "cinquantotto", "cinquantanove", "sessanta",
        "sessantuno", "sessantadue", "sessantatré", "sessantaquattro", "sessantacinque",
        "sessantasei", "sessantasette", "sessantotto", "sessantanove", "settanta",
        "settantuno", "settantadue", "settantatré", "settantaquattro", "settantacinque",
        "settantasei", "settantasette", "settantotto", "settantanove", "ottanta",
        "ottantuno", "ottantadue", "ottantatré", "ottantaquattro", "ottantacinque",
        "ottantasei", "ottantasette", "ottantotto", "ottantanove", "novanta",
    ],
    templates: DEFAULT_TEMPLATES,
};
