//! Spanish (Spain) words and phrases.

use super::LanguageProfile;
use crate::phrase::TemplateSource;

#[rustfmt::skip]
pub(super) static PROFILE: LanguageProfile = LanguageProfile {
    digits: [
        "cero", "uno", "dos", "tres", "cuatro",
        "cinco", "seis", "siete", "ocho", "nueve",
    ],
    numbers: [
        "uno", "dos", "tres", "cuatro",
        "cinco", "seis", "siete", "ocho",
        "nueve", "diez", "once", "doce",
        "trece", "catorce", "quince", "dieciseis",
        "diecisiete", "dieciocho", "diecinueve", "veinte",
        "veintiuno", "veintidos", "veintitres", "veinticuatro",
        "veinticinco", "veintiseis", "veintisiete", "veintiocho",
        "veintinueve", "treinta", "treinta y uno", "treinta y dos",
        "treinta y tres", "treinta y cuatro", "treinta y cinco", "treinta y seis",
        "treinta y siete", "treinta y ocho", "treinta y nueve", "cuarenta",
        "cuarenta y uno", "cuarenta y dos", "cuarenta y tres", "cuarenta y cuatro",
        "cuarenta y cinco", "cuarenta y seis", "cuarenta y siete", "cuarenta y ocho",
        "cuarenta y nueve", "cincuenta", "cincuenta y uno", "cincuenta y dos",
        "cincuenta y tres", "cincuenta y cuatro", "cincuenta y cinco", "cincuenta y seis",
        "cincuenta y siete", "cincuenta y ocho", "cincuenta y nueve", "sesenta",
        "sesenta y uno", "sesenta y dos", "sesenta y tres", "sesenta y cuatro",
        "sesenta y cinco", "sesenta y seis", "sesenta y siete", "sesenta y ocho",
        "sesenta y nueve", "setenta", "setenta y uno", "setenta y dos",
        "setenta y tres", "setenta y cuatro", "setenta y cinco", "setenta y seis",
        "setenta y siete", "setenta y ocho", "setenta y nueve", "ochenta",
        "ochenta y uno", "ochenta y dos", "ochenta y tres", "ochenta y cuatro",
        "ochenta y cinco", "ochenta y seis", "ochenta y siete", "ochenta y ocho",
        "ochenta y nueve", "noventa",
    ],
    templates: TemplateSource {
        single_90: "¡{num_word}!",
        two_digit_90: "¡{num_word}!{pause}... {d1}-{d2}",
        single_75: "¡{letter} {num_word}!",
        two_digit_75: "¡{letter} {num_word}!{pause}... {letter} {d1}-{d2}",
    },
};
