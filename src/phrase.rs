//! Utterance text for a bingo number.
//!
//! Each locale supplies four template strings, one per phrase shape. They
//! are parsed once into typed segments and checked against the slots the
//! shape needs, so rendering never meets a missing or foreign placeholder.
//!
//! | Placeholder | Value |
//! |---|---|
//! | `{num_word}` | full-number word (`"cincuenta y cuatro"`) |
//! | `{d1}` / `{d2}` | tens / units digit words (`"cinco"`, `"cuatro"`) |
//! | `{letter}` | 75-ball letter band (`"B"`) |
//! | `{pause}` | pause marker between the number and its digits |

use derive_builder::{Builder, UninitializedFieldError};

use crate::bingo::{BingoError, GameVariant, Letter};
use crate::lexicon::{self, LanguageProfile, LexiconError};
use crate::locale::Locale;

/// Delivery tag prefixed to every phrase.
pub const DELIVERY_TAG: &str = "[excited] ";

/// Spoken pause between the full number and its digit spell-out.
#[cfg(not(feature = "ssml-breaks"))]
pub const PAUSE: &str = " ";
#[cfg(feature = "ssml-breaks")]
pub const PAUSE: &str = " <break time=\"0.4s\"/> ";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhraseError {
    #[error("Unknown placeholder {{{name}}} in template {template:?}")]
    UnknownPlaceholder { template: String, name: String },
    #[error("Unclosed placeholder in template {0:?}")]
    UnclosedPlaceholder(String),
    #[error("{shape} template is missing {slot}")]
    MissingSlot { shape: Shape, slot: Slot },
    #[error("{shape} template must not use {slot}")]
    UnexpectedSlot { shape: Shape, slot: Slot },
    #[error("Template not set: {0}")]
    Uninitialized(String),
    #[error(transparent)]
    Lexicon(#[from] LexiconError),
    #[error(transparent)]
    Bingo(#[from] BingoError),
}

impl From<UninitializedFieldError> for PhraseError {
    fn from(e: UninitializedFieldError) -> Self {
        PhraseError::Uninitialized(e.field_name().to_string())
    }
}

/// A named value slot inside a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    NumberWord,
    Digit1,
    Digit2,
    Letter,
    Pause,
}

impl Slot {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "num_word" => Some(Slot::NumberWord),
            "d1" => Some(Slot::Digit1),
            "d2" => Some(Slot::Digit2),
            "letter" => Some(Slot::Letter),
            "pause" => Some(Slot::Pause),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Slot::NumberWord => "num_word",
            Slot::Digit1 => "d1",
            Slot::Digit2 => "d2",
            Slot::Letter => "letter",
            Slot::Pause => "pause",
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.name())
    }
}

/// The four phrase shapes: one- or two-digit numbers in each game variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Single90,
    TwoDigit90,
    Single75,
    TwoDigit75,
}

impl Shape {
    fn of(variant: GameVariant, n: u8) -> Self {
        match (variant, n < 10) {
            (GameVariant::Ninety, true) => Shape::Single90,
            (GameVariant::Ninety, false) => Shape::TwoDigit90,
            (GameVariant::SeventyFive, true) => Shape::Single75,
            (GameVariant::SeventyFive, false) => Shape::TwoDigit75,
        }
    }

    /// Slots the shape must use; any other slot is rejected.
    fn slots(self) -> &'static [Slot] {
        match self {
            Shape::Single90 => &[Slot::NumberWord],
            Shape::TwoDigit90 => &[
                Slot::NumberWord,
                Slot::Pause,
                Slot::Digit1,
                Slot::Digit2,
            ],
            Shape::Single75 => &[Slot::Letter, Slot::NumberWord],
            Shape::TwoDigit75 => &[
                Slot::Letter,
                Slot::NumberWord,
                Slot::Pause,
                Slot::Digit1,
                Slot::Digit2,
            ],
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Shape::Single90 => "90-ball single-digit",
            Shape::TwoDigit90 => "90-ball two-digit",
            Shape::Single75 => "75-ball single-digit",
            Shape::TwoDigit75 => "75-ball two-digit",
        })
    }
}

/// Raw template strings for one locale, as stored in the lexicon.
#[derive(Debug, Clone, Copy)]
pub struct TemplateSource {
    pub single_90: &'static str,
    pub two_digit_90: &'static str,
    pub single_75: &'static str,
    pub two_digit_75: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(Slot),
}

/// A parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(src: &str) -> Result<Self, PhraseError> {
        let mut segments = Vec::new();
        let mut rest = src;

        while let Some(open) = rest.find('{') {
            if open > 0 {
                segments.push(Segment::Literal(rest[..open].to_string()));
            }
            let after = &rest[open + 1..];
            let close = after
                .find('}')
                .ok_or_else(|| PhraseError::UnclosedPlaceholder(src.to_string()))?;
            let name = &after[..close];
            let slot = Slot::from_name(name).ok_or_else(|| PhraseError::UnknownPlaceholder {
                template: src.to_string(),
                name: name.to_string(),
            })?;
            segments.push(Segment::Slot(slot));
            rest = &after[close + 1..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self { segments })
    }

    fn uses(&self, slot: Slot) -> bool {
        self.segments.contains(&Segment::Slot(slot))
    }

    fn check(&self, shape: Shape) -> Result<(), PhraseError> {
        let allowed = shape.slots();
        if let Some(&slot) = allowed.iter().find(|s| !self.uses(**s)) {
            return Err(PhraseError::MissingSlot { shape, slot });
        }
        for segment in &self.segments {
            if let Segment::Slot(slot) = segment {
                if !allowed.contains(slot) {
                    return Err(PhraseError::UnexpectedSlot { shape, slot: *slot });
                }
            }
        }
        Ok(())
    }

    fn render(&self, fill: &Fill<'_>) -> String {
        let mut out = String::from(DELIVERY_TAG);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot(slot) => out.push_str(fill.value(*slot)),
            }
        }
        out
    }
}

/// Slot values for one number.
struct Fill<'a> {
    number_word: &'a str,
    digits: Option<(&'a str, &'a str)>,
    letter: Option<Letter>,
}

impl Fill<'_> {
    // Templates are checked against their shape, so an absent value is
    // never requested.
    fn value(&self, slot: Slot) -> &str {
        match slot {
            Slot::NumberWord => self.number_word,
            Slot::Digit1 => self.digits.map(|(d1, _)| d1).unwrap_or_default(),
            Slot::Digit2 => self.digits.map(|(_, d2)| d2).unwrap_or_default(),
            Slot::Letter => self.letter.map(Letter::as_str).unwrap_or_default(),
            Slot::Pause => PAUSE,
        }
    }
}

/// The four validated templates of a locale.
#[derive(Debug, Clone, Builder)]
#[builder(build_fn(validate = "Self::validate", error = "PhraseError"))]
pub struct PhraseTemplates {
    single_90: Template,
    two_digit_90: Template,
    single_75: Template,
    two_digit_75: Template,
}

impl PhraseTemplatesBuilder {
    fn validate(&self) -> Result<(), PhraseError> {
        let fields = [
            (&self.single_90, Shape::Single90),
            (&self.two_digit_90, Shape::TwoDigit90),
            (&self.single_75, Shape::Single75),
            (&self.two_digit_75, Shape::TwoDigit75),
        ];
        for (template, shape) in fields {
            if let Some(t) = template {
                t.check(shape)?;
            }
        }
        Ok(())
    }
}

impl PhraseTemplates {
    pub fn from_source(src: &TemplateSource) -> Result<Self, PhraseError> {
        PhraseTemplatesBuilder::default()
            .single_90(Template::parse(src.single_90)?)
            .two_digit_90(Template::parse(src.two_digit_90)?)
            .single_75(Template::parse(src.single_75)?)
            .two_digit_75(Template::parse(src.two_digit_75)?)
            .build()
    }

    fn get(&self, shape: Shape) -> &Template {
        match shape {
            Shape::Single90 => &self.single_90,
            Shape::TwoDigit90 => &self.two_digit_90,
            Shape::Single75 => &self.single_75,
            Shape::TwoDigit75 => &self.two_digit_75,
        }
    }
}

/// Builds utterances for one locale.
#[derive(Debug, Clone)]
pub struct TextFormatter {
    profile: &'static LanguageProfile,
    templates: PhraseTemplates,
}

impl TextFormatter {
    pub fn new(locale: Locale) -> Result<Self, PhraseError> {
        let profile = lexicon::profile(locale);
        let templates = PhraseTemplates::from_source(profile.templates())?;
        Ok(Self { profile, templates })
    }

    /// 90-ball line: `"[excited] fifty-four! ... five-four"`.
    pub fn text_90(&self, n: u8) -> Result<String, PhraseError> {
        self.text(GameVariant::Ninety, n)
    }

    /// 75-ball line: `"[excited] O seventy-four! ... O seven-four"`.
    pub fn text_75(&self, n: u8) -> Result<String, PhraseError> {
        self.text(GameVariant::SeventyFive, n)
    }

    pub fn text(&self, variant: GameVariant, n: u8) -> Result<String, PhraseError> {
        let letter = match variant {
            GameVariant::Ninety => None,
            GameVariant::SeventyFive => Some(Letter::for_number(n)?),
        };
        let number_word = self.profile.number_word(n)?;
        let digits = if n < 10 {
            None
        } else {
            Some((
                self.profile.digit_word(n / 10)?,
                self.profile.digit_word(n % 10)?,
            ))
        };

        let fill = Fill {
            number_word,
            digits,
            letter,
        };
        Ok(self.templates.get(Shape::of(variant, n)).render(&fill))
    }
}
