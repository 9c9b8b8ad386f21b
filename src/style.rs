pub mod data;

use crate::{
    ascii::{to_lower, to_upper},
    engine,
    options::Options,
};
use data::{SNAKE, STYLE_TABLE};
use std::{borrow::Cow, fmt, str::FromStr};
use thiserror::Error;

pub const DEFAULT_STYLE: Style = SNAKE;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StyleError {
    #[error("unknown case style `{0}`")]
    Unknown(String),
}

/// Casing applied to an ASCII letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterCase {
    Upper,
    Lower,
}

impl LetterCase {
    #[inline(always)]
    pub const fn apply(self, c: char) -> char {
        match self {
            LetterCase::Upper => to_upper(c),
            LetterCase::Lower => to_lower(c),
        }
    }
}

/// Everything that distinguishes one output style from another.
///
/// The automaton is the same for all of them; it only asks the entry for the
/// joiner and for how to case a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleEntry {
    pub joiner: Option<char>,
    pub start: LetterCase,
    pub rest: LetterCase,
    /// camelCase: the first word starts lowercase.
    pub first_word_lower: bool,
}

impl StyleEntry {
    #[inline(always)]
    pub const fn word_case(&self, letter: char, is_start: bool, is_first_word: bool) -> char {
        if !is_start {
            self.rest.apply(letter)
        } else if is_first_word && self.first_word_lower {
            to_lower(letter)
        } else {
            self.start.apply(letter)
        }
    }
}

/// One of the seven supported output styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
    pub name: &'static str,
    pub display: &'static str,
    pub entry: &'static StyleEntry,
}

impl Style {
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline(always)]
    pub const fn display(&self) -> &'static str {
        self.display
    }

    #[inline(always)]
    pub const fn entry(&self) -> &'static StyleEntry {
        self.entry
    }

    /// Resolve a style by name, ignoring ASCII case, `-`, `_`, spaces and a
    /// trailing `case`: `snake`, `snake_case`, `SnakeCase` and `SNAKE-CASE`
    /// all name the same style.
    pub fn from_name(name: &str) -> Option<Style> {
        let mut key: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        if key.len() > "case".len() && key.ends_with("case") {
            key.truncate(key.len() - "case".len());
        }
        STYLE_TABLE.get(key.as_str()).copied()
    }

    /// Convert `text` into this style.
    #[inline]
    pub fn convert<'a>(&self, text: &'a str, opts: &Options) -> Cow<'a, str> {
        engine::convert(text, self.entry, opts)
    }

    /// Would [`Style::convert`] change `text`?
    #[inline]
    pub fn needs_apply(&self, text: &str, opts: &Options) -> bool {
        matches!(self.convert(text, opts), Cow::Owned(_))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display)
    }
}

impl FromStr for Style {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::from_name(s).ok_or_else(|| StyleError::Unknown(s.to_owned()))
    }
}
