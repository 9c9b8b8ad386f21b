// src/options.rs
// Per-call conversion settings. Small, immutable once built, and the only input
// besides the text and the style that influences the automaton.

use crate::ascii::{is_digit, is_lower_letter, is_upper_letter};
use smallvec::SmallVec;

/// What the automaton sees for one input codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    UpperLetter,
    LowerLetter,
    Digit,
    Kept,
    Separator,
}

impl Category {
    /// Digits and kept symbols travel through the automaton identically.
    #[inline(always)]
    pub const fn is_verbatim(self) -> bool {
        matches!(self, Category::Digit | Category::Kept)
    }
}

/// A tiny set of symbol codepoints, built from a string.
///
/// Sets are a handful of characters in practice, so membership is a linear
/// scan over an inline buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolSet {
    chars: SmallVec<[char; 16]>,
}

impl SymbolSet {
    /// Returns `None` for an empty string: an empty set means "not configured".
    pub fn parse(symbols: &str) -> Option<Self> {
        let mut chars: SmallVec<[char; 16]> = SmallVec::new();
        for c in symbols.chars() {
            if !chars.contains(&c) {
                chars.push(c);
            }
        }
        if chars.is_empty() {
            None
        } else {
            Some(Self { chars })
        }
    }

    #[inline(always)]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

/// Conversion settings.
///
/// - `separate_before_non_alphabets`: a digit or kept symbol that follows a
///   word gets a joiner in front of it.
/// - `separate_after_non_alphabets`: a letter that follows a digit or kept
///   symbol starts a new word.
/// - `separators`: when set, only these symbols split words; every other
///   symbol is kept verbatim.
/// - `keep`: when set (and `separators` is not), only these symbols are kept
///   verbatim; every other symbol splits words.
///
/// With neither set, every non-alphanumeric codepoint is a separator.
/// `separators` takes precedence when both are given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub separate_before_non_alphabets: bool,
    pub separate_after_non_alphabets: bool,
    separators: Option<SymbolSet>,
    keep: Option<SymbolSet>,
}

impl Options {
    pub fn new(
        separate_before_non_alphabets: bool,
        separate_after_non_alphabets: bool,
        separators: &str,
        keep: &str,
    ) -> Self {
        Self {
            separate_before_non_alphabets,
            separate_after_non_alphabets,
            separators: SymbolSet::parse(separators),
            keep: SymbolSet::parse(keep),
        }
    }

    #[inline]
    pub fn with_separate_before_non_alphabets(mut self, on: bool) -> Self {
        self.separate_before_non_alphabets = on;
        self
    }

    #[inline]
    pub fn with_separate_after_non_alphabets(mut self, on: bool) -> Self {
        self.separate_after_non_alphabets = on;
        self
    }

    pub fn with_separators(mut self, separators: &str) -> Self {
        self.separators = SymbolSet::parse(separators);
        self
    }

    pub fn with_keep(mut self, keep: &str) -> Self {
        self.keep = SymbolSet::parse(keep);
        self
    }

    #[inline]
    pub fn separators(&self) -> Option<&SymbolSet> {
        self.separators.as_ref()
    }

    #[inline]
    pub fn keep(&self) -> Option<&SymbolSet> {
        self.keep.as_ref()
    }

    /// `keep` is configured but shadowed by `separators`.
    #[inline]
    pub fn keep_is_ignored(&self) -> bool {
        self.separators.is_some() && self.keep.is_some()
    }

    /// Classify one input codepoint.
    #[inline(always)]
    pub fn category(&self, c: char) -> Category {
        if is_upper_letter(c) {
            Category::UpperLetter
        } else if is_lower_letter(c) {
            Category::LowerLetter
        } else if is_digit(c) {
            Category::Digit
        } else {
            self.symbol_category(c)
        }
    }

    #[inline(always)]
    fn symbol_category(&self, c: char) -> Category {
        match (&self.separators, &self.keep) {
            (Some(seps), _) if seps.contains(c) => Category::Separator,
            (Some(_), _) => Category::Kept,
            (None, Some(keep)) if keep.contains(c) => Category::Kept,
            _ => Category::Separator,
        }
    }
}
