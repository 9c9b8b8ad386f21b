use crate::style::{LetterCase, Style, StyleEntry};

use paste::paste;
use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates every style from a single table
/// ---------------------------------------------------------------------------
macro_rules! define_styles {
    ($(
        $code:ident, $name:literal, $display:literal,
        joiner: $joiner:expr,
        start: $start:ident,
        rest: $rest:ident,
        first_word_lower: $first_lower:expr
    ),* $(,)?) => {
        // Per-style descriptors
        $(
            paste! {
                mod [<$code:lower _data>] {
                    use super::*;

                    pub const ENTRY: StyleEntry = StyleEntry {
                        joiner: $joiner,
                        start: LetterCase::$start,
                        rest: LetterCase::$rest,
                        first_word_lower: $first_lower,
                    };
                }
            }
        )*

        // Public `Style` constants
        $(
            paste! {
                pub const $code: Style = Style {
                    name: $name,
                    display: $display,
                    entry: &[<$code:lower _data>]::ENTRY,
                };
            }
        )*

        pub static ALL_STYLES: &[Style] = &[$($code),*];

        // Lookup by normalized name, see `Style::from_name`
        pub static STYLE_TABLE: Map<&'static str, Style> = phf_map! {
            $( $name => $code, )*
        };
    };
}

// ---------------------------------------------------------------------------
//    Style definitions (single source of truth)
// ---------------------------------------------------------------------------
define_styles! {
    CAMEL, "camel", "camelCase",
        joiner: None,
        start: Upper,
        rest: Lower,
        first_word_lower: true,

    PASCAL, "pascal", "PascalCase",
        joiner: None,
        start: Upper,
        rest: Lower,
        first_word_lower: false,

    SNAKE, "snake", "snake_case",
        joiner: Some('_'),
        start: Lower,
        rest: Lower,
        first_word_lower: false,

    KEBAB, "kebab", "kebab-case",
        joiner: Some('-'),
        start: Lower,
        rest: Lower,
        first_word_lower: false,

    MACRO, "macro", "MACRO_CASE",
        joiner: Some('_'),
        start: Upper,
        rest: Upper,
        first_word_lower: false,

    COBOL, "cobol", "COBOL-CASE",
        joiner: Some('-'),
        start: Upper,
        rest: Upper,
        first_word_lower: false,

    TRAIN, "train", "Train-Case",
        joiner: Some('-'),
        start: Upper,
        rest: Lower,
        first_word_lower: false,
}

#[inline]
pub fn all_styles() -> &'static [Style] {
    ALL_STYLES
}
