pub mod ascii;
pub mod casey;
pub mod engine;
pub mod options;
pub mod output;
pub mod style;
#[cfg(test)]
pub(crate) mod testing;

pub use casey::{Casey, CaseyBuilder};
pub use options::{Category, Options, SymbolSet};
pub use style::data::{CAMEL, COBOL, KEBAB, MACRO, PASCAL, SNAKE, TRAIN, all_styles};
pub use style::{DEFAULT_STYLE, LetterCase, Style, StyleEntry, StyleError};

use paste::paste;
use std::borrow::Cow;

/// Convert `input` into `style`. Comes back borrowed when nothing changed.
#[inline]
pub fn convert<'a>(input: &'a str, style: Style, opts: &Options) -> Cow<'a, str> {
    style.convert(input, opts)
}

/// For every style `x`: `x_case`, `x_case_with_sep`, `x_case_with_keep` and
/// `x_case_with_options`.
macro_rules! style_functions {
    ($($code:ident),* $(,)?) => {
        $(
            paste! {
                #[doc = "Convert `input` to " $code " case with default options."]
                #[inline]
                pub fn [<$code:lower _case>](input: &str) -> String {
                    $code.convert(input, &Options::default()).into_owned()
                }

                #[doc = "Convert `input` to " $code " case; only symbols in `seps` split words."]
                #[inline]
                pub fn [<$code:lower _case_with_sep>](input: &str, seps: &str) -> String {
                    $code.convert(input, &Options::default().with_separators(seps)).into_owned()
                }

                #[doc = "Convert `input` to " $code " case; symbols in `kept` are copied through."]
                #[inline]
                pub fn [<$code:lower _case_with_keep>](input: &str, kept: &str) -> String {
                    $code.convert(input, &Options::default().with_keep(kept)).into_owned()
                }

                #[inline]
                pub fn [<$code:lower _case_with_options>](input: &str, opts: &Options) -> String {
                    $code.convert(input, opts).into_owned()
                }
            }
        )*
    };
}

style_functions!(CAMEL, PASCAL, SNAKE, KEBAB, MACRO, COBOL, TRAIN);

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
