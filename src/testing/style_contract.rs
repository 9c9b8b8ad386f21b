use crate::{
    options::Options,
    style::{Style, data::all_styles},
};
use std::borrow::Cow;

/// General inputs, already styled or not.
pub const SAMPLES: &[&str] = &[
    "",
    "abcDefGHIjk",
    "HTTPServer",
    "hello world 123 !@#",
    "  leading and trailing  ",
    "v1.2.3-beta_4",
    "ALL_CAPS_AND-dashes",
    "x",
    "__",
    "ÀÉÎ mixed ascii",
];

/// Text already written in `style`; converting it must change nothing.
pub fn fixed_points(style: Style) -> &'static [&'static str] {
    match style.name() {
        "camel" => &["abcDefGhIjk", "fooBar", "parseHttpResponse", "a", "x1y2"],
        "pascal" => &["AbcDefGhIjk", "FooBar", "ParseHttpResponse", "A", "X1y2"],
        "snake" => &["abc_def_gh_ijk", "foo_bar", "http2_server", "a", "x_1"],
        "kebab" => &["abc-def-gh-ijk", "foo-bar", "http2-server", "a", "x-1"],
        "macro" => &["ABC_DEF_GH_IJK", "FOO_BAR", "HTTP2_SERVER", "A", "X_1"],
        "cobol" => &["ABC-DEF-GH-IJK", "FOO-BAR", "HTTP2-SERVER", "A", "X-1"],
        "train" => &["Abc-Def-Gh-Ijk", "Foo-Bar", "Http2-Server", "A", "X-1"],
        _ => &[],
    }
}

/// Assert that a style satisfies every universal conversion contract.
///
/// 1. `zero_copy_when_no_changes` → text already in the style comes back
///    borrowed, same pointer
/// 2. `style_is_idempotent_on_fixed_points` → converting own-style text is a no-op
/// 3. `needs_apply_is_accurate` → agrees with whether `convert` changed the text
/// 4. `handles_empty_string` → empty in, empty out
/// 5. `no_panic_on_mixed_scripts` → survives arbitrary real-world input
#[macro_export]
macro_rules! assert_style_contract {
    ($style:expr) => {
        $crate::testing::style_contract::zero_copy_when_no_changes($style);
        $crate::testing::style_contract::style_is_idempotent_on_fixed_points($style);
        $crate::testing::style_contract::needs_apply_is_accurate($style);
        $crate::testing::style_contract::handles_empty_string($style);
        $crate::testing::style_contract::no_panic_on_mixed_scripts($style);
    };
}

pub fn zero_copy_when_no_changes(style: Style) {
    let opts = Options::default();
    for &input in fixed_points(style) {
        let out = style.convert(input, &opts);
        assert!(
            matches!(out, Cow::Borrowed(s) if std::ptr::eq(s, input)),
            "zero-copy violated for {style} on `{input}` (got {out:?})"
        );
    }
}

pub fn style_is_idempotent_on_fixed_points(style: Style) {
    let opts = Options::default();
    for &input in fixed_points(style) {
        assert_eq!(style.convert(input, &opts), input, "{style} moved `{input}`");
    }
    // Delimited styles are also stable on their own output.
    if style.entry().joiner.is_some() {
        for &input in SAMPLES {
            let once = style.convert(input, &opts).into_owned();
            let twice = style.convert(&once, &opts);
            assert_eq!(twice, once, "{style} not idempotent on `{input}`");
        }
    }
}

pub fn needs_apply_is_accurate(style: Style) {
    let opts = Options::default();
    for &input in SAMPLES.iter().chain(fixed_points(style)) {
        let predicted = style.needs_apply(input, &opts);
        let changed = style.convert(input, &opts) != input;
        assert_eq!(
            predicted, changed,
            "needs_apply() mismatch for {style} on `{input}`"
        );
    }
}

pub fn handles_empty_string(style: Style) {
    for opts in [
        Options::default(),
        Options::new(true, true, "", ""),
        Options::new(false, false, "-", ""),
        Options::new(false, false, "", "-"),
    ] {
        assert_eq!(style.convert("", &opts), "");
    }
}

pub fn no_panic_on_mixed_scripts(style: Style) {
    let input = "Hello 世界 русский Türkçe العربية 简体中文 🇫🇷 ÀB1_c";
    let _ = style.convert(input, &Options::default());
    let _ = style.convert(input, &Options::new(true, true, "", "世界ü"));
    let _ = style.convert(input, &Options::new(true, false, " _", ""));
}

/// Run the contract against every style in the table.
pub fn assert_all_styles() {
    for &style in all_styles() {
        assert_style_contract!(style);
    }
}
