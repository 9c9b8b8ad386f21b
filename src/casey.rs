use crate::{
    options::Options,
    style::{DEFAULT_STYLE, Style},
};
use log::debug;
use std::borrow::Cow;

/// A reusable converter: one style and one set of options, many inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Casey {
    style: Style,
    opts: Options,
}

impl Casey {
    pub fn builder() -> CaseyBuilder {
        CaseyBuilder::default()
    }

    #[inline]
    pub fn style(&self) -> Style {
        self.style
    }

    #[inline]
    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Convert into the configured style. Borrowed input that is already in
    /// that style comes back borrowed.
    pub fn convert<'a, T>(&self, text: T) -> Cow<'a, str>
    where
        T: Into<Cow<'a, str>>,
    {
        self.convert_with(self.style, text)
    }

    /// Convert into `style`, reusing this converter's options.
    pub fn convert_with<'a, T>(&self, style: Style, text: T) -> Cow<'a, str>
    where
        T: Into<Cow<'a, str>>,
    {
        match text.into() {
            Cow::Borrowed(s) => style.convert(s, &self.opts),
            Cow::Owned(s) => {
                let converted = match style.convert(&s, &self.opts) {
                    Cow::Borrowed(_) => None,
                    Cow::Owned(converted) => Some(converted),
                };
                Cow::Owned(converted.unwrap_or(s))
            }
        }
    }
}

#[derive(Debug)]
pub struct CaseyBuilder {
    style: Style,
    opts: Options,
}

impl Default for CaseyBuilder {
    fn default() -> Self {
        Self {
            style: DEFAULT_STYLE,
            opts: Options::default(),
        }
    }
}

impl CaseyBuilder {
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn separate_before_non_alphabets(mut self, on: bool) -> Self {
        self.opts = self.opts.with_separate_before_non_alphabets(on);
        self
    }

    pub fn separate_after_non_alphabets(mut self, on: bool) -> Self {
        self.opts = self.opts.with_separate_after_non_alphabets(on);
        self
    }

    pub fn separators(mut self, separators: &str) -> Self {
        self.opts = self.opts.with_separators(separators);
        self
    }

    pub fn keep(mut self, keep: &str) -> Self {
        self.opts = self.opts.with_keep(keep);
        self
    }

    /// Replace every option set so far.
    pub fn options(mut self, opts: Options) -> Self {
        self.opts = opts;
        self
    }

    pub fn build(self) -> Casey {
        if self.opts.keep_is_ignored() {
            debug!(
                "{}: both `separators` and `keep` given, `keep` is ignored",
                self.style
            );
        }
        Casey {
            style: self.style,
            opts: self.opts,
        }
    }
}
