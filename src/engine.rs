//! The segmentation-and-rendering automaton.
//!
//! One left-to-right pass over the input decides where words begin and writes
//! each codepoint in its final form. All seven styles run the same automaton;
//! a [`StyleEntry`] only supplies the joiner and the letter casing.
//!
//! The one subtle case is an uppercase run followed by a lowercase letter
//! (`HTTPServer`): the last letter of the run actually opens the next word, so
//! it is taken back from the output and written again behind a joiner with
//! word-start casing.

use crate::{
    options::{Category, Options},
    output::Output,
    style::StyleEntry,
};
use log::trace;
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    StartOfInput,
    AfterSingleUpper,
    AfterUpperRun,
    AfterSeparator,
    AfterKept,
    Mid,
}

/// Convert `text` with the given style and options.
///
/// Returns `Cow::Borrowed(text)` when the result is identical to the input.
pub fn convert<'a>(text: &'a str, style: &StyleEntry, opts: &Options) -> Cow<'a, str> {
    let mut automaton = Automaton::new(style, opts, text.len());
    for c in text.chars() {
        automaton.feed(c);
    }
    automaton.out.into_cow(text)
}

struct Automaton<'s> {
    style: &'s StyleEntry,
    opts: &'s Options,
    state: State,
    out: Output,
}

impl<'s> Automaton<'s> {
    fn new(style: &'s StyleEntry, opts: &'s Options, len: usize) -> Self {
        Self {
            style,
            opts,
            state: State::StartOfInput,
            out: Output::with_capacity(len + len / 2),
        }
    }

    #[inline(always)]
    fn feed(&mut self, c: char) {
        self.state = match self.opts.category(c) {
            Category::UpperLetter => self.upper(c),
            Category::LowerLetter => self.lower(c),
            cat if cat.is_verbatim() => self.verbatim(c),
            _ => self.separator(),
        };
    }

    fn upper(&mut self, c: char) -> State {
        match self.state {
            State::StartOfInput => {
                self.start_word(c, true);
                State::AfterSingleUpper
            }
            State::AfterSingleUpper | State::AfterUpperRun => {
                self.continue_word(c);
                State::AfterUpperRun
            }
            State::AfterKept if !self.opts.separate_after_non_alphabets => {
                self.continue_word(c);
                State::AfterUpperRun
            }
            State::AfterSeparator | State::Mid | State::AfterKept => {
                self.join();
                self.start_word(c, false);
                State::AfterSingleUpper
            }
        }
    }

    fn lower(&mut self, c: char) -> State {
        match self.state {
            State::AfterUpperRun => {
                if let Some(prev) = self.out.reclaim_last() {
                    trace!("lookback: {prev:?} moves into the word opened by {c:?}");
                    self.join();
                    self.start_word(prev, false);
                }
                self.continue_word(c);
            }
            State::StartOfInput => self.start_word(c, true),
            State::AfterSeparator => {
                self.join();
                self.start_word(c, false);
            }
            State::AfterKept if self.opts.separate_after_non_alphabets => {
                self.join();
                self.start_word(c, false);
            }
            State::AfterSingleUpper | State::Mid | State::AfterKept => self.continue_word(c),
        }
        State::Mid
    }

    fn verbatim(&mut self, c: char) -> State {
        let join = if self.opts.separate_before_non_alphabets {
            !matches!(self.state, State::StartOfInput | State::AfterKept)
        } else {
            self.state == State::AfterSeparator
        };
        if join {
            self.join();
        }
        self.out.append(c);
        State::AfterKept
    }

    #[inline(always)]
    fn separator(&self) -> State {
        match self.state {
            State::StartOfInput => State::StartOfInput,
            _ => State::AfterSeparator,
        }
    }

    #[inline(always)]
    fn join(&mut self) {
        if let Some(joiner) = self.style.joiner {
            self.out.append(joiner);
        }
    }

    #[inline(always)]
    fn start_word(&mut self, c: char, is_first_word: bool) {
        self.out.append(self.style.word_case(c, true, is_first_word));
    }

    #[inline(always)]
    fn continue_word(&mut self, c: char) {
        self.out.append(self.style.word_case(c, false, false));
    }
}
