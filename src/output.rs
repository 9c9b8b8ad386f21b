use std::borrow::Cow;

/// Append-only output buffer with a one-step lookback.
///
/// `mark` is the byte offset where the most recent [`Output::append`] started,
/// so the last appended codepoint can be taken back by [`Output::reclaim_last`].
/// After a reclaim there is nothing left to take back until the next append.
#[derive(Debug, Default)]
pub struct Output {
    buf: String,
    mark: usize,
}

impl Output {
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
            mark: 0,
        }
    }

    #[inline(always)]
    pub fn append(&mut self, c: char) {
        self.mark = self.buf.len();
        self.buf.push(c);
    }

    /// Remove the most recently appended codepoint and hand it back.
    #[inline]
    pub fn reclaim_last(&mut self) -> Option<char> {
        let c = self.buf[self.mark..].chars().next()?;
        self.buf.truncate(self.mark);
        Some(c)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Hand back `input` itself when nothing changed.
    #[inline]
    pub fn into_cow(self, input: &str) -> Cow<'_, str> {
        if self.buf == input {
            Cow::Borrowed(input)
        } else {
            Cow::Owned(self.buf)
        }
    }
}
