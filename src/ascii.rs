// ASCII-only classification. Anything outside `A-Z`, `a-z`, `0-9` is a symbol,
// including accented and non-Latin letters; those never change case.

const CASE_OFFSET: u32 = 0x20;

#[inline(always)]
pub const fn is_upper_letter(c: char) -> bool {
    matches!(c as u32, 0x41..=0x5A)
}

#[inline(always)]
pub const fn is_lower_letter(c: char) -> bool {
    matches!(c as u32, 0x61..=0x7A)
}

#[inline(always)]
pub const fn is_digit(c: char) -> bool {
    matches!(c as u32, 0x30..=0x39)
}

/// Map `a-z` to `A-Z`; every other codepoint comes back unchanged.
#[inline(always)]
pub const fn to_upper(c: char) -> char {
    if is_lower_letter(c) {
        match char::from_u32(c as u32 - CASE_OFFSET) {
            Some(u) => u,
            None => c,
        }
    } else {
        c
    }
}

/// Map `A-Z` to `a-z`; every other codepoint comes back unchanged.
#[inline(always)]
pub const fn to_lower(c: char) -> char {
    if is_upper_letter(c) {
        match char::from_u32(c as u32 + CASE_OFFSET) {
            Some(l) => l,
            None => c,
        }
    } else {
        c
    }
}
