//! ANSI SGR stripping
//!
//! Provers built on zerolog-style console writers colorize the values
//! they print. Before a value can be parsed as a number, every
//! `ESC [ <digits or ';'>* m` sequence has to go. Anything else that
//! starts with `ESC` (cursor movement, an unterminated sequence) is left
//! as-is.

use std::borrow::Cow;

const ESC: u8 = 0x1b;

/// Remove all SGR color/style sequences from `text`.
///
/// Borrows the input when it contains no escape byte at all.
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    if !bytes.contains(&ESC) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    // start of the pending run of bytes to copy through
    let mut keep_from = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == ESC {
            if let Some(len) = sgr_len(&bytes[i..]) {
                out.push_str(&text[keep_from..i]);
                i += len;
                keep_from = i;
                continue;
            }
        }
        i += 1;
    }
    out.push_str(&text[keep_from..]);

    Cow::Owned(out)
}

/// Length of the SGR sequence at the start of `bytes`, if there is one.
fn sgr_len(bytes: &[u8]) -> Option<usize> {
    if bytes.len() < 3 || bytes[0] != ESC || bytes[1] != b'[' {
        return None;
    }
    let params = bytes[2..]
        .iter()
        .take_while(|b| b.is_ascii_digit() || **b == b';')
        .count();
    match bytes.get(2 + params) {
        Some(b'm') => Some(3 + params),
        _ => None,
    }
}
