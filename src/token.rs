//! Buffered tokenizer over a [`ByteSource`] (spec §4.1, component 2).
//!
//! `next_token` returns the next maximal run of non-whitespace bytes as an
//! owned, whitespace-trimmed `String`, or `None` at end of input. Tokens are
//! guaranteed non-empty when returned.

use crate::source::ByteSource;

/// A whitespace-delimited token. Non-empty by construction.
pub type Token = String;

fn is_ascii_whitespace(b: u8) -> bool {
    b == b' ' || b == b'\t' || b == b'\n' || b == b'\r' || b == 0x0c || 0x0b == b
}

/// Wraps a [`ByteSource`] and exposes `next_token`.
pub struct TokenBuffer<'a> {
    source: &'a mut dyn ByteSource,
    pushed_back: Option<u8>,
}

impl<'a> TokenBuffer<'a> {
    pub fn new(source: &'a mut dyn ByteSource) -> Self {
        TokenBuffer {
            source,
            pushed_back: None,
        }
    }

    fn next_byte(&mut self) -> Option<u8> {
        self.pushed_back.take().or_else(|| self.source.read_byte())
    }

    /// Returns the next maximal run of non-whitespace bytes, or `None` at
    /// end of input.
    pub fn next_token(&mut self) -> Option<Token> {
        let mut byte = loop {
            match self.next_byte() {
                Some(b) if is_ascii_whitespace(b) => continue,
                Some(b) => break b,
                None => return None,
            }
        };

        let mut token = Vec::new();
        loop {
            token.push(byte);
            match self.next_byte() {
                Some(b) if !is_ascii_whitespace(b) => byte = b,
                Some(b) => {
                    debug_assert!(is_ascii_whitespace(b));
                    break;
                }
                None => break,
            }
        }

        Some(String::from_utf8_lossy(&token).into_owned())
    }
}
