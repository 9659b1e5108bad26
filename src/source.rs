//! Abstract byte source (spec §4.1, component 1).
//!
//! Kept deliberately minimal: the grammar is ASCII, so a byte stream is all
//! the tokenizer ever needs. File/string I/O wrappers live with the caller;
//! this crate only needs something that can hand back bytes one at a time.

/// A source of bytes, read one at a time until exhausted.
pub trait ByteSource {
    /// Returns the next byte, or `None` at end of input.
    fn read_byte(&mut self) -> Option<u8>;
}

/// A `ByteSource` over an in-memory byte slice.
pub struct SliceSource<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        SliceSource { bytes, pos: 0 }
    }
}

impl ByteSource for SliceSource<'_> {
    fn read_byte(&mut self) -> Option<u8> {
        let byte = *self.bytes.get(self.pos)?;
        self.pos += 1;
        Some(byte)
    }
}

/// A `ByteSource` over anything implementing [`std::io::Read`].
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: std::io::Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        ReaderSource { reader }
    }
}

impl<R: std::io::Read> ByteSource for ReaderSource<R> {
    fn read_byte(&mut self) -> Option<u8> {
        let mut buf = [0u8; 1];
        match self.reader.read(&mut buf) {
            Ok(1) => Some(buf[0]),
            _ => None,
        }
    }
}
