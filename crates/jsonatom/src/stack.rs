//! The parser's output byte stack.
//!
//! String decoding appends bytes one at a time and, on success, pops the
//! whole decoded span back off. The stack is addressed by offset only: a
//! caller records `len()` as a mark and later pops or truncates relative to
//! it, so reallocation during growth can never invalidate anything a caller
//! holds.

use alloc::vec::Vec;

/// Initial capacity installed on the first push.
const INIT_CAPACITY: usize = 256;

/// An append-only byte store with strict push/pop discipline.
///
/// Capacity grows by half its current size (floor [`INIT_CAPACITY`]) until a
/// push fits, and is never released before the stack itself is dropped.
#[derive(Debug, Default)]
pub(crate) struct ByteStack {
    data: Vec<u8>,
}

impl ByteStack {
    pub(crate) fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Number of bytes currently pushed.
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Appends one byte, growing the backing storage if it is full.
    pub(crate) fn push(&mut self, byte: u8) {
        if self.data.len() == self.data.capacity() {
            self.grow(1);
        }
        self.data.push(byte);
    }

    /// Removes the last `n` bytes and returns them as an owned span.
    ///
    /// Contract: `n <= len()`. Violating it is a caller bug, not a parse
    /// error.
    pub(crate) fn pop(&mut self, n: usize) -> Vec<u8> {
        debug_assert!(n <= self.data.len(), "pop below the stack bottom");
        self.data.split_off(self.data.len() - n)
    }

    /// Rolls the stack back to a previously recorded length.
    ///
    /// Contract: `mark <= len()`.
    pub(crate) fn truncate(&mut self, mark: usize) {
        debug_assert!(mark <= self.data.len(), "truncate above the stack top");
        self.data.truncate(mark);
    }

    fn grow(&mut self, extra: usize) {
        let needed = self.data.len() + extra;
        let mut size = self.data.capacity().max(INIT_CAPACITY);
        while size < needed {
            size += size / 2;
        }
        self.data.reserve_exact(size - self.data.len());
    }
}
