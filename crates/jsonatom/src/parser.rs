//! Top-level parse driver.
//!
//! One `Parser` owns one cursor and one output stack for the duration of a
//! single parse call: skip leading whitespace, dispatch on the first byte,
//! skip trailing whitespace, and require the input to be exhausted.

use crate::{
    cursor::Cursor,
    error::ParseError,
    literal::{Literal, parse_literal},
    number::parse_number,
    stack::ByteStack,
    string::parse_string,
    value::Value,
};

pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
    stack: ByteStack,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(input),
            stack: ByteStack::new(),
        }
    }

    pub(crate) fn parse(mut self) -> Result<Value, ParseError> {
        let outcome = self.parse_document();
        // Every string decode must have drained or rolled back its bytes.
        debug_assert_eq!(self.stack.len(), 0, "output stack not drained");
        outcome
    }

    fn parse_document(&mut self) -> Result<Value, ParseError> {
        self.cursor.skip_whitespace();
        let value = self.parse_value()?;
        self.cursor.skip_whitespace();
        if !self.cursor.is_eof() {
            // A valid value followed by trailing input overrides the
            // outcome; the parsed value is discarded.
            return Err(ParseError::RootNotSingular);
        }
        Ok(value)
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.cursor.peek() {
            None => Err(ParseError::ExpectValue),
            Some(b'n') => parse_literal(&mut self.cursor, Literal::Null),
            Some(b't') => parse_literal(&mut self.cursor, Literal::True),
            Some(b'f') => parse_literal(&mut self.cursor, Literal::False),
            Some(b'"') => parse_string(&mut self.cursor, &mut self.stack),
            // The number reader is the default arm; its grammar walk
            // rejects anything that does not start a number.
            Some(_) => parse_number(&mut self.cursor),
        }
    }
}
