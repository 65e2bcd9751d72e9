//! Whitespace token reader over a buffered line source.
//!
//! Tokens may be spread over lines in any way; the reader only cares about
//! their order.

use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

use crate::error::{ProtocolError, Result};
use crate::types::END_TOKEN;

pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
    line: String,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: String::new(),
        }
    }

    /// Pull lines until a token is buffered. Returns false at end of input.
    fn fill(&mut self) -> Result<bool> {
        while self.pending.is_empty() {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(false);
            }
            self.pending
                .extend(self.line.split_whitespace().map(str::to_owned));
        }
        Ok(true)
    }

    /// True when no token is left (blank trailing lines included)
    pub fn at_eof(&mut self) -> Result<bool> {
        Ok(!self.fill()?)
    }

    /// Next raw token; `expected` names what the caller was reading
    pub fn next_token(&mut self, expected: &'static str) -> Result<String> {
        if !self.fill()? {
            return Err(ProtocolError::UnexpectedEof { expected });
        }
        self.pending
            .pop_front()
            .ok_or(ProtocolError::UnexpectedEof { expected })
    }

    /// Next token parsed as `T`
    pub fn read<T: FromStr>(&mut self, expected: &'static str) -> Result<T> {
        let token = self.next_token(expected)?;
        token
            .parse()
            .map_err(|_| ProtocolError::InvalidToken { token, expected })
    }

    /// Consume the `END` terminator
    pub fn expect_end(&mut self) -> Result<()> {
        let token = self.next_token("END terminator")?;
        if token != END_TOKEN {
            return Err(ProtocolError::MissingTerminator { found: token });
        }
        Ok(())
    }
}
