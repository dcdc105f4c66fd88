use std::mem::size_of;

use crate::buffer::DecodeBuffer;
use crate::cursor::{Cursor, Step};
use crate::number::NumberScanner;
use crate::reset::Reset;
use crate::stack::{State, StateStack};
use crate::status::{ParseError, ParseStatus};
use crate::string::StringDecoder;

/// The token scanner that was interrupted by a chunk boundary, if any. While
/// a token is pending, the stack top still names the grammatical position
/// that consumes it (`Value` or `ObjectName`); the scanner itself remembers
/// how far into the token the previous chunk reached.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Pending {
    None,
    Str,
    Number,
    Keyword,
}

/// Matches the remainder of `true`, `false` or `null` byte by byte.
struct KeywordMatcher {
    literal: &'static [u8],
    matched: usize,
}

impl KeywordMatcher {
    fn new() -> Self {
        KeywordMatcher {
            literal: b"",
            matched: 0,
        }
    }

    /// Start matching `literal`; its first byte has been consumed.
    fn begin(&mut self, literal: &'static [u8]) {
        self.literal = literal;
        self.matched = 1;
    }

    fn scan(&mut self, cur: &mut Cursor<'_>) -> Result<Step, ()> {
        while self.matched < self.literal.len() {
            let Some(b) = cur.peek() else {
                return Ok(Step::NeedMoreInput);
            };
            if b != self.literal[self.matched] {
                return Err(());
            }
            cur.bump();
            self.matched += 1;
        }
        Ok(Step::Complete)
    }
}

/// What a call into the value position achieved.
enum ValueProgress {
    /// A scalar value was consumed in full.
    Complete,

    /// A `{` or `[` was consumed; the stack top now names the container
    /// position.
    Opened,

    /// The chunk ran out.
    NeedMoreInput,
}

/// An incremental, push-style JSON validator.
///
/// A document is fed as an arbitrary sequence of byte chunks via
/// [`parse_chunk()`](Self::parse_chunk); the parser consumes what it can and
/// keeps its grammatical position on an internal stack, so a chunk boundary
/// can fall anywhere, including in the middle of an escape sequence or a
/// multi-byte UTF-8 character. Splitting the input differently never changes
/// the verdict.
///
/// The parser validates structure only. It does not build a document tree,
/// but it does decode string literals (escapes resolved, surrogate pairs
/// combined) into an internal buffer exposed via
/// [`decoded_bytes()`](Self::decoded_bytes).
///
/// A parser handles exactly one document. To validate another, call
/// [`reset()`](Reset::reset).
pub struct ChunkParser {
    /// The stack of grammatical positions. The top is the position the next
    /// byte must satisfy.
    stack: StateStack,

    /// Decoded string contents, NUL-terminated per string.
    buffer: DecodeBuffer,

    string: StringDecoder,
    number: NumberScanner,
    keyword: KeywordMatcher,

    /// The scanner to resume when the next chunk arrives.
    pending: Pending,

    /// Bytes consumed by previous feeds.
    consumed: usize,

    /// The terminal error, kept so further calls repeat it instead of
    /// parsing on.
    failed: Option<ParseError>,
}

impl ChunkParser {
    pub fn new() -> Self {
        ChunkParser {
            stack: StateStack::new(),
            buffer: DecodeBuffer::new(),
            string: StringDecoder::new(),
            number: NumberScanner::new(),
            keyword: KeywordMatcher::new(),
            pending: Pending::None,
            consumed: 0,
            failed: None,
        }
    }

    /// Parse the next chunk of the document. The chunk is borrowed only for
    /// the duration of the call.
    ///
    /// Returns [`ParseStatus::Complete`] once the document is complete,
    /// [`ParseStatus::NeedMoreInput`] if the chunk ran out first, or the
    /// terminal [`ParseError`] describing the offending byte. Error offsets
    /// are relative to `chunk`.
    pub fn parse_chunk(&mut self, chunk: &[u8]) -> Result<ParseStatus, ParseError> {
        if let Some(err) = self.failed {
            return Err(err);
        }
        let mut cur = Cursor::new(chunk);
        let result = self.drive(&mut cur);
        self.consumed += cur.offset();
        if let Err(err) = result {
            self.failed = Some(err);
        }
        result
    }

    /// Declare the end of the input. A number at the top level has no
    /// closing delimiter, so [`parse_chunk()`](Self::parse_chunk) alone
    /// cannot tell `123` apart from the start of `1234`; this call supplies
    /// the missing lookahead. Returns an error if the document is still
    /// incomplete.
    pub fn finish(&mut self) -> Result<(), ParseError> {
        if let Some(err) = self.failed {
            return Err(err);
        }
        if self.pending == Pending::Number && self.number.is_terminable() {
            self.pending = Pending::None;
            self.stack.pop();
        }
        if self.pending == Pending::None && self.stack.peek() == State::Finish {
            Ok(())
        } else {
            self.failed = Some(ParseError::UnexpectedEof);
            Err(ParseError::UnexpectedEof)
        }
    }

    /// The number of bytes consumed so far, across all feeds.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// The decoded contents of every string literal completed so far, each
    /// followed by a NUL terminator. Valid until the parser is reset.
    pub fn decoded_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// The memory footprint of the parser and everything it owns.
    pub fn memsize(&self) -> usize {
        size_of::<Self>() + self.stack.heap_size() + self.buffer.heap_size()
    }

    fn drive(&mut self, cur: &mut Cursor<'_>) -> Result<ParseStatus, ParseError> {
        loop {
            match self.stack.peek() {
                State::Init => {
                    self.stack.set(State::Finish);
                    self.stack.push(State::Value);
                }

                State::Value => match self.value(cur)? {
                    ValueProgress::Complete => {
                        self.stack.pop();
                    }
                    ValueProgress::Opened => {}
                    ValueProgress::NeedMoreInput => return Ok(ParseStatus::NeedMoreInput),
                },

                State::ObjectFirstName => {
                    cur.skip_whitespace();
                    let Some(b) = cur.peek() else {
                        return Ok(ParseStatus::NeedMoreInput);
                    };
                    match b {
                        b'"' => self.stack.set(State::ObjectName),
                        b'}' => {
                            cur.bump();
                            self.stack.pop();
                        }
                        _ => return Err(invalid_at(cur)),
                    }
                }

                State::ObjectName => match self.name(cur)? {
                    Step::Complete => self.stack.set(State::ObjectNameSep),
                    Step::NeedMoreInput => return Ok(ParseStatus::NeedMoreInput),
                },

                State::ObjectNameSep => {
                    cur.skip_whitespace();
                    let Some(b) = cur.peek() else {
                        return Ok(ParseStatus::NeedMoreInput);
                    };
                    if b != b':' {
                        return Err(invalid_at(cur));
                    }
                    cur.bump();
                    self.stack.set(State::ObjectValue);
                }

                State::ObjectValue => {
                    self.stack.set(State::ObjectValueSep);
                    self.stack.push(State::Value);
                }

                State::ObjectValueSep => {
                    cur.skip_whitespace();
                    let Some(b) = cur.peek() else {
                        return Ok(ParseStatus::NeedMoreInput);
                    };
                    match b {
                        b',' => {
                            cur.bump();
                            self.stack.set(State::ObjectName);
                        }
                        b'}' => {
                            cur.bump();
                            self.stack.pop();
                        }
                        _ => return Err(invalid_at(cur)),
                    }
                }

                State::ArrayFirstValue => {
                    cur.skip_whitespace();
                    let Some(b) = cur.peek() else {
                        return Ok(ParseStatus::NeedMoreInput);
                    };
                    if b == b']' {
                        cur.bump();
                        self.stack.pop();
                    } else {
                        self.stack.set(State::ArrayValue);
                    }
                }

                State::ArrayValue => {
                    self.stack.set(State::ArrayValueSep);
                    self.stack.push(State::Value);
                }

                State::ArrayValueSep => {
                    cur.skip_whitespace();
                    let Some(b) = cur.peek() else {
                        return Ok(ParseStatus::NeedMoreInput);
                    };
                    match b {
                        b',' => {
                            cur.bump();
                            self.stack.set(State::ArrayValue);
                        }
                        b']' => {
                            cur.bump();
                            self.stack.pop();
                        }
                        _ => return Err(invalid_at(cur)),
                    }
                }

                State::Finish => {
                    cur.skip_whitespace();
                    return match cur.peek() {
                        None => Ok(ParseStatus::Complete),
                        Some(byte) => Err(ParseError::TrailingByte {
                            byte,
                            offset: cur.offset(),
                        }),
                    };
                }
            }
        }
    }

    /// The value position: resume an interrupted token, or dispatch on the
    /// first byte of a fresh one.
    fn value(&mut self, cur: &mut Cursor<'_>) -> Result<ValueProgress, ParseError> {
        match self.pending {
            Pending::Str => return Ok(progress(self.run_string(cur)?)),
            Pending::Number => return Ok(progress(self.run_number(cur)?)),
            Pending::Keyword => return Ok(progress(self.run_keyword(cur)?)),
            Pending::None => {}
        }
        cur.skip_whitespace();
        let Some(b) = cur.peek() else {
            return Ok(ValueProgress::NeedMoreInput);
        };
        match b {
            b'{' => {
                cur.bump();
                self.stack.set(State::ObjectFirstName);
                Ok(ValueProgress::Opened)
            }
            b'[' => {
                cur.bump();
                self.stack.set(State::ArrayFirstValue);
                Ok(ValueProgress::Opened)
            }
            b'"' => {
                cur.bump();
                self.string.begin();
                self.pending = Pending::Str;
                Ok(progress(self.run_string(cur)?))
            }
            b'-' | b'0'..=b'9' => {
                cur.bump();
                self.number.begin(b);
                self.pending = Pending::Number;
                Ok(progress(self.run_number(cur)?))
            }
            b't' => self.start_keyword(cur, b"true"),
            b'f' => self.start_keyword(cur, b"false"),
            b'n' => self.start_keyword(cur, b"null"),
            _ => Err(invalid_at(cur)),
        }
    }

    /// The member name position: whitespace, a quote, then a string literal.
    fn name(&mut self, cur: &mut Cursor<'_>) -> Result<Step, ParseError> {
        if self.pending == Pending::Str {
            return self.run_string(cur);
        }
        cur.skip_whitespace();
        let Some(b) = cur.peek() else {
            return Ok(Step::NeedMoreInput);
        };
        if b != b'"' {
            return Err(invalid_at(cur));
        }
        cur.bump();
        self.string.begin();
        self.pending = Pending::Str;
        self.run_string(cur)
    }

    fn start_keyword(
        &mut self,
        cur: &mut Cursor<'_>,
        literal: &'static [u8],
    ) -> Result<ValueProgress, ParseError> {
        cur.bump();
        self.keyword.begin(literal);
        self.pending = Pending::Keyword;
        Ok(progress(self.run_keyword(cur)?))
    }

    fn run_string(&mut self, cur: &mut Cursor<'_>) -> Result<Step, ParseError> {
        match self.string.decode(cur, &mut self.buffer) {
            Ok(Step::Complete) => {
                self.pending = Pending::None;
                Ok(Step::Complete)
            }
            Ok(Step::NeedMoreInput) => Ok(Step::NeedMoreInput),
            Err(()) => Err(invalid_at(cur)),
        }
    }

    fn run_number(&mut self, cur: &mut Cursor<'_>) -> Result<Step, ParseError> {
        match self.number.scan(cur) {
            Ok(Step::Complete) => {
                self.pending = Pending::None;
                Ok(Step::Complete)
            }
            Ok(Step::NeedMoreInput) => Ok(Step::NeedMoreInput),
            Err(()) => Err(invalid_at(cur)),
        }
    }

    fn run_keyword(&mut self, cur: &mut Cursor<'_>) -> Result<Step, ParseError> {
        match self.keyword.scan(cur) {
            Ok(Step::Complete) => {
                self.pending = Pending::None;
                Ok(Step::Complete)
            }
            Ok(Step::NeedMoreInput) => Ok(Step::NeedMoreInput),
            Err(()) => Err(invalid_at(cur)),
        }
    }
}

impl Default for ChunkParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Reset for ChunkParser {
    /// Reset the parser so it can validate another document. Stack and
    /// buffer capacity are retained.
    fn reset(&mut self) {
        self.stack.clear();
        self.buffer.clear();
        self.pending = Pending::None;
        self.consumed = 0;
        self.failed = None;
    }
}

fn progress(step: Step) -> ValueProgress {
    match step {
        Step::Complete => ValueProgress::Complete,
        Step::NeedMoreInput => ValueProgress::NeedMoreInput,
    }
}

/// The scanners leave the offending byte unconsumed, so the cursor position
/// is the error position.
fn invalid_at(cur: &Cursor<'_>) -> ParseError {
    let byte = cur.peek().expect("offending byte stays in the chunk");
    ParseError::UnexpectedByte {
        byte,
        offset: cur.offset(),
    }
}
