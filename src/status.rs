use thiserror::Error;

/// Outcome of feeding one chunk to
/// [`ChunkParser::parse_chunk()`](crate::ChunkParser::parse_chunk).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParseStatus {
    /// The document is complete and the chunk was fully consumed, apart from
    /// trailing whitespace.
    Complete,

    /// The chunk was consumed without reaching a verdict. Feed another chunk,
    /// or call [`ChunkParser::finish()`](crate::ChunkParser::finish) if there
    /// is no more input.
    NeedMoreInput,
}

/// An error that can happen while validating a JSON document. Offsets are
/// byte positions within the chunk in which the error was detected; add
/// [`ChunkParser::consumed()`](crate::ChunkParser::consumed) from before the
/// feed to obtain the position within the whole document.
///
/// All three errors are terminal: the parser refuses further input until it
/// is reset.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// A byte violates the JSON grammar or UTF-8 well-formedness.
    #[error("unexpected byte '{}' at {offset}", display_byte(.byte))]
    UnexpectedByte { byte: u8, offset: usize },

    /// A complete document was followed by something other than whitespace.
    #[error("trailing byte '{}' after complete document at {offset}", display_byte(.byte))]
    TrailingByte { byte: u8, offset: usize },

    /// The input ended in the middle of a production.
    #[error("unexpected end of input")]
    UnexpectedEof,
}

fn display_byte(byte: &u8) -> char {
    char::from(*byte)
}
