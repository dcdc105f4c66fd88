//! # Chunkson
//!
//! An incremental, push-style JSON validator.
//!
//! Chunkson checks that a JSON text conforms to RFC 8259 without building a
//! document tree. The text is supplied as an arbitrary sequence of byte
//! chunks; the parser consumes each chunk as far as it can and suspends with
//! its full grammatical position preserved, so a chunk boundary can fall
//! anywhere — between tokens, inside a string escape, or in the middle of a
//! multi-byte UTF-8 character. Feeding a document in one piece or in a
//! thousand pieces produces the same verdict.
//!
//! ## Examples
//!
//! ### Validating chunk by chunk
//!
//! Push chunks into a [`ChunkParser`] as they arrive. The parser answers
//! [`NeedMoreInput`](ParseStatus::NeedMoreInput) until the document is
//! complete.
//!
//! ```
//! use chunkson::{ChunkParser, ParseStatus};
//!
//! let chunks: [&[u8]; 2] = [b" [  ", b" 1 ]"];
//!
//! let mut parser = ChunkParser::new();
//! assert_eq!(
//!     parser.parse_chunk(chunks[0]).unwrap(),
//!     ParseStatus::NeedMoreInput
//! );
//! assert_eq!(
//!     parser.parse_chunk(chunks[1]).unwrap(),
//!     ParseStatus::Complete
//! );
//! ```
//!
//! ### Reporting errors
//!
//! An invalid byte is reported with its position in the chunk in which it
//! was found, in the same shape the parser's other errors use.
//!
//! ```
//! use chunkson::{validate, ParseError};
//!
//! let err = validate(b"{ : }").unwrap_err();
//! assert_eq!(err.to_string(), "unexpected byte ':' at 2");
//! assert_eq!(err, ParseError::UnexpectedByte { byte: b':', offset: 2 });
//! ```
//!
//! ### Validating a reader
//!
//! [`validate_reader`] drives the parser from any [`BufRead`](std::io::BufRead)
//! without loading the document into memory. With the `tokio` feature
//! enabled, [`tokio::validate_reader`](crate::tokio::validate_reader) does
//! the same for asynchronous readers.
//!
//! ### Reusing a parser
//!
//! A parser handles a single document. [`Reset::reset`] restores it to its
//! freshly constructed state, retaining the allocated stack and buffer.
//!
//! ```
//! use chunkson::{ChunkParser, ParseStatus, Reset};
//!
//! let mut parser = ChunkParser::new();
//! assert_eq!(parser.parse_chunk(b"true").unwrap(), ParseStatus::Complete);
//!
//! parser.reset();
//! assert_eq!(parser.parse_chunk(b"false").unwrap(), ParseStatus::Complete);
//! ```
mod buffer;
mod cursor;
mod number;
mod parser;
mod reset;
mod stack;
mod status;
mod string;
mod validate;

#[cfg(feature = "tokio")]
pub mod tokio;

pub use parser::ChunkParser;
pub use reset::Reset;
pub use status::{ParseError, ParseStatus};
pub use validate::{validate, validate_reader, ValidateError};
