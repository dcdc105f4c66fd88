use std::io::BufRead;

use thiserror::Error;

use crate::status::{ParseError, ParseStatus};
use crate::ChunkParser;

/// An error that can happen while validating from a reader.
#[derive(Error, Debug)]
pub enum ValidateError {
    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Validate a complete JSON document held in a single byte slice.
///
/// ```
/// use chunkson::validate;
///
/// assert!(validate(br#"{"name": "Elvis"}"#).is_ok());
/// assert!(validate(b"[1, 2, ]").is_err());
/// ```
pub fn validate(json: &[u8]) -> Result<(), ParseError> {
    let mut parser = ChunkParser::new();
    parser.parse_chunk(json)?;
    parser.finish()
}

/// Validate a JSON document read from a [`BufRead`]. The document is fed to
/// the parser one internal buffer at a time; it is never held in memory as
/// a whole. This is useful for validating a file or a network stream.
///
/// ```
/// use std::fs::File;
/// use std::io::BufReader;
///
/// use chunkson::validate_reader;
///
/// let file = File::open("tests/fixtures/pass1.txt").unwrap();
/// assert!(validate_reader(BufReader::new(file)).is_ok());
/// ```
pub fn validate_reader<R>(mut reader: R) -> Result<(), ValidateError>
where
    R: BufRead,
{
    let mut parser = ChunkParser::new();
    loop {
        let chunk = reader.fill_buf()?;
        if chunk.is_empty() {
            parser.finish()?;
            return Ok(());
        }
        let status = parser.parse_chunk(chunk);
        let len = chunk.len();
        reader.consume(len);
        match status? {
            ParseStatus::Complete => return Ok(()),
            ParseStatus::NeedMoreInput => {}
        }
    }
}
