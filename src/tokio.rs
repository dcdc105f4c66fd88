//! Validation drivers for asynchronous readers.

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

use crate::status::ParseStatus;
use crate::validate::ValidateError;
use crate::ChunkParser;

/// Validate a JSON document read from an asynchronous [`BufReader`]. The
/// asynchronous twin of [`validate_reader`](crate::validate_reader).
pub async fn validate_reader<T>(reader: &mut BufReader<T>) -> Result<(), ValidateError>
where
    T: AsyncRead + Unpin,
{
    let mut parser = ChunkParser::new();
    loop {
        let chunk = reader.fill_buf().await?;
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
