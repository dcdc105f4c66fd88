use chunkson::{ChunkParser, ParseError, Reset};

#[macro_use]
extern crate afl;

/// Feed `data` in chunks of `chunk_size` and reduce the verdict to a value
/// that does not depend on the chunking. Error offsets are chunk-relative,
/// so they are rebased onto the document via `consumed()` before comparing.
fn outcome(parser: &mut ChunkParser, data: &[u8], chunk_size: usize) -> Result<bool, (u8, usize)> {
    for chunk in data.chunks(chunk_size.max(1)) {
        match parser.parse_chunk(chunk) {
            Ok(_) => {}
            Err(ParseError::UnexpectedByte { byte, .. })
            | Err(ParseError::TrailingByte { byte, .. }) => {
                return Err((byte, parser.consumed()));
            }
            Err(ParseError::UnexpectedEof) => unreachable!(),
        }
    }
    Ok(parser.finish().is_ok())
}

fn main() {
    fuzz!(|data: &[u8]| {
        let Some((&first, doc)) = data.split_first() else {
            return;
        };

        let mut parser = ChunkParser::new();
        let whole = outcome(&mut parser, doc, doc.len().max(1));

        // the first input byte picks a chunking; the verdict must not change
        parser.reset();
        let split = outcome(&mut parser, doc, first as usize + 1);
        assert_eq!(whole, split);
    });
}
