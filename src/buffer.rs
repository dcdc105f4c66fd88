/// The initial buffer capacity in bytes. Growth beyond this is geometric.
const INITIAL_BYTES: usize = 4096;

/// The buffer decoded string contents are written into. Escape sequences are
/// resolved and surrogate pairs combined before anything lands here, so the
/// contents are always well-formed UTF-8. Each completed string literal is
/// followed by a NUL terminator; the buffer is cleared on initialization but
/// not between successive strings of the same document.
pub(crate) struct DecodeBuffer {
    bytes: Vec<u8>,
}

impl DecodeBuffer {
    pub fn new() -> Self {
        DecodeBuffer {
            bytes: Vec::with_capacity(INITIAL_BYTES),
        }
    }

    pub fn write(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    pub fn push(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    /// Append the UTF-8 encoding of a scalar value. Taking a `char` rules
    /// out surrogates, which the escape decoder filters before combining.
    pub fn write_char(&mut self, c: char) {
        let mut utf8 = [0u8; 4];
        self.write(c.encode_utf8(&mut utf8).as_bytes());
    }

    /// Terminate the string that just completed.
    pub fn terminate(&mut self) {
        self.bytes.push(0);
    }

    /// Reset the writable position. Capacity is retained.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The heap footprint of the buffer, for memory accounting.
    pub fn heap_size(&self) -> usize {
        self.bytes.capacity()
    }
}
