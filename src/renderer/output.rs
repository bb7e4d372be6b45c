//! Frame buffer for the line renderer.
//!
//! crossterm commands are queued here and the whole frame goes out with one
//! `write_all`.

use std::io::{self, Write};

#[derive(Debug, Default)]
pub(crate) struct OutputBuffer {
    bytes: Vec<u8>,
}

impl OutputBuffer {
    pub(crate) fn new() -> Self {
        Self {
            bytes: Vec::with_capacity(4096),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Hand the queued frame to `writer` and start the next one empty.
    pub(crate) fn flush_to<W: Write>(&mut self, writer: &mut W) -> io::Result<()> {
        if self.bytes.is_empty() {
            return Ok(());
        }
        writer.write_all(&self.bytes)?;
        writer.flush()?;
        self.bytes.clear();
        Ok(())
    }
}

impl Write for OutputBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    // Nothing leaves the buffer until flush_to.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flush_to_drains() {
        let mut buffer = OutputBuffer::new();
        write!(buffer, "hello").unwrap();
        assert_eq!(buffer.len(), 5);

        let mut sink = Vec::new();
        buffer.flush_to(&mut sink).unwrap();
        assert_eq!(sink, b"hello");
        assert_eq!(buffer.len(), 0);

        // Empty buffer writes nothing.
        buffer.flush_to(&mut sink).unwrap();
        assert_eq!(sink, b"hello");
    }
}
