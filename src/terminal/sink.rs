//! `FrameSink`: text output abstraction for the animation loop.

use std::io;

/// Clear the entire screen.
pub const CLEAR_SCREEN: &str = "\x1b[2J";

/// Move the cursor to the top-left corner.
pub const MOVE_HOME: &str = "\x1b[H";

/// Clear the screen and home the cursor in one write.
pub const CLEAR_AND_HOME: &str = "\x1b[2J\x1b[H";

/// Anything that accepts text writes and a best-effort flush.
///
/// A blanket impl covers every [`io::Write`], which is what the binary
/// uses (stdout) and what tests use (`Vec<u8>`).
pub trait FrameSink {
    /// Write a chunk of text to the sink.
    fn write_str(&mut self, text: &str) -> io::Result<()>;

    /// Flush buffered output. The default is a no-op for sinks without
    /// meaningful buffering.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<W: io::Write> FrameSink for W {
    #[inline]
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.write_all(text.as_bytes())
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        io::Write::flush(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_records_writes() {
        let mut sink: Vec<u8> = Vec::new();
        sink.write_str(CLEAR_AND_HOME).unwrap();
        sink.write_str("hello").unwrap();
        FrameSink::flush(&mut sink).unwrap();

        assert_eq!(String::from_utf8(sink).unwrap(), "\x1b[2J\x1b[Hhello");
    }

    #[test]
    fn test_clear_and_home_is_clear_then_home() {
        assert_eq!(CLEAR_AND_HOME, format!("{CLEAR_SCREEN}{MOVE_HOME}"));
    }
}
