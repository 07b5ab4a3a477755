use thiserror::Error;

/// Longest line kept, excluding the terminator.
pub const LINE_CAPACITY: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("line longer than {} bytes discarded", LINE_CAPACITY)]
    Overflow,
    #[error("line is not valid UTF-8")]
    InvalidUtf8,
}

/// Assembles text lines from bytes that arrive in arbitrary chunks.
///
/// A line ends at `\r` or `\n`; empty lines are skipped, so `\r\n` endings
/// produce a single line. Bytes past [`LINE_CAPACITY`] are dropped along
/// with the rest of their line.
pub struct LineBuffer {
    buf: [u8; LINE_CAPACITY],
    len: usize,
    overflowed: bool,
}

impl LineBuffer {
    pub const fn new() -> Self {
        LineBuffer {
            buf: [0; LINE_CAPACITY],
            len: 0,
            overflowed: false,
        }
    }

    /// Feeds one byte, returning the line it completes, if any.
    pub fn push(&mut self, byte: u8) -> Option<Result<&str, LineError>> {
        if byte == b'\r' || byte == b'\n' {
            let len = self.len;
            self.len = 0;
            if self.overflowed {
                self.overflowed = false;
                return Some(Err(LineError::Overflow));
            }
            if len == 0 {
                return None;
            }
            let line = core::str::from_utf8(&self.buf[..len]).map_err(|_| LineError::InvalidUtf8);
            return Some(line);
        }

        if self.overflowed {
            return None;
        }
        if self.len == LINE_CAPACITY {
            self.overflowed = true;
            return None;
        }
        self.buf[self.len] = byte;
        self.len += 1;
        None
    }

    /// Bytes held for the line in progress.
    pub fn pending(&self) -> usize {
        self.len
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        LineBuffer::new()
    }
}
