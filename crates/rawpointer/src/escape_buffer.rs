//! Accumulates the four hex digits of a `\uXXXX` escape without buffering
//! bytes.
//!
//! The result is a UTF-16 code unit rather than a `char`: a high surrogate
//! only becomes a scalar value together with the escape that follows it, and
//! pairing is left to the caller.

use crate::error::LiteralError;

/// Accumulates up to four hexadecimal digits into a UTF-16 code unit.
#[derive(Debug, Default)]
pub(crate) struct UnicodeEscapeBuffer {
    acc: u32,
    len: u8,
}

impl UnicodeEscapeBuffer {
    pub fn new() -> Self {
        Self { acc: 0, len: 0 }
    }

    /// Clears any accumulated digits.
    pub fn reset(&mut self) {
        self.acc = 0;
        self.len = 0;
    }

    /// Value of a single ASCII hex digit.
    #[inline]
    fn hex_val(b: u8) -> Option<u32> {
        match b {
            b'0'..=b'9' => Some(u32::from(b - b'0')),
            b'a'..=b'f' => Some(u32::from(b - b'a') + 10),
            b'A'..=b'F' => Some(u32::from(b - b'A') + 10),
            _ => None,
        }
    }

    /// Feeds one hex digit.
    ///
    /// Returns `Ok(None)` until the fourth digit arrives, then the decoded
    /// code unit; the buffer resets itself after that. A non-hex byte is an
    /// error.
    pub fn feed(&mut self, b: u8) -> Result<Option<u16>, LiteralError> {
        let d = Self::hex_val(b).ok_or(LiteralError::InvalidUnicodeEscapeChar(char::from(b)))?;

        self.acc = (self.acc << 4) | d;
        self.len += 1;

        if self.len < 4 {
            return Ok(None);
        }

        let code = self.acc;
        self.reset();

        // Four hex digits never exceed 0xFFFF.
        Ok(u16::try_from(code).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::UnicodeEscapeBuffer;
    use crate::error::LiteralError;

    fn decode(digits: &[u8]) -> Result<Option<u16>, LiteralError> {
        let mut buf = UnicodeEscapeBuffer::new();
        let mut last = Ok(None);
        for &b in digits {
            last = buf.feed(b);
            last?;
        }
        last
    }

    #[test]
    fn basic_decoding() {
        let mut buf = UnicodeEscapeBuffer::new();
        assert_eq!(buf.feed(b'0').unwrap(), None);
        assert_eq!(buf.feed(b'0').unwrap(), None);
        assert_eq!(buf.feed(b'4').unwrap(), None);
        assert_eq!(buf.feed(b'1').unwrap(), Some(0x41));
    }

    #[test]
    fn mixed_case_hex() {
        assert_eq!(decode(b"AbCd").unwrap(), Some(0xABCD));
        assert_eq!(decode(b"ffff").unwrap(), Some(0xFFFF));
    }

    #[test]
    fn surrogates_are_plain_code_units() {
        assert_eq!(decode(b"D83D").unwrap(), Some(0xD83D));
        assert_eq!(decode(b"dE00").unwrap(), Some(0xDE00));
    }

    #[test]
    fn resets_after_each_escape() {
        let mut buf = UnicodeEscapeBuffer::new();
        for &b in b"0041" {
            buf.feed(b).unwrap();
        }
        assert_eq!(buf.feed(b'0').unwrap(), None);

        buf.reset();
        for &b in b"004" {
            assert_eq!(buf.feed(b).unwrap(), None);
        }
        assert_eq!(buf.feed(b'2').unwrap(), Some(0x42));
    }

    #[test]
    fn invalid_hex_error() {
        let mut buf = UnicodeEscapeBuffer::new();
        let err = buf.feed(b'G').unwrap_err();
        assert_eq!(err, LiteralError::InvalidUnicodeEscapeChar('G'));
    }
}
