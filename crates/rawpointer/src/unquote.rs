//! Decoding of JSON string literals straight from document bytes.

use alloc::{borrow::Cow, string::String};

use crate::{error::LiteralError, escape_buffer::UnicodeEscapeBuffer};

const REPLACEMENT: char = char::REPLACEMENT_CHARACTER;

/// Decodes a JSON string literal, quotes included, into its text.
///
/// Literals without escapes borrow from `lit`. Invalid UTF-8 and unpaired
/// surrogate escapes decode to U+FFFD instead of failing.
///
/// # Errors
///
/// Returns a [`LiteralError`] when `lit` is not a well-formed literal.
///
/// ```rust
/// use rawpointer::unquote::decode_literal;
///
/// assert_eq!(decode_literal(br#""plain""#).unwrap(), "plain");
/// assert_eq!(decode_literal(br#""a\/b\u00e9""#).unwrap(), "a/bé");
/// assert!(decode_literal(b"bare").is_err());
/// ```
pub fn decode_literal(lit: &[u8]) -> Result<Cow<'_, str>, LiteralError> {
    let [b'"', body @ .., b'"'] = lit else {
        return Err(LiteralError::NotQuoted);
    };

    let first_special = body
        .iter()
        .position(|&b| b == b'\\' || b == b'"' || b < 0x20);
    match first_special {
        None => match core::str::from_utf8(body) {
            Ok(text) => Ok(Cow::Borrowed(text)),
            Err(err) => unescape(body, err.valid_up_to()).map(Cow::Owned),
        },
        Some(pos) => unescape(body, pos).map(Cow::Owned),
    }
}

/// Slow path. `body[..clean]` holds no escapes, quotes or control bytes.
fn unescape(body: &[u8], clean: usize) -> Result<String, LiteralError> {
    let mut out = String::with_capacity(body.len() + 8);
    out.push_str(&String::from_utf8_lossy(&body[..clean]));

    let mut i = clean;
    while i < body.len() {
        match body[i] {
            b'\\' => {
                let Some(&escape) = body.get(i + 1) else {
                    return Err(LiteralError::TruncatedEscape(i + 1));
                };
                let simple = match escape {
                    b'"' => '"',
                    b'\\' => '\\',
                    b'/' => '/',
                    b'b' => '\u{8}',
                    b'f' => '\u{c}',
                    b'n' => '\n',
                    b'r' => '\r',
                    b't' => '\t',
                    b'u' => {
                        let (ch, len) = unicode_escape(body, i)?;
                        out.push(ch);
                        i += len;
                        continue;
                    }
                    other => return Err(LiteralError::InvalidEscape(char::from(other))),
                };
                out.push(simple);
                i += 2;
            }
            b'"' => return Err(LiteralError::UnescapedQuote(i + 1)),
            b if b < 0x20 => return Err(LiteralError::ControlCharacter(b)),
            b if b.is_ascii() => {
                out.push(char::from(b));
                i += 1;
            }
            _ => {
                let (ch, len) = bstr::decode_utf8(&body[i..]);
                out.push(ch.unwrap_or(REPLACEMENT));
                i += len;
            }
        }
    }
    Ok(out)
}

/// Decodes the `\u` escape at `body[at]`, pairing it with a following low
/// surrogate escape when there is one. Returns the character and the number
/// of bytes consumed.
fn unicode_escape(body: &[u8], at: usize) -> Result<(char, usize), LiteralError> {
    let unit = hex_unit(body, at)?;
    if !is_surrogate(unit) {
        return Ok((char::from_u32(u32::from(unit)).unwrap_or(REPLACEMENT), 6));
    }

    let next = at + 6;
    if is_high_surrogate(unit) && body[next..].starts_with(b"\\u") {
        if let Ok(low) = hex_unit(body, next) {
            if let Some(Ok(ch)) = char::decode_utf16([unit, low]).next() {
                return Ok((ch, 12));
            }
        }
    }
    // Unpaired. The following escape, if any, is decoded on its own.
    Ok((REPLACEMENT, 6))
}

/// Reads the four hex digits of the `\u` escape whose backslash is at
/// `body[at]`.
fn hex_unit(body: &[u8], at: usize) -> Result<u16, LiteralError> {
    let Some(digits) = body.get(at + 2..at + 6) else {
        return Err(LiteralError::TruncatedEscape(at + 1));
    };
    let mut buf = UnicodeEscapeBuffer::new();
    let mut unit = None;
    for &b in digits {
        unit = buf.feed(b)?;
    }
    unit.ok_or(LiteralError::TruncatedEscape(at + 1))
}

#[inline]
fn is_surrogate(unit: u16) -> bool {
    (0xD800..=0xDFFF).contains(&unit)
}

#[inline]
fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}
