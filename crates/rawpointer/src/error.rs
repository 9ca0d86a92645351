use alloc::string::String;

use thiserror::Error;

/// Why a byte could not extend the JSON grammar.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    /// The byte is not valid in the current automaton state. `context`
    /// describes what the scanner was looking for.
    #[error("invalid character {} {context}", DisplayByte(.byte))]
    InvalidCharacter {
        /// The offending byte.
        byte: u8,
        /// What the scanner expected at this point, e.g. "looking for
        /// beginning of value".
        context: &'static str,
    },
    /// The document ended inside a value.
    #[error("unexpected end of JSON input")]
    UnexpectedEndOfInput,
    /// The document is zero bytes long.
    #[error("empty JSON input")]
    EmptyInput,
    /// Containers nest deeper than the configured limit.
    #[error("exceeded max nesting depth of {0}")]
    DepthLimitExceeded(usize),
}

/// A [`SyntaxError`] located at a byte offset of the document.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{source} at offset {offset}")]
pub struct ScanError {
    /// What went wrong.
    pub source: SyntaxError,
    /// Byte offset into the document.
    pub offset: usize,
}

impl ScanError {
    pub(crate) fn new(source: SyntaxError, offset: usize) -> Self {
        Self { source, offset }
    }
}

/// A malformed JSON string literal.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LiteralError {
    /// The span is not delimited by double quotes.
    #[error("string literal is not enclosed in quotes")]
    NotQuoted,
    /// A `\` or `\u` escape is cut off by the end of the literal.
    #[error("truncated escape sequence at offset {0}")]
    TruncatedEscape(usize),
    /// A `\u` escape contains a non-hex character.
    #[error("invalid unicode escape sequence at character: '{0}'")]
    InvalidUnicodeEscapeChar(char),
    /// `\` is followed by a character that does not form an escape.
    #[error("invalid escape character '{0}'")]
    InvalidEscape(char),
    /// A raw control byte (below U+0020) appears inside the literal.
    #[error("control character {0:#04x} in string literal")]
    ControlCharacter(u8),
    /// A `"` appears inside the literal without a preceding backslash.
    #[error("unescaped quote at offset {0}")]
    UnescapedQuote(usize),
}

/// Pointer text that cannot be applied.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointerError {
    /// A non-empty pointer must start with `/`.
    #[error("JSON pointer {0:?} does not start with '/'")]
    MissingLeadingSlash(String),
    /// The pointer continues past a string, number, boolean or null.
    #[error("JSON pointer {pointer:?} indexes into a scalar at depth {depth}")]
    IndexIntoScalar {
        /// The pointer as given.
        pointer: String,
        /// Number of tokens resolved before reaching the scalar.
        depth: usize,
    },
    /// A token that is not an array index was applied to an array.
    #[error("JSON pointer {pointer:?} applies non-index token {token:?} to an array")]
    NotAnIndex {
        /// The pointer as given.
        pointer: String,
        /// The offending reference token, unescaped.
        token: String,
    },
}

/// Any failure produced by this crate.
///
/// A pointer that is well formed but absent from the document is not an
/// error; lookups return `Ok(None)` for it.
#[derive(Debug, Error)]
pub enum Error {
    /// The document is not valid JSON.
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),
    /// A string literal could not be decoded.
    #[error("literal error: {0}")]
    Literal(#[from] LiteralError),
    /// The pointer text is malformed or misapplied.
    #[error("pointer error: {0}")]
    Pointer(#[from] PointerError),
    /// The matched value could not be decoded into the requested type.
    #[cfg(feature = "serde")]
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

struct DisplayByte<'a>(&'a u8);

impl core::fmt::Display for DisplayByte<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self.0 {
            b'\'' => f.write_str("'\\''"),
            b'"' => f.write_str("'\"'"),
            b if b.is_ascii_graphic() || b == b' ' => write!(f, "'{}'", b as char),
            b => write!(f, "{b:#04x}"),
        }
    }
}
