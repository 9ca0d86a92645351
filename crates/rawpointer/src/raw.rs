use core::{fmt, ops::Range};

use bstr::BStr;

/// A JSON value located inside a document, as the bytes that spell it.
///
/// The span never includes whitespace around the value. Two `RawValue`s are
/// equal when their bytes are equal, wherever they came from.
#[derive(Clone, Copy)]
pub struct RawValue<'a> {
    doc: &'a [u8],
    start: usize,
    end: usize,
}

impl<'a> RawValue<'a> {
    pub(crate) fn new(doc: &'a [u8], start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= doc.len());
        Self { doc, start, end }
    }

    /// The whole document, untouched.
    pub(crate) fn whole(doc: &'a [u8]) -> Self {
        Self::new(doc, 0, doc.len())
    }

    /// The bytes of the value.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.doc[self.start..self.end]
    }

    /// Where the value sits in the document it was found in.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The value as text, if it is valid UTF-8.
    #[must_use]
    pub fn as_str(&self) -> Option<&'a str> {
        core::str::from_utf8(self.as_bytes()).ok()
    }

    /// Deserializes the value.
    ///
    /// # Errors
    ///
    /// Whatever `serde_json` reports for these bytes and `T`.
    #[cfg(feature = "serde")]
    pub fn decode<T>(&self) -> Result<T, crate::Error>
    where
        T: serde::Deserialize<'a>,
    {
        Ok(serde_json::from_slice(self.as_bytes())?)
    }
}

impl fmt::Debug for RawValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawValue")
            .field("range", &self.range())
            .field("bytes", &BStr::new(self.as_bytes()))
            .finish()
    }
}

impl fmt::Display for RawValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(BStr::new(self.as_bytes()), f)
    }
}

impl AsRef<[u8]> for RawValue<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for RawValue<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for RawValue<'_> {}

impl PartialEq<[u8]> for RawValue<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for RawValue<'_> {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for RawValue<'_> {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.as_bytes() == other.as_slice()
    }
}

impl PartialEq<str> for RawValue<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for RawValue<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}
