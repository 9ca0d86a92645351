//! JSON Pointer (RFC 6901) lookups over raw JSON bytes.
//!
//! Values are located by scanning the document byte by byte while tracking
//! the path of the value under the cursor. Nothing is parsed into a tree: a
//! match comes back as a [`RawValue`], the exact span of the source buffer
//! that spells the value.
//!
//! ```rust
//! let doc = br#"{"foo": ["bar", "baz"], "g": {"n": {"r": "x"}}}"#;
//!
//! assert_eq!(rawpointer::find(doc, "/foo/1")?.unwrap(), r#""baz""#);
//!
//! let found = rawpointer::find_many(doc, &["/g/n/r", "/foo/0", "/nope"])?;
//! assert_eq!(found.len(), 2);
//! assert_eq!(found["/g/n/r"], r#""x""#);
//!
//! assert_eq!(
//!     rawpointer::list_pointers(doc)?,
//!     ["", "/foo", "/foo/0", "/foo/1", "/g", "/g/n", "/g/n/r"]
//! );
//! # Ok::<(), rawpointer::Error>(())
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod escape_buffer;
mod extract;
mod find;
mod literal;
mod options;
mod path;
pub mod pointer;
mod raw;
pub mod scanner;
mod tracker;
pub mod unquote;
mod walk;

#[cfg(test)]
mod tests;

use alloc::{collections::BTreeMap, string::String, vec::Vec};

pub use error::{Error, LiteralError, PointerError, ScanError, SyntaxError};
pub use find::Finder;
pub use options::ScanOptions;
pub use path::{Path, PathItem, PathItemFrom};
pub use raw::RawValue;

#[doc(hidden)]
pub use alloc::vec;

/// Finds the value `pointer` refers to, with default [`ScanOptions`].
///
/// See [`Finder::find`].
///
/// # Errors
///
/// See [`Finder::find`].
pub fn find<'a>(doc: &'a [u8], pointer: &str) -> Result<Option<RawValue<'a>>, Error> {
    Finder::default().find(doc, pointer)
}

/// Finds several pointers in one pass, with default [`ScanOptions`].
///
/// See [`Finder::find_many`].
///
/// # Errors
///
/// See [`Finder::find_many`].
pub fn find_many<'a, S: AsRef<str>>(
    doc: &'a [u8],
    pointers: &[S],
) -> Result<BTreeMap<String, RawValue<'a>>, Error> {
    Finder::default().find_many(doc, pointers)
}

/// Lists every pointer in the document, with default [`ScanOptions`].
///
/// # Errors
///
/// See [`Finder::list_pointers`].
pub fn list_pointers(doc: &[u8]) -> Result<Vec<String>, Error> {
    Finder::default().list_pointers(doc)
}

/// Finds `pointer` and deserializes the value, with default [`ScanOptions`].
///
/// ```rust
/// #[derive(serde::Deserialize, Debug, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let doc = br#"{"shapes": [{"x": 1, "y": 2}]}"#;
/// let p: Option<Point> = rawpointer::find_decode(doc, "/shapes/0")?;
/// assert_eq!(p, Some(Point { x: 1, y: 2 }));
/// # Ok::<(), rawpointer::Error>(())
/// ```
///
/// # Errors
///
/// See [`Finder::find_decode`].
#[cfg(feature = "serde")]
pub fn find_decode<'a, T>(doc: &'a [u8], pointer: &str) -> Result<Option<T>, Error>
where
    T: serde::Deserialize<'a>,
{
    Finder::default().find_decode(doc, pointer)
}

/// Builds a [`Path`] from a list of keys and indices.
///
/// Integers become [`PathItem::Index`]; negative integers clamp to `0`.
///
/// ```rust
/// extern crate alloc;
/// # use rawpointer::{path, PathItem};
/// let p = path![0, "foo", 2];
/// assert_eq!(
///     p,
///     vec![
///         PathItem::Index(0),
///         PathItem::Key("foo".into()),
///         PathItem::Index(2)
///     ]
/// );
/// assert_eq!(rawpointer::pointer::encode(&p), "/0/foo/2");
/// ```
#[macro_export]
macro_rules! path {
    ( $( $elem:expr ),* $(,)? ) => {{
        #[allow(unused_imports)]
        use $crate::PathItemFrom;
        $crate::vec![$($crate::PathItem::from_path_component($elem)),*]
    }};
}
