use alloc::{borrow::Cow, string::String, vec::Vec};
use core::fmt;

use crate::pointer::parse_index;

/// A location inside a JSON document, outermost segment first.
pub type Path<'a> = Vec<PathItem<'a>>;

/// One segment of a [`Path`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathItem<'a> {
    /// A member of a JSON object, by decoded key.
    Key(Cow<'a, str>),
    /// An element of a JSON array.
    Index(usize),
}

impl PathItem<'_> {
    /// The key, for an object member.
    #[must_use]
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Self::Key(k) => Some(k),
            Self::Index(_) => None,
        }
    }

    #[must_use]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Key(_) => None,
            Self::Index(i) => Some(*i),
        }
    }

    /// Detaches the segment from the buffer its key borrows from.
    #[must_use]
    pub fn into_owned(self) -> PathItem<'static> {
        match self {
            Self::Key(k) => PathItem::Key(Cow::Owned(k.into_owned())),
            Self::Index(i) => PathItem::Index(i),
        }
    }

    /// Whether a decoded reference token selects this segment.
    ///
    /// Pointer text carries no kind, so `"3"` selects both `Key("3")` and
    /// `Index(3)`, while `"03"` only selects `Key("03")`.
    #[must_use]
    pub fn matches_token(&self, token: &str) -> bool {
        match self {
            Self::Key(k) => k == token,
            Self::Index(i) => parse_index(token) == Some(*i),
        }
    }
}

impl fmt::Display for PathItem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(k) => f.write_str(&crate::pointer::escape_token(k)),
            Self::Index(i) => write!(f, "{i}"),
        }
    }
}

impl<'a> From<&'a str> for PathItem<'a> {
    fn from(s: &'a str) -> Self {
        Self::Key(Cow::Borrowed(s))
    }
}

impl From<String> for PathItem<'_> {
    fn from(s: String) -> Self {
        Self::Key(Cow::Owned(s))
    }
}

impl From<usize> for PathItem<'_> {
    fn from(i: usize) -> Self {
        Self::Index(i)
    }
}

/// Conversions used by [`path!`](crate::path). Integers become indices;
/// negative integers clamp to index `0`.
#[doc(hidden)]
pub trait PathItemFrom<'a, T> {
    fn from_path_component(value: T) -> PathItem<'a>;
}

macro_rules! impl_unsigned_as_path_component {
    ($($t:ty),+) => {
        $(
            impl<'a> PathItemFrom<'a, $t> for PathItem<'a> {
                fn from_path_component(value: $t) -> Self {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
                    PathItem::Index(value as usize)
                }
            }
        )+
    };
}
impl_unsigned_as_path_component!(u8, u16, u32, u64, usize);

// Unsuffixed literals in `path!` infer as `i32`, so signed types need impls.
macro_rules! impl_signed_as_path_component {
    ($($t:ty),+) => {
        $(
            impl<'a> PathItemFrom<'a, $t> for PathItem<'a> {
                fn from_path_component(value: $t) -> Self {
                    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
                    PathItem::Index(value.max(0) as usize)
                }
            }
        )+
    };
}
impl_signed_as_path_component!(i8, i16, i32, i64, isize);

impl<'a> PathItemFrom<'a, &'a str> for PathItem<'a> {
    fn from_path_component(value: &'a str) -> Self {
        PathItem::Key(Cow::Borrowed(value))
    }
}

impl<'a> PathItemFrom<'a, String> for PathItem<'a> {
    fn from_path_component(value: String) -> Self {
        PathItem::Key(Cow::Owned(value))
    }
}
