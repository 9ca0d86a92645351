/// Configuration shared by every lookup made through a
/// [`Finder`](crate::Finder).
///
/// # Examples
///
/// ```rust
/// use rawpointer::{Finder, ScanOptions};
///
/// let finder = Finder::new(ScanOptions {
///     strict_pointers: true,
///     ..Default::default()
/// });
/// let err = finder.find(br#"{"a": 1}"#, "/a/b").unwrap_err();
/// assert!(err.to_string().contains("indexes into a scalar"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Maximum container nesting accepted by the scanner.
    ///
    /// Deeper documents fail with
    /// [`SyntaxError::DepthLimitExceeded`](crate::SyntaxError::DepthLimitExceeded).
    ///
    /// # Default
    ///
    /// `10_000`
    pub max_depth: usize,

    /// Whether [`Finder::find`](crate::Finder::find) reports pointers that
    /// cannot apply to the document's shape.
    ///
    /// When `false`, a pointer that continues past a scalar, or applies a
    /// non-numeric token to an array, is simply not found. When `true`, those
    /// lookups fail with
    /// [`PointerError::IndexIntoScalar`](crate::PointerError::IndexIntoScalar)
    /// or [`PointerError::NotAnIndex`](crate::PointerError::NotAnIndex).
    /// Indices past the end of an array are not found in either mode.
    ///
    /// # Default
    ///
    /// `false`
    pub strict_pointers: bool,
}

pub(crate) const DEFAULT_MAX_DEPTH: usize = 10_000;

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            strict_pointers: false,
        }
    }
}
