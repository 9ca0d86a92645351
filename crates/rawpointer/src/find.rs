use alloc::{borrow::Cow, collections::BTreeMap, string::String, vec, vec::Vec};

use log::{debug, trace};

use crate::{
    error::{Error, PointerError, ScanError, SyntaxError},
    extract::extract_value,
    options::ScanOptions,
    path::PathItem,
    pointer::{self, parse_index, write_pointer},
    raw::RawValue,
    scanner::is_space,
    walk::Walker,
};

/// Pointer lookups over raw JSON documents.
///
/// A `Finder` only holds its [`ScanOptions`]; every call scans the document
/// afresh and keeps its state on the stack, so one `Finder` can serve any
/// number of threads.
///
/// # Examples
///
/// ```rust
/// use rawpointer::Finder;
///
/// let doc = br#"{"foo": ["bar", "baz"], "g": {"n": {"r": "x"}}}"#;
/// let finder = Finder::default();
///
/// assert_eq!(finder.find(doc, "/foo/0")?.unwrap(), r#""bar""#);
/// assert_eq!(finder.find(doc, "/g/n/r")?.unwrap(), r#""x""#);
/// assert!(finder.find(doc, "/does/not/exist")?.is_none());
/// # Ok::<(), rawpointer::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Finder {
    options: ScanOptions,
}

fn empty_document() -> Error {
    ScanError::new(SyntaxError::EmptyInput, 0).into()
}

impl Finder {
    /// Creates a finder that scans with `options`.
    #[must_use]
    pub const fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    /// The options every lookup scans with.
    #[must_use]
    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Finds the value `pointer` refers to.
    ///
    /// The root pointer `""` returns the whole document without scanning it.
    /// Otherwise the document is scanned up to the match; bytes after the
    /// match are not validated.
    ///
    /// # Errors
    ///
    /// - [`Error::Scan`] when the document is empty, or malformed before the
    ///   match (anywhere, when there is no match).
    /// - [`Error::Pointer`] when `pointer` is not empty and does not start
    ///   with `/`, or, with [`ScanOptions::strict_pointers`], when it cannot
    ///   apply to the document's shape. In that case the whole document is
    ///   scanned first, and a malformed document is still an
    ///   [`Error::Scan`].
    pub fn find<'a>(&self, doc: &'a [u8], pointer: &str) -> Result<Option<RawValue<'a>>, Error> {
        if doc.is_empty() {
            return Err(empty_document());
        }
        if pointer.is_empty() {
            return Ok(Some(RawValue::whole(doc)));
        }
        let tokens = pointer::decode(pointer)?;
        // A misapplied pointer is only reported once the rest of the
        // document scans cleanly.
        let mut misapplied = None;
        if self.options.strict_pointers {
            misapplied = check_applies(doc, 0, pointer, &tokens, 0).err();
        }

        let mut walker = Walker::new(doc, self.options.max_depth);
        while let Some(visit) = walker.next() {
            let at = visit?;
            if misapplied.is_some() {
                continue;
            }
            let path = walker.path();
            if path.len() > tokens.len() || !is_prefix(path, &tokens) {
                continue;
            }
            if path.len() == tokens.len() {
                let raw = extract_value(doc, at, self.options.max_depth)?;
                trace!("found {pointer:?} at {:?}", raw.range());
                return Ok(Some(raw));
            }
            if self.options.strict_pointers {
                misapplied = check_applies(doc, at, pointer, &tokens, path.len()).err();
            }
        }
        if let Some(err) = misapplied {
            return Err(err.into());
        }
        trace!("{pointer:?} not found in {} bytes", doc.len());
        Ok(None)
    }

    /// Finds several pointers in one pass over the document.
    ///
    /// The result is keyed by the pointer texts as given; pointers that are
    /// absent from the document are absent from the map. Different spellings
    /// of the same location, such as `/a~2` and `/a~02`, each get an entry.
    /// Scanning stops at the last match.
    ///
    /// # Errors
    ///
    /// - [`Error::Scan`] when the document is empty, or malformed before the
    ///   last match. No partial results are returned.
    /// - [`Error::Pointer`] when a non-empty pointer does not start with `/`.
    pub fn find_many<'a, S>(
        &self,
        doc: &'a [u8],
        pointers: &[S],
    ) -> Result<BTreeMap<String, RawValue<'a>>, Error>
    where
        S: AsRef<str>,
    {
        if doc.is_empty() {
            return Err(empty_document());
        }

        let mut found = BTreeMap::new();
        // Canonical text -> every requested spelling of it.
        let mut requested: BTreeMap<String, Vec<&str>> = BTreeMap::new();
        for text in pointers {
            let text = text.as_ref();
            if text.is_empty() {
                found.insert(String::new(), RawValue::whole(doc));
            } else {
                requested
                    .entry(pointer::canonicalize(text)?)
                    .or_default()
                    .push(text);
            }
        }
        // Sorted and unique.
        let mut pending: Vec<&str> = requested.keys().map(String::as_str).collect();
        if pending.is_empty() {
            return Ok(found);
        }

        let max_depth = self.options.max_depth;
        let mut walker = Walker::new(doc, max_depth);
        let mut matched_depth = 0;
        let mut current = String::with_capacity(64);
        let mut skipped = 0usize;
        while let Some(visit) = walker.next() {
            let at = visit?;
            let path = walker.path();

            // Outside every subtree that can still hold a pending target.
            if matched_depth + 1 < path.len() {
                skipped += 1;
                continue;
            }
            matched_depth = matched_depth.min(path.len());
            #[cfg(test)]
            crate::walk::probe::SEARCHES.with(|n| n.set(n.get() + 1));

            current.clear();
            write_pointer(&mut current, path);
            let idx = pending.partition_point(|p| *p < current.as_str());
            let Some(&candidate) = pending.get(idx) else {
                continue;
            };
            if !candidate.starts_with(current.as_str()) {
                continue;
            }
            matched_depth += 1;
            if candidate.len() != current.len() {
                continue;
            }

            let raw = extract_value(doc, at, max_depth)?;
            trace!("found {candidate:?} at {:?}", raw.range());
            pending.remove(idx);
            for text in requested.get(candidate).into_iter().flatten() {
                found.insert(String::from(*text), raw);
            }
            if pending.is_empty() {
                break;
            }
        }

        debug!(
            "find_many: {} of {} pointers found, {} positions pruned",
            found.len(),
            pointers.len(),
            skipped
        );
        Ok(found)
    }

    /// Lists the pointer of every value in the document, in document order,
    /// starting with `""` for the root.
    ///
    /// # Errors
    ///
    /// [`Error::Scan`] when the document is not exactly one JSON value.
    pub fn list_pointers(&self, doc: &[u8]) -> Result<Vec<String>, Error> {
        if doc.is_empty() {
            return Err(empty_document());
        }
        let mut out = vec![String::new()];
        let mut walker = Walker::new(doc, self.options.max_depth);
        while let Some(visit) = walker.next() {
            visit?;
            out.push(pointer::encode(walker.path()));
        }
        debug!("list_pointers: {} pointers in {} bytes", out.len(), doc.len());
        Ok(out)
    }

    /// Finds `pointer` and deserializes the value with `serde_json`.
    ///
    /// # Errors
    ///
    /// As [`Finder::find`], plus [`Error::Decode`] when the value does not
    /// deserialize into `T`.
    #[cfg(feature = "serde")]
    pub fn find_decode<'a, T>(&self, doc: &'a [u8], pointer: &str) -> Result<Option<T>, Error>
    where
        T: serde::Deserialize<'a>,
    {
        self.find(doc, pointer)?.map(|raw| raw.decode()).transpose()
    }
}

fn is_prefix(path: &[PathItem<'_>], tokens: &[Cow<'_, str>]) -> bool {
    path.iter()
        .zip(tokens)
        .all(|(item, token)| item.matches_token(token))
}

/// Checks that `tokens[depth]` can apply to the value starting at or after
/// `at`.
fn check_applies(
    doc: &[u8],
    at: usize,
    pointer: &str,
    tokens: &[Cow<'_, str>],
    depth: usize,
) -> Result<(), PointerError> {
    let Some(&first) = doc[at..].iter().find(|&&b| !is_space(b)) else {
        return Ok(());
    };
    match first {
        b'"' | b'-' | b'0'..=b'9' | b't' | b'f' | b'n' => Err(PointerError::IndexIntoScalar {
            pointer: pointer.into(),
            depth,
        }),
        b'[' if parse_index(&tokens[depth]).is_none() => Err(PointerError::NotAnIndex {
            pointer: pointer.into(),
            token: tokens[depth].clone().into_owned(),
        }),
        // Objects accept any token; anything else is a syntax error the
        // scanner reports.
        _ => Ok(()),
    }
}
