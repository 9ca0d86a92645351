//! Drives the scanner and the path tracker across a whole document.

use crate::{
    error::Error,
    path::PathItem,
    scanner::{Event, Scanner, is_space},
    tracker::PathTracker,
};

/// Iterates over the positions where the path changes.
///
/// Each item is the offset at which the value for the new path begins
/// (possibly preceded by whitespace); [`Walker::path`] holds the path itself.
/// Positions are reported for every object member and every array element,
/// never for the root value. The final item is the document error, if any.
///
/// ```ignore
/// let mut walker = Walker::new(doc, max_depth);
/// while let Some(visit) = walker.next() {
///     let offset = visit?;
///     println!("{} at {offset}", encode(walker.path()));
/// }
/// ```
pub(crate) struct Walker<'doc> {
    doc: &'doc [u8],
    pos: usize,
    scanner: Scanner,
    tracker: PathTracker<'doc>,
    /// The first element of the current array was already reported.
    reported_first: bool,
    done: bool,
}

impl<'doc> Walker<'doc> {
    pub fn new(doc: &'doc [u8], max_depth: usize) -> Self {
        Self {
            doc,
            pos: 0,
            scanner: Scanner::new(max_depth),
            tracker: PathTracker::new(),
            reported_first: false,
            done: false,
        }
    }

    pub fn path(&self) -> &[PathItem<'doc>] {
        self.tracker.path()
    }

    fn fail(&mut self, err: impl Into<Error>) -> Option<Result<usize, Error>> {
        self.done = true;
        Some(Err(err.into()))
    }
}

impl Iterator for Walker<'_> {
    type Item = Result<usize, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        while let Some(&b) = self.doc.get(self.pos) {
            // The first element of an array has no delimiter event of its
            // own, so it is reported before its first byte is scanned.
            if self.scanner.awaiting_first_element() && !is_space(b) && b != b']' {
                if !self.reported_first {
                    self.reported_first = true;
                    return Some(Ok(self.pos));
                }
                self.reported_first = false;
            }

            let event = self.scanner.step(b);
            self.pos += 1;
            #[cfg(test)]
            probe::BYTES_STEPPED.with(|n| n.set(n.get() + 1));

            if let Event::Error(err) = event {
                return self.fail(err);
            }
            if let Err(err) = self.tracker.apply(event, &self.scanner, self.doc) {
                return self.fail(err);
            }
            #[cfg(any(test, feature = "fuzzing"))]
            assert_eq!(
                self.tracker.depth(),
                self.scanner.depth(),
                "path tracker out of step with scanner at offset {}",
                self.pos - 1
            );

            if matches!(event, Event::ObjectKey | Event::ArrayValue) {
                return Some(Ok(self.pos));
            }
        }

        self.done = true;
        match self.scanner.finish() {
            Event::Error(err) => Some(Err(err.into())),
            _ => None,
        }
    }
}
