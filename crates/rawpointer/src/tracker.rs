use alloc::borrow::Cow;

use crate::{
    error::LiteralError,
    path::{Path, PathItem},
    scanner::{Event, Scanner},
    unquote::decode_literal,
};

/// Follows scanner events and keeps the path of the value being scanned.
///
/// Keys borrow from the document unless they contain escapes.
#[derive(Debug, Default)]
pub(crate) struct PathTracker<'doc> {
    path: Path<'doc>,
}

impl<'doc> PathTracker<'doc> {
    pub fn new() -> Self {
        Self {
            path: Path::with_capacity(16),
        }
    }

    pub fn path(&self) -> &[PathItem<'doc>] {
        &self.path
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Applies the event `scanner` just produced for a byte of `doc`.
    pub fn apply(
        &mut self,
        event: Event,
        scanner: &Scanner,
        doc: &'doc [u8],
    ) -> Result<(), LiteralError> {
        match event {
            Event::BeginArray => self.path.push(PathItem::Index(0)),
            Event::BeginObject => self.path.push(PathItem::Key(Cow::Borrowed(""))),
            Event::ArrayValue => {
                if let Some(PathItem::Index(i)) = self.path.last_mut() {
                    *i += 1;
                }
            }
            Event::ObjectKey => {
                let key = decode_literal(&doc[scanner.literal_span()])?;
                if let Some(top) = self.path.last_mut() {
                    *top = PathItem::Key(key);
                }
            }
            Event::EndArray | Event::EndObject => {
                self.path.pop();
            }
            Event::Continue | Event::BeginLiteral | Event::End | Event::Error(_) => {}
        }
        Ok(())
    }
}
