//! Byte-driven JSON automaton.
//!
//! The scanner consumes a document one byte at a time and reports, for each
//! byte, the structural [`Event`] it completes. It keeps no copy of the
//! input: callers hold the document and use the byte offsets the scanner
//! tracks (for example [`Scanner::literal_span`]) to look at the bytes
//! themselves.
//!
//! Invariants
//! - Every scan owns its `Scanner`; there is no shared state between scans.
//! - `End` is only reported once a complete top-level value has been seen.
//! - After an `Error` the scanner is stuck: every later step repeats it.

use alloc::vec::Vec;
use core::ops::Range;

use crate::{
    error::{ScanError, SyntaxError},
    literal::{self, ExpectedKeyword},
};

/// What a single byte did to the document structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Nothing structural happened.
    Continue,
    /// First byte of a string, number or keyword.
    BeginLiteral,
    /// `{`
    BeginObject,
    /// The `:` following an object key. The key itself is available from
    /// [`Scanner::literal_span`].
    ObjectKey,
    /// `}`
    EndObject,
    /// `[`
    BeginArray,
    /// The `,` separating two array elements.
    ArrayValue,
    /// `]`
    EndArray,
    /// The byte follows a complete top-level value.
    End,
    /// The byte cannot extend any valid production.
    Error(ScanError),
}

/// One entry per open container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    /// Inside an object, before the `:` of the current member.
    ObjectKey,
    /// Inside an object, after the `:` of the current member.
    ObjectValue,
    /// Inside an array.
    ArrayValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Right after `[`: a value or `]`.
    BeginValueOrEmpty,
    BeginValue,
    /// Right after `{`: a key or `}`.
    BeginKeyOrEmpty,
    BeginKey,
    EndValue,
    EndTop,

    InString,
    InStringEscape,
    /// Inside `\u`, with the number of hex digits seen so far.
    InStringUnicode(u8),

    Neg,
    Zero,
    Integer,
    DecimalPoint,
    Fraction,
    Exponent,
    ExponentSign,
    ExponentDigits,

    Keyword(ExpectedKeyword),

    Error(ScanError),
}

#[inline]
pub(crate) fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

/// The JSON automaton.
///
/// ```ignore
/// let mut scanner = Scanner::new(ScanOptions::default().max_depth);
/// for &b in doc {
///     match scanner.step(b) {
///         Event::Error(err) => return Err(err),
///         event => handle(event),
///     }
/// }
/// scanner.finish();
/// ```
#[derive(Debug, Clone)]
pub struct Scanner {
    state: State,
    frames: Vec<Frame>,
    max_depth: usize,

    /// Offset of the first byte this scanner saw.
    start: usize,
    /// Offset of the next byte.
    offset: usize,

    /// Opening quote of the string literal being scanned.
    literal_start: usize,
    /// The most recently completed string literal, quotes included.
    literal: Range<usize>,
}

impl Scanner {
    /// Creates a scanner positioned at the start of a document.
    #[must_use]
    pub fn new(max_depth: usize) -> Self {
        Self::at(0, max_depth)
    }

    /// Creates a scanner whose first byte sits at `offset` of a larger
    /// buffer, so reported offsets are relative to that buffer.
    #[must_use]
    pub fn at(offset: usize, max_depth: usize) -> Self {
        Self {
            state: State::BeginValue,
            frames: Vec::with_capacity(16),
            max_depth,
            start: offset,
            offset,
            literal_start: offset,
            literal: offset..offset,
        }
    }

    /// Number of open containers.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Offset of the next byte to be stepped.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Span of the most recently completed string literal, from the opening
    /// quote through the closing quote.
    ///
    /// At [`Event::ObjectKey`] this is the key. Whitespace between the
    /// closing quote and the `:` is not part of it.
    #[must_use]
    pub fn literal_span(&self) -> Range<usize> {
        self.literal.clone()
    }

    /// True right after `[` while only whitespace has followed it.
    #[must_use]
    pub fn awaiting_first_element(&self) -> bool {
        self.state == State::BeginValueOrEmpty
    }

    /// True once the top-level value is complete.
    ///
    /// Numbers only complete on the byte that follows them, so this lags by
    /// one byte for a top-level number.
    #[must_use]
    pub fn value_complete(&self) -> bool {
        self.frames.is_empty() && matches!(self.state, State::EndValue | State::EndTop)
    }

    /// Consumes one byte.
    pub fn step(&mut self, b: u8) -> Event {
        let at = self.offset;
        self.offset += 1;
        self.dispatch(b, at)
    }

    /// Signals the end of input.
    ///
    /// Returns [`Event::End`] when the input held exactly one complete value
    /// (plus whitespace), otherwise an error.
    pub fn finish(&mut self) -> Event {
        let at = self.offset;
        match self.state {
            State::Error(err) => return Event::Error(err),
            State::EndTop => return Event::End,
            _ if at == self.start => {
                return self.fail_with(SyntaxError::EmptyInput, at);
            }
            _ => {}
        }

        // A trailing number or keyword only completes on the byte after it.
        self.dispatch(b' ', at);
        if self.state == State::EndTop {
            Event::End
        } else {
            self.fail_with(SyntaxError::UnexpectedEndOfInput, at)
        }
    }

    #[allow(clippy::too_many_lines)]
    fn dispatch(&mut self, b: u8, at: usize) -> Event {
        use State::*;
        match self.state {
            Error(err) => Event::Error(err),

            BeginValueOrEmpty => match b {
                b if is_space(b) => Event::Continue,
                b']' => self.end_value(b, at),
                _ => self.begin_value(b, at),
            },
            BeginValue => self.begin_value(b, at),
            BeginKeyOrEmpty => match b {
                b if is_space(b) => Event::Continue,
                b'}' => {
                    self.set_top(Frame::ObjectValue);
                    self.end_value(b, at)
                }
                _ => self.begin_key(b, at),
            },
            BeginKey => self.begin_key(b, at),
            EndValue => self.end_value(b, at),
            EndTop => self.end_top(b, at),

            // -------------------------- STRINGS ----------------------------
            InString => match b {
                b'"' => {
                    self.literal = self.literal_start..at + 1;
                    self.state = EndValue;
                    Event::Continue
                }
                b'\\' => {
                    self.state = InStringEscape;
                    Event::Continue
                }
                b if b < 0x20 => self.fail(b, "in string literal", at),
                _ => Event::Continue,
            },
            InStringEscape => match b {
                b'b' | b'f' | b'n' | b'r' | b't' | b'\\' | b'/' | b'"' => {
                    self.state = InString;
                    Event::Continue
                }
                b'u' => {
                    self.state = InStringUnicode(0);
                    Event::Continue
                }
                _ => self.fail(b, "in string escape code", at),
            },
            InStringUnicode(seen) => {
                if !b.is_ascii_hexdigit() {
                    return self.fail(b, "in \\u hexadecimal character escape", at);
                }
                self.state = if seen == 3 {
                    InString
                } else {
                    InStringUnicode(seen + 1)
                };
                Event::Continue
            }

            // -------------------------- NUMBERS ----------------------------
            Neg => match b {
                b'0' => {
                    self.state = Zero;
                    Event::Continue
                }
                b'1'..=b'9' => {
                    self.state = Integer;
                    Event::Continue
                }
                _ => self.fail(b, "in numeric literal", at),
            },
            Integer if b.is_ascii_digit() => Event::Continue,
            Integer | Zero => match b {
                b'.' => {
                    self.state = DecimalPoint;
                    Event::Continue
                }
                b'e' | b'E' => {
                    self.state = Exponent;
                    Event::Continue
                }
                _ => self.end_value(b, at),
            },
            DecimalPoint => {
                if b.is_ascii_digit() {
                    self.state = Fraction;
                    Event::Continue
                } else {
                    self.fail(b, "after decimal point in numeric literal", at)
                }
            }
            Fraction => match b {
                b'0'..=b'9' => Event::Continue,
                b'e' | b'E' => {
                    self.state = Exponent;
                    Event::Continue
                }
                _ => self.end_value(b, at),
            },
            Exponent if matches!(b, b'+' | b'-') => {
                self.state = ExponentSign;
                Event::Continue
            }
            Exponent | ExponentSign => {
                if b.is_ascii_digit() {
                    self.state = ExponentDigits;
                    Event::Continue
                } else {
                    self.fail(b, "in exponent of numeric literal", at)
                }
            }
            ExponentDigits if b.is_ascii_digit() => Event::Continue,
            ExponentDigits => self.end_value(b, at),

            // -------------------------- KEYWORDS ---------------------------
            Keyword(mut expected) => match expected.step(b) {
                literal::Step::NeedMore => {
                    self.state = Keyword(expected);
                    Event::Continue
                }
                literal::Step::Done => {
                    self.state = EndValue;
                    Event::Continue
                }
                literal::Step::Reject => self.fail(b, "in literal true, false or null", at),
            },
        }
    }

    fn begin_value(&mut self, b: u8, at: usize) -> Event {
        let state = match b {
            b if is_space(b) => return Event::Continue,
            b'{' => {
                if let Some(err) = self.push(Frame::ObjectKey, at) {
                    return err;
                }
                self.state = State::BeginKeyOrEmpty;
                return Event::BeginObject;
            }
            b'[' => {
                if let Some(err) = self.push(Frame::ArrayValue, at) {
                    return err;
                }
                self.state = State::BeginValueOrEmpty;
                return Event::BeginArray;
            }
            b'"' => {
                self.literal_start = at;
                State::InString
            }
            b'-' => State::Neg,
            b'0' => State::Zero,
            b'1'..=b'9' => State::Integer,
            b't' | b'f' | b'n' => State::Keyword(ExpectedKeyword::new(b)),
            _ => return self.fail(b, "looking for beginning of value", at),
        };
        self.state = state;
        Event::BeginLiteral
    }

    fn begin_key(&mut self, b: u8, at: usize) -> Event {
        match b {
            b if is_space(b) => Event::Continue,
            b'"' => {
                self.literal_start = at;
                self.state = State::InString;
                Event::BeginLiteral
            }
            _ => self.fail(b, "looking for beginning of object key string", at),
        }
    }

    /// A value just ended; `b` is the first byte after it.
    fn end_value(&mut self, b: u8, at: usize) -> Event {
        let Some(&top) = self.frames.last() else {
            self.state = State::EndTop;
            return self.end_top(b, at);
        };
        if is_space(b) {
            self.state = State::EndValue;
            return Event::Continue;
        }
        match (top, b) {
            (Frame::ObjectKey, b':') => {
                self.set_top(Frame::ObjectValue);
                self.state = State::BeginValue;
                Event::ObjectKey
            }
            (Frame::ObjectKey, _) => self.fail(b, "after object key", at),
            (Frame::ObjectValue, b',') => {
                self.set_top(Frame::ObjectKey);
                self.state = State::BeginKey;
                Event::Continue
            }
            (Frame::ObjectValue, b'}') => {
                self.pop();
                Event::EndObject
            }
            (Frame::ObjectValue, _) => self.fail(b, "after object key:value pair", at),
            (Frame::ArrayValue, b',') => {
                self.state = State::BeginValue;
                Event::ArrayValue
            }
            (Frame::ArrayValue, b']') => {
                self.pop();
                Event::EndArray
            }
            (Frame::ArrayValue, _) => self.fail(b, "after array element", at),
        }
    }

    /// The top-level value is complete. Whitespace is fine; anything else is
    /// reported on the *next* step, so the byte right after a value still
    /// reads as `End`.
    fn end_top(&mut self, b: u8, at: usize) -> Event {
        if !is_space(b) {
            self.state = State::Error(ScanError::new(
                SyntaxError::InvalidCharacter {
                    byte: b,
                    context: "after top-level value",
                },
                at,
            ));
        }
        Event::End
    }

    fn push(&mut self, frame: Frame, at: usize) -> Option<Event> {
        if self.frames.len() >= self.max_depth {
            return Some(self.fail_with(SyntaxError::DepthLimitExceeded(self.max_depth), at));
        }
        self.frames.push(frame);
        None
    }

    fn pop(&mut self) {
        self.frames.pop();
        self.state = if self.frames.is_empty() {
            State::EndTop
        } else {
            State::EndValue
        };
    }

    fn set_top(&mut self, frame: Frame) {
        if let Some(top) = self.frames.last_mut() {
            *top = frame;
        }
    }

    fn fail(&mut self, byte: u8, context: &'static str, at: usize) -> Event {
        self.fail_with(SyntaxError::InvalidCharacter { byte, context }, at)
    }

    fn fail_with(&mut self, source: SyntaxError, at: usize) -> Event {
        let err = ScanError::new(source, at);
        self.state = State::Error(err);
        Event::Error(err)
    }
}
