//! Matcher for the bare keywords `true`, `false` and `null`.

/// What happened after feeding one more byte into the keyword matcher?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// Byte matched, but the keyword is not finished yet.
    NeedMore,
    /// Byte matched *and* it was the last byte of the keyword.
    Done,
    /// Byte did **not** match the expected byte.
    Reject,
}

/// Remaining bytes of the keyword being matched.
///
/// Empty ➜ no keyword in flight.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct ExpectedKeyword(&'static [u8]);

impl ExpectedKeyword {
    /// No keyword is in flight.
    pub const fn none() -> Self {
        ExpectedKeyword(b"")
    }

    /// Start matching after the *first* byte (`n`, `t`, or `f`).
    pub fn new(first: u8) -> Self {
        match first {
            b'n' => ExpectedKeyword(b"ull"),
            b't' => ExpectedKeyword(b"rue"),
            b'f' => ExpectedKeyword(b"alse"),
            _ => ExpectedKeyword::none(),
        }
    }

    /// Give the matcher the next input byte and learn what to do next.
    pub fn step(&mut self, b: u8) -> Step {
        match self.0.split_first() {
            Some((&expected, rest)) if expected == b => {
                self.0 = rest;
                if rest.is_empty() {
                    Step::Done
                } else {
                    Step::NeedMore
                }
            }
            _ => Step::Reject,
        }
    }
}
