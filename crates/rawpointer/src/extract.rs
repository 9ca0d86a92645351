use crate::{
    error::{ScanError, SyntaxError},
    raw::RawValue,
    scanner::{Event, Scanner, is_space},
};

/// Scans exactly one value starting at `offset` (after any whitespace) and
/// returns its span. Offsets in errors are relative to `doc`.
pub(crate) fn extract_value(
    doc: &[u8],
    offset: usize,
    max_depth: usize,
) -> Result<RawValue<'_>, ScanError> {
    #[cfg(test)]
    crate::walk::probe::EXTRACTIONS.with(|n| n.set(n.get() + 1));

    let start = doc[offset..]
        .iter()
        .position(|&b| !is_space(b))
        .map_or(doc.len(), |skip| offset + skip);
    if start == doc.len() {
        return Err(ScanError::new(SyntaxError::UnexpectedEndOfInput, start));
    }

    let mut scanner = Scanner::at(start, max_depth);
    for (pos, &b) in doc.iter().enumerate().skip(start) {
        match scanner.step(b) {
            Event::Error(err) => return Err(err),
            // A number ends on the byte after it.
            Event::End => return Ok(RawValue::new(doc, start, pos)),
            _ if scanner.value_complete() => return Ok(RawValue::new(doc, start, pos + 1)),
            _ => {}
        }
    }
    match scanner.finish() {
        Event::Error(err) => Err(err),
        _ => Ok(RawValue::new(doc, start, doc.len())),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::options::DEFAULT_MAX_DEPTH;

    #[rstest]
    #[case(b"\"abc\", 1", 0, "\"abc\"")]
    #[case(b"  123 ", 0, "123")]
    #[case(b"[1,-2.5e3]", 3, "-2.5e3")]
    #[case(b"[1, 2]", 3, "2")]
    #[case(b"42", 0, "42")]
    #[case(b"{\"a\": {\"b\": [true]}, \"c\": 1}", 5, "{\"b\": [true]}")]
    #[case(b"[null,false]", 1, "null")]
    #[case(b"[null,false]", 6, "false")]
    #[case(b"{\"k\":\"v\\\"}\"}", 5, "\"v\\\"}\"")]
    fn extracts_one_value(#[case] doc: &[u8], #[case] offset: usize, #[case] expected: &str) {
        let raw = extract_value(doc, offset, DEFAULT_MAX_DEPTH).unwrap();
        assert_eq!(raw, expected);
    }

    #[test]
    fn errors_carry_document_offsets() {
        let err = extract_value(b"[1, }]", 3, DEFAULT_MAX_DEPTH).unwrap_err();
        assert_eq!(err.offset, 4);

        let err = extract_value(b"{\"a\": ", 5, DEFAULT_MAX_DEPTH).unwrap_err();
        assert_eq!(err.source, SyntaxError::UnexpectedEndOfInput);

        let err = extract_value(b"[\"ab", 1, DEFAULT_MAX_DEPTH).unwrap_err();
        assert_eq!(err, ScanError::new(SyntaxError::UnexpectedEndOfInput, 4));
    }
}
