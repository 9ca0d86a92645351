use rstest::rstest;

use super::OBJ_SRC;
use crate::{Error, ScanError, SyntaxError, find, find_many, list_pointers};

fn scan_error(result: Result<impl core::fmt::Debug, Error>) -> ScanError {
    match result {
        Err(Error::Scan(err)) => err,
        other => panic!("expected a scan error, got {other:?}"),
    }
}

#[rstest]
#[case(b"")]
#[case(b" ")]
#[case(b"{")]
#[case(b"[")]
#[case(b"}")]
#[case(b"]")]
#[case(b"{]")]
#[case(b"[}")]
#[case(b"\"unterminated")]
#[case(br#"{"a": {"b": "something}}"#)]
#[case(br#"{"a" 1}"#)]
#[case(b"[1,]")]
#[case(b"[1 2]")]
#[case(b"{} {}")]
#[case(b"nul")]
fn bad_documents_fail_everywhere(#[case] doc: &[u8]) {
    scan_error(find(doc, "/broken"));
    scan_error(find_many(doc, &["/broken"]));
    scan_error(list_pointers(doc));
}

#[test]
fn error_offsets() {
    let err = scan_error(find(b"{]", "/a"));
    assert_eq!(err.offset, 1);
    assert_eq!(
        err.source,
        SyntaxError::InvalidCharacter {
            byte: b']',
            context: "looking for beginning of object key string",
        }
    );

    let err = scan_error(list_pointers(b"[1, 2"));
    assert_eq!(err, ScanError::new(SyntaxError::UnexpectedEndOfInput, 5));

    let err = scan_error(find(b"", ""));
    assert_eq!(err.source, SyntaxError::EmptyInput);
}

#[test]
fn root_pointer_does_not_scan() {
    assert_eq!(find(b"{]", "").unwrap().unwrap(), "{]");
}

#[test]
fn errors_after_the_match_go_unnoticed() {
    let doc = br#"{"a": 1, "b": ]"#;
    assert_eq!(find(doc, "/a").unwrap().unwrap(), "1");
    assert_eq!(find_many(doc, &["/a"]).unwrap()["/a"], "1");
    scan_error(find(doc, "/b"));
    scan_error(list_pointers(doc));
}

#[test]
fn find_many_reports_errors_without_partial_results() {
    // "/a" matches before the error, "/z" would come after it.
    let doc = br#"{"a": 1, "b": ], "z": 2}"#;
    let err = scan_error(find_many(doc, &["/a", "/z"]));
    assert_eq!(err.offset, 14);
}

#[test]
fn malformed_matched_value() {
    scan_error(find(br#"{"a": 1.x35}"#, "/a"));
    scan_error(find(br#"{"a": tru}"#, "/a"));
    scan_error(find(br#"{"a": "\q"}"#, "/a"));
}

#[test]
fn truncated_after_colon() {
    let err = scan_error(find(br#"{"a":"#, "/a"));
    assert_eq!(err.source, SyntaxError::UnexpectedEndOfInput);
    assert_eq!(err.offset, 5);
}

#[test]
fn pointers_without_leading_slash() {
    for pointer in ["foo", "#/foo", "~1"] {
        assert!(matches!(
            find(OBJ_SRC.as_bytes(), pointer),
            Err(Error::Pointer(_))
        ));
    }
}
