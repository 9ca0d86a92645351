#![expect(missing_docs)]

mod common;

use std::collections::BTreeMap;

use common::SAMPLE;
use rawpointer::{Error, Finder, ScanOptions, find_decode};
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
struct Request {
    filename: String,
    features: Vec<String>,
}

#[test]
fn decodes_a_struct() {
    let request: Option<Request> = find_decode(SAMPLE.as_bytes(), "/request").unwrap();
    assert_eq!(
        request,
        Some(Request {
            filename: "main.rs".into(),
            features: vec!["serde".into(), "log".into()],
        })
    );
}

#[test]
fn decodes_scalars_and_maps() {
    let doc = SAMPLE.as_bytes();
    assert_eq!(find_decode::<bool>(doc, "/ok").unwrap(), Some(true));
    assert_eq!(find_decode::<u8>(doc, "/paths/m~0n").unwrap(), Some(2));
    assert_eq!(
        find_decode::<Vec<Vec<i32>>>(doc, "/matrix").unwrap(),
        Some(vec![vec![1, 2], vec![]])
    );

    let paths: BTreeMap<String, u8> = find_decode(doc, "/paths").unwrap().unwrap();
    assert_eq!(paths["a/b"], 1);
    assert_eq!(paths[""], 3);
}

#[test]
fn borrows_from_the_document() {
    let doc = br#"{"name": "plain"}"#;
    let name: Option<&str> = find_decode(doc, "/name").unwrap();
    assert_eq!(name, Some("plain"));
}

#[test]
fn root_decodes_the_whole_document() {
    let value: serde_json::Value = find_decode(SAMPLE.as_bytes(), "").unwrap().unwrap();
    assert_eq!(value["matrix"][0][1], 2);
}

#[test]
fn absent_is_none() {
    assert_eq!(find_decode::<u8>(SAMPLE.as_bytes(), "/z").unwrap(), None);
}

#[test]
fn type_mismatch_is_a_decode_error() {
    let err = find_decode::<u8>(SAMPLE.as_bytes(), "/request").unwrap_err();
    assert!(matches!(err, Error::Decode(_)), "{err}");
}

#[test]
fn malformed_value_is_a_scan_error() {
    let err = find_decode::<f64>(br#"{"a": 1.x35}"#, "/a").unwrap_err();
    assert!(matches!(err, Error::Scan(_)), "{err}");
}

#[test]
fn decode_on_a_found_value() {
    let finder = Finder::new(ScanOptions::default());
    let raw = finder.find(SAMPLE.as_bytes(), "/request/features").unwrap().unwrap();
    let features: Vec<&str> = raw.decode().unwrap();
    assert_eq!(features, ["serde", "log"]);
}
