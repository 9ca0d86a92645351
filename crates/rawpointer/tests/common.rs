#![allow(missing_docs)]
#![allow(dead_code)]

pub const SAMPLE: &str = r#"
{
    "request": {
        "filename": "main.rs",
        "features": ["serde", "log"]
    },
    "paths": {"a/b": 1, "m~n": 2, "": 3},
    "matrix": [[1, 2], []],
    "ok": true
}
"#;

/// Collapses runs of whitespace so multi-line values fit on one line.
pub fn one_line(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
