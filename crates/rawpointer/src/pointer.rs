//! RFC 6901 pointer text.
//!
//! A pointer is `""` for the whole document, otherwise `/` followed by the
//! reference tokens joined by `/`, with `~` written as `~0` and `/` as `~1`.

use alloc::{borrow::Cow, string::String, vec::Vec};
use core::fmt::Write as _;

use crate::{error::PointerError, path::PathItem};

/// Encodes a path as canonical pointer text.
///
/// ```rust
/// use rawpointer::{path, pointer::encode};
///
/// assert_eq!(encode(&[]), "");
/// assert_eq!(encode(&path!["foo", 0]), "/foo/0");
/// assert_eq!(encode(&path!["g/n/r"]), "/g~1n~1r");
/// ```
#[must_use]
pub fn encode(path: &[PathItem<'_>]) -> String {
    let mut out = String::with_capacity(64);
    write_pointer(&mut out, path);
    out
}

/// Appends the pointer text of `path` to `out`.
pub fn write_pointer(out: &mut String, path: &[PathItem<'_>]) {
    for item in path {
        out.push('/');
        match item {
            PathItem::Key(k) => write_token(out, k),
            PathItem::Index(i) => {
                // Writing to a String cannot fail.
                let _ = write!(out, "{i}");
            }
        }
    }
}

fn write_token(out: &mut String, token: &str) {
    for c in token.chars() {
        match c {
            '~' => out.push_str("~0"),
            '/' => out.push_str("~1"),
            c => out.push(c),
        }
    }
}

/// Escapes one reference token.
#[must_use]
pub fn escape_token(token: &str) -> Cow<'_, str> {
    if !token.contains(['~', '/']) {
        return Cow::Borrowed(token);
    }
    let mut out = String::with_capacity(token.len() + 4);
    write_token(&mut out, token);
    Cow::Owned(out)
}

fn unescape_token(token: &str) -> Cow<'_, str> {
    if token.contains('~') {
        Cow::Owned(token.replace("~1", "/").replace("~0", "~"))
    } else {
        Cow::Borrowed(token)
    }
}

/// Splits pointer text into its decoded reference tokens.
///
/// `""` decodes to no tokens, `"/"` to a single empty token.
///
/// # Errors
///
/// [`PointerError::MissingLeadingSlash`] when non-empty text does not begin
/// with `/`.
pub fn decode(text: &str) -> Result<Vec<Cow<'_, str>>, PointerError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    let Some(rest) = text.strip_prefix('/') else {
        return Err(PointerError::MissingLeadingSlash(text.into()));
    };
    Ok(rest.split('/').map(unescape_token).collect())
}

/// Rewrites pointer text in canonical form.
///
/// Canonical text is what [`encode`] produces for the decoded tokens. Two
/// texts that decode to the same tokens canonicalize to the same string.
///
/// # Errors
///
/// Same as [`decode`].
pub fn canonicalize(text: &str) -> Result<String, PointerError> {
    let tokens = decode(text)?;
    let mut out = String::with_capacity(text.len());
    for token in &tokens {
        out.push('/');
        write_token(&mut out, token);
    }
    Ok(out)
}

/// Parses a reference token as an array index.
///
/// Only the canonical decimal form is accepted: `"0"`, or digits without a
/// leading zero.
#[must_use]
pub fn parse_index(token: &str) -> Option<usize> {
    match token.as_bytes() {
        [b'0'] => Some(0),
        [b'1'..=b'9', rest @ ..] if rest.iter().all(u8::is_ascii_digit) => token.parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec, vec::Vec};

    use rstest::rstest;

    use super::*;
    use crate::{Path, path};

    #[rstest]
    #[case("/", &[""])]
    #[case("/a", &["a"])]
    #[case("/a~1b", &["a/b"])]
    #[case("/m~0n", &["m~n"])]
    #[case("/ ", &[" "])]
    #[case("/g~1n~1r", &["g/n/r"])]
    #[case("/g/n/r", &["g", "n", "r"])]
    #[case("/~01", &["~1"])]
    #[case("//", &["", ""])]
    #[case("/a/0/", &["a", "0", ""])]
    fn coder(#[case] text: &str, #[case] tokens: &[&str]) {
        let path: Path<'_> = tokens.iter().map(|t| PathItem::from(*t)).collect();
        assert_eq!(encode(&path), text);
        assert_eq!(decode(text).unwrap(), tokens.to_vec());
        assert_eq!(canonicalize(text).unwrap(), text);
    }

    #[test]
    fn root() {
        assert_eq!(encode(&[]), "");
        assert!(decode("").unwrap().is_empty());
        assert_eq!(canonicalize("").unwrap(), "");
    }

    #[test]
    fn indices_encode_as_decimal() {
        assert_eq!(encode(&path!["foo", 10, "bar"]), "/foo/10/bar");
        let mut out = "prefix:".to_string();
        write_pointer(&mut out, &path![0]);
        assert_eq!(out, "prefix:/0");
    }

    #[test]
    fn escaping_is_single_pass() {
        assert_eq!(escape_token("~1"), "~01");
        assert_eq!(escape_token("/0"), "~10");
        assert!(matches!(escape_token("plain"), Cow::Borrowed("plain")));
        assert_eq!(decode("/~01").unwrap(), vec!["~1"]);
        assert_eq!(decode("/~10").unwrap(), vec!["/0"]);
    }

    #[test]
    fn decoded_tokens_borrow_without_tilde() {
        let tokens = decode("/a/b").unwrap();
        assert!(tokens.iter().all(|t| matches!(t, Cow::Borrowed(_))));
    }

    #[test]
    fn canonical_spelling() {
        assert_eq!(canonicalize("/a~1b").unwrap(), "/a~1b");
        // `~2` is not an escape and passes through.
        assert_eq!(canonicalize("/a~2").unwrap(), "/a~02");
    }

    #[test]
    fn missing_slash() {
        assert_eq!(
            decode("foo").unwrap_err(),
            PointerError::MissingLeadingSlash("foo".into())
        );
        assert!(canonicalize("#/foo").is_err());
    }

    #[rstest]
    #[case("0", Some(0))]
    #[case("7", Some(7))]
    #[case("1234", Some(1234))]
    #[case("00", None)]
    #[case("01", None)]
    #[case("-1", None)]
    #[case("+1", None)]
    #[case("1a", None)]
    #[case("", None)]
    #[case(" 1", None)]
    #[case("99999999999999999999999999", None)]
    fn index_tokens(#[case] token: &str, #[case] expected: Option<usize>) {
        assert_eq!(parse_index(token), expected);
    }

    #[test]
    fn roundtrip_keeps_tokens() {
        let path = path!["a/b~c", 3, "", "~0"];
        let text = encode(&path);
        let tokens: Vec<_> = decode(&text).unwrap();
        assert_eq!(tokens, vec!["a/b~c", "3", "", "~0"]);
    }
}
