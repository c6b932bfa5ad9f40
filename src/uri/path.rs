//! Path decomposition.
use crate::matches;

/// Split a path into directory and file at the last `/`.
///
/// The directory keeps the trailing `/`. Without any `/` the whole path is the file. No dot
/// segment is collapsed and nothing is decoded.
///
/// # Examples
///
/// ```
/// use parse_uri::uri::path::decompose;
///
/// assert_eq!(decompose("/path/to/file.html"), ("/path/to/", "file.html"));
/// assert_eq!(decompose("/dir/"), ("/dir/", ""));
/// assert_eq!(decompose("file.html"), ("", "file.html"));
/// assert_eq!(decompose(""), ("", ""));
/// ```
pub fn decompose(path: &str) -> (&str, &str) {
    match matches::rfind_slash(path.as_bytes()) {
        Some(slash) => path.split_at(slash + 1),
        None => ("", path),
    }
}

#[test]
fn test_decompose() {
    assert_eq!(decompose("/"), ("/", ""));
    assert_eq!(decompose("/../a/./b"), ("/../a/./", "b"));
    assert_eq!(decompose("john@example.com"), ("", "john@example.com"));
    assert_eq!(decompose("text/plain;base64,SGVsbG8="), ("text/", "plain;base64,SGVsbG8="));
    assert_eq!(decompose("/🐀🐀"), ("/", "🐀🐀"));
}
