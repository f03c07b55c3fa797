//! Well-known method and version prefix tables.
//!
//! Both lookups are speculative fast paths: a miss just means "fall back to
//! the general token/byte scan," not an error. Grounded on the teacher's
//! `parse_response_line` (`src/parser.rs`), which matches the fixed-width
//! `"HTTP/1.0 "` / `"HTTP/1.1 "` prefixes by direct byte-slice comparison.

use crate::method::HttpMethod;
use crate::version::HttpVersion;

const METHODS: &[(&[u8], HttpMethod)] = &[
    (b"GET", HttpMethod::GET),
    (b"PUT", HttpMethod::PUT),
    (b"POST", HttpMethod::POST),
    (b"HEAD", HttpMethod::HEAD),
    (b"TRACE", HttpMethod::TRACE),
    (b"PATCH", HttpMethod::PATCH),
    (b"DELETE", HttpMethod::DELETE),
    (b"CONNECT", HttpMethod::CONNECT),
    (b"OPTIONS", HttpMethod::OPTIONS),
];

/// If `span` starts with one of the well-known method names immediately
/// followed by a space, returns `(method, len(name))`. The caller advances
/// past `len + 1` bytes (name and the space) on a hit.
#[inline]
pub fn known_method(span: &[u8]) -> Option<(HttpMethod, usize)> {
    for &(name, method) in METHODS {
        let len = name.len();
        if span.len() > len && &span[..len] == name && span[len] == b' ' {
            return Some((method, len));
        }
    }
    None
}

/// If `span` starts with `"HTTP/1.0"` or `"HTTP/1.1"` immediately followed
/// by CR, returns `(version, 8)`. The caller advances past `len + 1` bytes
/// (version and CR) on a hit.
#[inline]
pub fn known_version(span: &[u8]) -> Option<(HttpVersion, usize)> {
    const LEN: usize = 8; // b"HTTP/1.X".len()

    if span.len() <= LEN || span[LEN] != b'\r' {
        return None;
    }

    match &span[..LEN] {
        b"HTTP/1.0" => Some((HttpVersion::Http10, LEN)),
        b"HTTP/1.1" => Some((HttpVersion::Http11, LEN)),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn matches_known_method_with_trailing_space() {
        assert_eq!(known_method(b"GET /x"), Some((HttpMethod::GET, 3)));
        assert_eq!(known_method(b"CONNECT x"), Some((HttpMethod::CONNECT, 7)));
    }

    #[test]
    fn rejects_method_without_trailing_space() {
        assert_eq!(known_method(b"GETX /x"), None);
        assert_eq!(known_method(b"GET"), None);
    }

    #[test]
    fn matches_known_version_with_trailing_cr() {
        assert_eq!(known_version(b"HTTP/1.1\r\n"), Some((HttpVersion::Http11, 8)));
        assert_eq!(known_version(b"HTTP/1.0\r\n"), Some((HttpVersion::Http10, 8)));
    }

    #[test]
    fn rejects_version_without_trailing_cr_or_unknown() {
        assert_eq!(known_version(b"HTTP/1.1X"), None);
        assert_eq!(known_version(b"HTTP/2.0\r\n"), None);
        assert_eq!(known_version(b"HTTP/1.1"), None);
    }

    #[test]
    fn never_reads_past_span_len() {
        // Shorter than the fixed-width candidates: must not panic.
        assert_eq!(known_method(b"GE"), None);
        assert_eq!(known_version(b"HTTP/1."), None);
    }
}
