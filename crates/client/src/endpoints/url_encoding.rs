//! Percent-encoding for job ids interpolated into API paths.
//!
//! Job ids are opaque. Without encoding, an id containing `/`, `?` or `#`
//! would change the path or add a query string.
//!
//! ```
//! use jobwatch_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("job/1"), "job%2F1");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in a path segment (RFC 3986 §3.3),
/// plus `%` so already-encoded input is not decoded twice.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for use as a single URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_ids_pass_through() {
        assert_eq!(encode_path_segment("j1"), "j1");
        assert_eq!(
            encode_path_segment("clx9v2k3a0001qz8h5g7b"),
            "clx9v2k3a0001qz8h5g7b"
        );
        assert_eq!(
            encode_path_segment("4f9c-11ee_a.b"),
            "4f9c-11ee_a.b"
        );
    }

    #[test]
    fn test_path_and_query_characters_are_encoded() {
        assert_eq!(encode_path_segment("a/b"), "a%2Fb");
        assert_eq!(encode_path_segment("a?b"), "a%3Fb");
        assert_eq!(encode_path_segment("a#b"), "a%23b");
        assert_eq!(encode_path_segment("a b"), "a%20b");
    }

    #[test]
    fn test_percent_is_encoded() {
        assert_eq!(encode_path_segment("a%2Fb"), "a%252Fb");
    }

    #[test]
    fn test_unicode_is_encoded_as_utf8() {
        assert_eq!(encode_path_segment("caf\u{00e9}"), "caf%C3%A9");
    }
}
