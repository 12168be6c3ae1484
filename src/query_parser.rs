use crate::compat::{String, Vec};
use crate::encoding::decode_component;

/// Split a query string into decoded `(key, value)` pairs.
///
/// One leading `?` is ignored and empty segments are skipped. A segment
/// without `=` yields an empty value.
pub fn parse_pairs(query: &str) -> Vec<(String, String)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    if query.is_empty() {
        return Vec::new();
    }

    let bytes = query.as_bytes();
    let mut pairs = Vec::new();
    let mut start = 0;

    for end in memchr::memchr_iter(b'&', bytes).chain(core::iter::once(bytes.len())) {
        let segment = &bytes[start..end];
        start = end + 1;

        if segment.is_empty() {
            continue;
        }

        let pair = match memchr::memchr(b'=', segment) {
            Some(eq) => (
                decode_component(&segment[..eq]),
                decode_component(&segment[eq + 1..]),
            ),
            None => (decode_component(segment), String::new()),
        };
        pairs.push(pair);
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(parse_pairs("").is_empty());
        assert!(parse_pairs("?").is_empty());
    }

    #[test]
    fn test_leading_question_mark_is_optional() {
        assert_eq!(parse_pairs("?a=1"), parse_pairs("a=1"));
    }

    #[test]
    fn test_only_one_question_mark_stripped() {
        let pairs = parse_pairs("??a=1");
        assert_eq!(pairs[0].0, "?a");
    }

    #[test]
    fn test_skips_empty_segments() {
        let pairs = parse_pairs("&&&key=value&&&");
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, "key");
        assert_eq!(pairs[0].1, "value");
    }

    #[test]
    fn test_missing_value() {
        let pairs = parse_pairs("flag&k=v");
        assert_eq!(pairs[0].0, "flag");
        assert_eq!(pairs[0].1, "");
        assert_eq!(pairs[1].1, "v");
    }

    #[test]
    fn test_splits_on_first_equals() {
        let pairs = parse_pairs("key=value=with=equals");
        assert_eq!(pairs[0].1, "value=with=equals");
    }

    #[test]
    fn test_empty_key() {
        let pairs = parse_pairs("=v");
        assert_eq!(pairs[0].0, "");
        assert_eq!(pairs[0].1, "v");
    }
}
