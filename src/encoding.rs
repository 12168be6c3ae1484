//! `application/x-www-form-urlencoded` codec used by the parameter store.
use crate::compat::{String, Vec};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode, utf8_percent_encode};

/// urlencoded percent-encode set
/// Everything except ASCII alphanumerics and `*`, `-`, `.`, `_`.
/// Space is listed here too; `encode_into` rewrites it to `+`.
pub const FORM_URLENCODED_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// Encode `input` as a form-urlencoded component directly into `buffer`.
pub fn encode_into(buffer: &mut String, input: &str) {
    buffer.reserve(input.len());

    // Encoded bytes come out one `%XX` chunk at a time.
    for chunk in utf8_percent_encode(input, FORM_URLENCODED_SET) {
        if chunk == "%20" {
            buffer.push('+');
        } else {
            buffer.push_str(chunk);
        }
    }
}

/// Decode a form-urlencoded component.
///
/// `+` becomes a space, valid `%XX` escapes are decoded and anything else
/// passes through untouched. Invalid UTF-8 is replaced with U+FFFD.
pub fn decode_component(input: &[u8]) -> String {
    let replaced: Vec<u8>;
    let bytes = if memchr::memchr(b'+', input).is_some() {
        replaced = input
            .iter()
            .map(|&b| if b == b'+' { b' ' } else { b })
            .collect();
        &replaced[..]
    } else {
        input
    };

    percent_decode(bytes).decode_utf8_lossy().into_owned()
}
