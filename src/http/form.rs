//! Decoding for `application/x-www-form-urlencoded` request bodies.

use std::collections::HashMap;

pub type FormParams = HashMap<String, String>;

/// Splits a form body into decoded key/value pairs.
///
/// Pairs without an `=` and pairs with an empty key are ignored. When a key
/// repeats, the last value wins.
pub fn parse_form(body: &str) -> FormParams {
    let mut params = FormParams::new();
    for pair in body.split('&') {
        if let Some((key, value)) = pair.split_once('=') {
            if key.is_empty() {
                continue;
            }
            params.insert(url_decode(key), url_decode(value));
        }
    }
    params
}

/// Percent-decodes one form token, treating `+` as a space.
///
/// A `%` that is not followed by two hex digits is kept verbatim rather than
/// rejected, so malformed escapes never fail the whole request.
pub fn url_decode(token: &str) -> String {
    let bytes = token.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                if let Some(byte) = hex_pair(bytes[i + 1], bytes[i + 2]) {
                    out.push(byte);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            other => {
                out.push(other);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_pair(hi: u8, lo: u8) -> Option<u8> {
    let hi = (hi as char).to_digit(16)?;
    let lo = (lo as char).to_digit(16)?;
    Some((hi * 16 + lo) as u8)
}
