use volley::http::form::{parse_form, url_decode};

#[test]
fn test_parse_basic_pairs() {
    let params = parse_form("a=1&b=two%20words");

    assert_eq!(params.len(), 2);
    assert_eq!(params.get("a").unwrap(), "1");
    assert_eq!(params.get("b").unwrap(), "two words");
}

#[test]
fn test_parse_plus_decodes_to_space() {
    let params = parse_form("name=John+Smith");

    assert_eq!(params.get("name").unwrap(), "John Smith");
}

#[test]
fn test_parse_pair_without_equals_is_ignored() {
    let params = parse_form("a=1&justakey&b=2");

    assert_eq!(params.len(), 2);
    assert!(params.contains_key("a"));
    assert!(params.contains_key("b"));
}

#[test]
fn test_parse_empty_key_is_ignored() {
    let params = parse_form("=value&a=1");

    assert_eq!(params.len(), 1);
    assert_eq!(params.get("a").unwrap(), "1");
}

#[test]
fn test_parse_empty_value_is_kept() {
    let params = parse_form("a=&b=2");

    assert_eq!(params.get("a").unwrap(), "");
    assert_eq!(params.get("b").unwrap(), "2");
}

#[test]
fn test_parse_duplicate_key_last_wins() {
    let params = parse_form("a=1&a=2");

    assert_eq!(params.len(), 1);
    assert_eq!(params.get("a").unwrap(), "2");
}

#[test]
fn test_parse_decodes_keys_too() {
    // %26 is '&'; decoding happens after splitting on the raw '&'.
    let params = parse_form("a%26b=ok");

    assert_eq!(params.get("a&b").unwrap(), "ok");
}

#[test]
fn test_parse_empty_body() {
    assert!(parse_form("").is_empty());
}

#[test]
fn test_url_decode_multibyte_utf8() {
    assert_eq!(url_decode("caf%C3%A9"), "café");
}

#[test]
fn test_url_decode_bad_escape_passes_through() {
    assert_eq!(url_decode("100%ZZdone"), "100%ZZdone");
}

#[test]
fn test_url_decode_truncated_escape_passes_through() {
    assert_eq!(url_decode("abc%"), "abc%");
    assert_eq!(url_decode("abc%4"), "abc%4");
}

#[test]
fn test_url_decode_plain_text_unchanged() {
    assert_eq!(url_decode("hello-world_1.2"), "hello-world_1.2");
}
