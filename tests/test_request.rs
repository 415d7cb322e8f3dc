use volley::http::request::{Method, RequestBuilder};

#[test]
fn test_method_parse_known_tokens() {
    assert_eq!(Method::parse("GET"), Method::GET);
    assert_eq!(Method::parse("HEAD"), Method::HEAD);
    assert_eq!(Method::parse("POST"), Method::POST);
}

#[test]
fn test_method_parse_unknown_tokens() {
    let methods = vec!["PUT", "DELETE", "OPTIONS", "PATCH", "BREW"];

    for token in methods {
        assert_eq!(
            Method::parse(token),
            Method::Unsupported(token.to_string()),
            "{token} should not be a supported method"
        );
    }
}

#[test]
fn test_method_parse_is_case_sensitive() {
    assert_eq!(Method::parse("get"), Method::Unsupported("get".to_string()));
    assert_eq!(
        Method::parse("Post"),
        Method::Unsupported("Post".to_string())
    );
}

#[test]
fn test_method_as_str_round_trips() {
    assert_eq!(Method::GET.as_str(), "GET");
    assert_eq!(Method::HEAD.as_str(), "HEAD");
    assert_eq!(Method::POST.as_str(), "POST");
    assert_eq!(Method::Unsupported("TRACE".to_string()).as_str(), "TRACE");
}

#[test]
fn test_method_display_matches_as_str() {
    assert_eq!(Method::GET.to_string(), "GET");
    assert_eq!(Method::Unsupported("LINK".to_string()).to_string(), "LINK");
}

#[test]
fn test_allowed_lists_the_supported_methods() {
    assert_eq!(Method::ALLOWED, "GET, HEAD, POST");
}

#[test]
fn test_request_header_lookup_is_case_sensitive() {
    let request = RequestBuilder::new()
        .method(Method::GET)
        .path("/")
        .header("Host", "example.com")
        .build()
        .unwrap();

    assert_eq!(request.header("Host"), Some("example.com"));
    assert_eq!(request.header("host"), None);
}

#[test]
fn test_builder_defaults_version() {
    let request = RequestBuilder::new()
        .method(Method::GET)
        .path("/info")
        .build()
        .unwrap();

    assert_eq!(request.version, "HTTP/1.1");
    assert!(request.headers.is_empty());
    assert!(request.body.is_empty());
}

#[test]
fn test_builder_carries_body() {
    let request = RequestBuilder::new()
        .method(Method::POST)
        .path("/submit")
        .body(b"a=1".to_vec())
        .build()
        .unwrap();

    assert_eq!(request.body, b"a=1".to_vec());
}

#[test]
fn test_builder_requires_method_and_path() {
    assert!(RequestBuilder::new().path("/").build().is_err());
    assert!(RequestBuilder::new().method(Method::GET).build().is_err());
}
