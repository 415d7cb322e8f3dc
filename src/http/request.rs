use std::collections::HashMap;
use std::fmt;

/// HTTP method of an incoming request.
///
/// Only GET, HEAD and POST are served; every other token is carried through
/// as [`Method::Unsupported`] so the dispatcher can answer it with a 405.
/// Matching is exact and case-sensitive, so `get` is not a GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    GET,
    HEAD,
    POST,
    /// Any other method token, kept verbatim for logging and the 405 page.
    Unsupported(String),
}

impl Method {
    /// Value of the `Allow` header sent with 405 responses.
    pub const ALLOWED: &'static str = "GET, HEAD, POST";

    /// Reads a method token off the request line.
    ///
    /// Never fails: unknown tokens become [`Method::Unsupported`] because
    /// the right answer to them is a 405 response, not a parse error.
    ///
    /// # Example
    ///
    /// ```
    /// # use volley::http::request::Method;
    /// assert_eq!(Method::parse("GET"), Method::GET);
    /// assert!(matches!(Method::parse("get"), Method::Unsupported(_)));
    /// ```
    pub fn parse(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "HEAD" => Method::HEAD,
            "POST" => Method::POST,
            other => Method::Unsupported(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::POST => "POST",
            Method::Unsupported(name) => name,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed request, owned by the connection that read it.
///
/// The path is kept exactly as it appeared on the wire; nothing is
/// normalized or percent-decoded here. Header names are case-sensitive and
/// a duplicate name overwrites the earlier value.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    /// Raw request-line path, e.g. `/index.html`.
    pub path: String,
    /// Protocol token from the request line; never validated.
    pub version: String,
    pub headers: HashMap<String, String>,
    /// Only populated for POST with a `Content-Length` header.
    pub body: Vec<u8>,
}

impl Request {
    /// Looks up a header by its exact, case-sensitive name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }
}

/// Assembles a [`Request`] by hand, mostly for tests and internal callers
/// that never went through the parser.
pub struct RequestBuilder {
    method: Option<Method>,
    path: Option<String>,
    version: String,
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            path: None,
            version: "HTTP/1.1".to_string(),
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Overrides the default `HTTP/1.1` version token.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Fails when the method or path was never set.
    pub fn build(self) -> Result<Request, &'static str> {
        Ok(Request {
            method: self.method.ok_or("request method not set")?,
            path: self.path.ok_or("request path not set")?,
            version: self.version,
            headers: self.headers,
            body: self.body,
        })
    }
}
