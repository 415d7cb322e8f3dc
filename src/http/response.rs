use std::time::SystemTime;

/// Server identity advertised in the `Server` header of every response.
pub const SERVER_NAME: &str = concat!("volley/", env!("CARGO_PKG_VERSION"));

/// Default media type; every page this server renders is HTML.
pub const TEXT_HTML: &str = "text/html; charset=UTF-8";

/// The four status codes this server can put on a status line.
///
/// 200 for served pages, 400 for requests the parser refused, 404 for
/// unknown GET/HEAD paths, 405 for methods outside GET/HEAD/POST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok,
    BadRequest,
    NotFound,
    MethodNotAllowed,
}

impl StatusCode {
    /// Numeric code for the status line.
    ///
    /// # Example
    ///
    /// ```
    /// # use volley::http::response::StatusCode;
    /// assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    /// assert_eq!(StatusCode::MethodNotAllowed.as_u16(), 405);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
        }
    }

    /// Reason phrase paired with the code on the status line.
    ///
    /// # Example
    ///
    /// ```
    /// # use volley::http::response::StatusCode;
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
        }
    }
}

/// A finished response, ready for the writer.
///
/// Headers are an ordered sequence and the writer emits them exactly in
/// this order. Anything built through [`ResponseBuilder`] carries the
/// standard header set; constructing a `Response` directly skips that.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    /// Name/value pairs in wire order.
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Response {
    /// Value of the first header with the given name, if any.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Assembles a [`Response`] and stamps the standard header set on it.
///
/// `build` surrounds the caller's headers with what every response here
/// carries: `Content-Type` (defaulting to HTML), a `Content-Length` computed
/// from the body bytes, `Server`, an RFC 1123 `Date` in GMT, and a closing
/// `Connection: close`.
///
/// # Example
///
/// ```
/// # use volley::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Last-Modified", "Thu, 01 Jan 1970 00:00:00 GMT")
///     .body(b"<p>hi</p>".to_vec())
///     .build();
///
/// assert_eq!(response.header("Content-Length"), Some("9"));
/// assert_eq!(response.header("Connection"), Some("close"));
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Adds a header, replacing an earlier one of the same name in place.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.headers.iter().position(|(n, _)| *n == name) {
            Some(idx) => self.headers[idx].1 = value,
            None => self.headers.push((name, value)),
        }
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Finalizes the response with the standard header set stamped in.
    ///
    /// `Content-Length` is the byte length of the body, never its character
    /// count; the two differ for non-ASCII content. A caller that set
    /// `Content-Type` or `Content-Length` explicitly keeps its value.
    pub fn build(mut self) -> Response {
        let content_type = take_header(&mut self.headers, "Content-Type")
            .unwrap_or_else(|| TEXT_HTML.to_string());
        let content_length = take_header(&mut self.headers, "Content-Length")
            .unwrap_or_else(|| self.body.len().to_string());

        let mut headers = Vec::with_capacity(self.headers.len() + 5);
        headers.push(("Content-Type".to_string(), content_type));
        headers.push(("Content-Length".to_string(), content_length));
        headers.push(("Server".to_string(), SERVER_NAME.to_string()));
        headers.push((
            "Date".to_string(),
            httpdate::fmt_http_date(SystemTime::now()),
        ));
        headers.append(&mut self.headers);
        headers.push(("Connection".to_string(), "close".to_string()));

        Response {
            status: self.status,
            headers,
            body: self.body,
        }
    }
}

fn take_header(headers: &mut Vec<(String, String)>, name: &str) -> Option<String> {
    let idx = headers.iter().position(|(n, _)| n.as_str() == name)?;
    Some(headers.remove(idx).1)
}
