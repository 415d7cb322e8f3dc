use std::collections::HashMap;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

use crate::http::request::{Method, Request};

#[derive(Debug, Error)]
pub enum ParseError {
    /// Request line did not carry the three `METHOD PATH VERSION` tokens.
    #[error("malformed request line {0:?}")]
    InvalidRequestLine(String),
    /// Content-Length header present but not a non-negative integer.
    #[error("invalid Content-Length {0:?}")]
    InvalidContentLength(String),
    /// Request head contained bytes that are not valid UTF-8.
    #[error("request head is not valid UTF-8")]
    InvalidEncoding,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Protocol violations are answered with a 400 response; I/O failures
    /// abort the connection without one.
    pub fn is_protocol(&self) -> bool {
        !matches!(self, ParseError::Io(_))
    }
}

/// Reads one HTTP request off the stream.
///
/// Returns `Ok(None)` when the client disconnected (or sent a blank line)
/// before a request line; no response is owed in that case. The body is read
/// only for POST requests that declare a `Content-Length`, and exactly that
/// many bytes are consumed from the stream.
pub async fn read_request<R>(reader: &mut R) -> Result<Option<Request>, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let request_line = match read_line(reader).await? {
        Some(line) if !line.is_empty() => line,
        _ => return Ok(None),
    };

    let parts: Vec<&str> = request_line.split(' ').collect();
    if parts.len() < 3 {
        return Err(ParseError::InvalidRequestLine(request_line.clone()));
    }

    let method = Method::parse(parts[0]);
    let path = parts[1].to_string();
    let version = parts[2].to_string();

    let mut headers = HashMap::new();
    loop {
        match read_line(reader).await? {
            // EOF inside the header block ends it, like a blank line would.
            None => break,
            Some(line) if line.is_empty() => break,
            Some(line) => {
                // Only `Name: Value` with the exact ": " separator counts;
                // anything else is silently skipped. Values stay verbatim.
                if let Some((name, value)) = line.split_once(": ") {
                    if !name.is_empty() {
                        headers.insert(name.to_string(), value.to_string());
                    }
                }
            }
        }
    }

    let mut body = Vec::new();
    if method == Method::POST {
        if let Some(declared) = headers.get("Content-Length") {
            let length: usize = declared
                .parse()
                .map_err(|_| ParseError::InvalidContentLength(declared.clone()))?;
            body = vec![0u8; length];
            reader.read_exact(&mut body).await?;
        }
    }

    Ok(Some(Request {
        method,
        path,
        version,
        headers,
        body,
    }))
}

/// Reads one line, accepting both CRLF and bare LF terminators.
///
/// `Ok(None)` means the stream hit EOF before any byte of this line.
async fn read_line<R>(reader: &mut R) -> Result<Option<String>, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let mut raw = Vec::new();
    let n = reader.read_until(b'\n', &mut raw).await?;
    if n == 0 {
        return Ok(None);
    }

    if raw.last() == Some(&b'\n') {
        raw.pop();
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
    }

    String::from_utf8(raw)
        .map(Some)
        .map_err(|_| ParseError::InvalidEncoding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::BufReader;

    #[tokio::test]
    async fn parse_simple_get() {
        let raw: &[u8] = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let mut reader = BufReader::new(raw);

        let request = read_request(&mut reader).await.unwrap().unwrap();

        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/");
        assert_eq!(request.headers.get("Host").unwrap(), "example.com");
    }
}
