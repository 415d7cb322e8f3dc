use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Serializes a response into wire bytes.
///
/// Headers are emitted in the order the response carries them. When
/// `include_body` is false only the status line and header block are
/// produced, which is what a HEAD exchange needs.
fn serialize_response(response: &Response, include_body: bool) -> Vec<u8> {
    let mut buffer = Vec::new();

    buffer.extend_from_slice(
        format!(
            "{} {} {}\r\n",
            HTTP_VERSION,
            response.status.as_u16(),
            response.status.reason_phrase()
        )
        .as_bytes(),
    );

    for (name, value) in &response.headers {
        buffer.extend_from_slice(format!("{name}: {value}\r\n").as_bytes());
    }
    buffer.extend_from_slice(b"\r\n");

    if include_body {
        buffer.extend_from_slice(&response.body);
    }

    buffer
}

/// Writes one serialized response to a stream, tracking partial progress.
pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response, head_only: bool) -> Self {
        Self {
            buffer: serialize_response(response, !head_only),
            written: 0,
        }
    }

    /// The exact bytes that will go on the wire.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;
            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }
            self.written += n;
        }
        stream.flush().await?;
        Ok(())
    }
}
