use std::sync::Arc;

use tokio::io::{AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tracing::{info, warn};

use crate::http::handlers::{self, Handler};
use crate::http::parser;
use crate::http::request::Method;
use crate::http::writer::ResponseWriter;

/// One accepted TCP connection, serving exactly one exchange.
pub struct Connection {
    stream: BufReader<TcpStream>,
    id: u64,
    handler: Arc<Handler>,
}

impl Connection {
    pub fn new(stream: TcpStream, id: u64, handler: Arc<Handler>) -> Self {
        Self {
            stream: BufReader::new(stream),
            id,
            handler,
        }
    }

    /// Reads one request, writes one response, closes.
    ///
    /// Consumes the connection, so the socket is dropped on every exit path.
    /// Keep-alive is not honored; the response always says `Connection:
    /// close` and the stream is shut down right after it.
    pub async fn run(mut self) -> anyhow::Result<()> {
        match parser::read_request(&mut self.stream).await {
            Ok(Some(request)) => {
                info!(
                    conn = self.id,
                    "Request: {} {} {}", request.method, request.path, request.version
                );
                let head_only = request.method == Method::HEAD;
                let response = self.handler.dispatch(&request).await;
                let mut writer = ResponseWriter::new(&response, head_only);
                writer.write_to_stream(&mut self.stream).await?;
                info!(
                    conn = self.id,
                    status = response.status.as_u16(),
                    "Response sent"
                );
            }
            Ok(None) => {
                info!(conn = self.id, "Client disconnected before sending a request");
            }
            Err(err) if err.is_protocol() => {
                warn!(conn = self.id, error = %err, "Rejecting malformed request");
                let response = handlers::bad_request(&err.to_string());
                let mut writer = ResponseWriter::new(&response, false);
                writer.write_to_stream(&mut self.stream).await?;
            }
            // Raw I/O failure mid-read; nothing can be sent back.
            Err(err) => return Err(err.into()),
        }

        self.stream.shutdown().await.ok();
        Ok(())
    }
}
