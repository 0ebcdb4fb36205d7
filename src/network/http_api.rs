use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::time::timeout;
use tracing::{debug, error, info, warn};

use super::http::{self, ApiError, HttpRequest, HttpResponse};
use super::router;
use crate::config::ServerConfig;

const READ_CHUNK: usize = 4096;

/// Lightweight HTTP API server for the dashboard, materials library,
/// project intake, and recommendations pages.
///
/// One task per connection, one request per connection.
pub async fn start(config: ServerConfig) {
    let listener = match TcpListener::bind(config.http_addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind HTTP API on {}: {}", config.http_addr, e);
            return;
        }
    };

    info!("HTTP API listening on http://{}", config.http_addr);
    serve(listener, config.max_request_bytes, config.request_timeout).await;
}

/// Accept loop over an already-bound listener.
pub async fn serve(listener: TcpListener, max_request_bytes: usize, request_timeout: Duration) {
    loop {
        let (mut stream, addr) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                error!("HTTP API accept error: {}", e);
                continue;
            }
        };

        tokio::spawn(async move {
            let response = match read_request_within(&mut stream, max_request_bytes, request_timeout)
                .await
            {
                Ok(request) => {
                    debug!("{} {} from {}", request.method.as_str(), request.path, addr);
                    router::route(&request)
                }
                Err(e) => {
                    warn!("Rejected request from {}: {}", addr, e);
                    HttpResponse::error(&e)
                }
            };
            if let Err(e) = stream.write_all(&response.to_bytes()).await {
                warn!("Failed to write response to {}: {}", addr, e);
            }
            let _ = stream.shutdown().await;
        });
    }
}

/// `read_request` with a deadline; a client that stalls gets 408.
pub async fn read_request_within<S>(
    stream: &mut S,
    max_bytes: usize,
    deadline: Duration,
) -> Result<HttpRequest, ApiError>
where
    S: AsyncRead + Unpin,
{
    timeout(deadline, read_request(stream, max_bytes))
        .await
        .unwrap_or(Err(ApiError::RequestTimeout(deadline.as_secs())))
}

/// Read one request: the head, then as many body bytes as
/// `Content-Length` announces.
pub async fn read_request<S>(stream: &mut S, max_bytes: usize) -> Result<HttpRequest, ApiError>
where
    S: AsyncRead + Unpin,
{
    let mut buf = Vec::with_capacity(READ_CHUNK);
    let mut chunk = [0u8; READ_CHUNK];

    loop {
        if let Some(total) = http::expected_length(&buf) {
            if total > max_bytes {
                return Err(ApiError::PayloadTooLarge(max_bytes));
            }
            if buf.len() >= total {
                return HttpRequest::parse(&buf);
            }
        } else if buf.len() > max_bytes {
            return Err(ApiError::PayloadTooLarge(max_bytes));
        }

        let n = stream
            .read(&mut chunk)
            .await
            .map_err(|e| ApiError::BadRequest(format!("read failed: {}", e)))?;
        if n == 0 {
            // Peer closed early; parse what arrived so the error names the problem.
            return HttpRequest::parse(&buf);
        }
        buf.extend_from_slice(&chunk[..n]);
    }
}
