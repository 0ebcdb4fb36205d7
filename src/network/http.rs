use serde::Serialize;
use thiserror::Error;
use tracing::error;

const HEAD_TERMINATOR: &[u8] = b"\r\n\r\n";

// ── Errors ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("no route for {0}")]
    NotFound(String),
    #[error("method {method} not allowed on {path}")]
    MethodNotAllowed { method: String, path: String },
    #[error("request not received within {0} seconds")]
    RequestTimeout(u64),
    #[error("request exceeds {0} bytes")]
    PayloadTooLarge(usize),
    #[error("{0}")]
    Unprocessable(String),
}

impl ApiError {
    pub fn status(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::MethodNotAllowed { .. } => 405,
            ApiError::RequestTimeout(_) => 408,
            ApiError::PayloadTooLarge(_) => 413,
            ApiError::Unprocessable(_) => 422,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

// ── Request ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Options,
    Other(String),
}

impl Method {
    fn parse(raw: &str) -> Self {
        match raw {
            "GET" => Method::Get,
            "POST" => Method::Post,
            "OPTIONS" => Method::Options,
            other => Method::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Options => "OPTIONS",
            Method::Other(m) => m,
        }
    }
}

/// A parsed HTTP/1.1 request. Path and query values are percent-decoded;
/// `raw_path` keeps the path as it arrived so `%2F` stays inside a segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub path: String,
    pub raw_path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// Parse a complete request (head plus body) from raw bytes.
    pub fn parse(raw: &[u8]) -> Result<Self, ApiError> {
        let head_len = head_length(raw)
            .ok_or_else(|| ApiError::BadRequest("incomplete request head".to_string()))?;
        let head = std::str::from_utf8(&raw[..head_len])
            .map_err(|_| ApiError::BadRequest("request head is not UTF-8".to_string()))?;

        let mut lines = head.split("\r\n");
        let request_line = lines.next().unwrap_or_default();
        let mut parts = request_line.split_whitespace();
        let (method, target) = match (parts.next(), parts.next(), parts.next()) {
            (Some(m), Some(t), Some(v)) if v.starts_with("HTTP/1.") => (m, t),
            _ => {
                return Err(ApiError::BadRequest(format!(
                    "malformed request line '{}'",
                    request_line
                )))
            }
        };

        let headers = lines
            .filter(|l| !l.is_empty())
            .map(|line| {
                line.split_once(':')
                    .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
                    .ok_or_else(|| ApiError::BadRequest(format!("malformed header '{}'", line)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let (raw_path, raw_query) = target.split_once('?').unwrap_or((target, ""));
        let mut request = Self {
            method: Method::parse(method),
            path: decode_component(raw_path, false)?,
            raw_path: raw_path.to_string(),
            query: parse_query(raw_query)?,
            headers,
            body: Vec::new(),
        };

        let body_start = head_len + HEAD_TERMINATOR.len();
        let body_len = request.content_length()?;
        let available = raw.len().saturating_sub(body_start);
        if available < body_len {
            return Err(ApiError::BadRequest(format!(
                "body truncated: expected {} bytes, got {}",
                body_len, available
            )));
        }
        request.body = raw[body_start..body_start + body_len].to_vec();
        Ok(request)
    }

    /// Non-empty path segments, split before decoding.
    pub fn segments(&self) -> Result<Vec<String>, ApiError> {
        self.raw_path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| decode_component(s, false))
            .collect()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// First value of a query parameter.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn content_length(&self) -> Result<usize, ApiError> {
        match self.header("Content-Length") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ApiError::BadRequest(format!("invalid Content-Length '{}'", raw))),
            None => Ok(0),
        }
    }
}

/// Byte offset of the blank line ending the head, if it has arrived.
pub fn head_length(raw: &[u8]) -> Option<usize> {
    raw.windows(HEAD_TERMINATOR.len())
        .position(|w| w == HEAD_TERMINATOR)
}

/// Total bytes (head + body) a request needs, once its head is complete.
pub fn expected_length(raw: &[u8]) -> Option<usize> {
    let head_len = head_length(raw)?;
    let head = String::from_utf8_lossy(&raw[..head_len]);
    let body_len = head
        .split("\r\n")
        .skip(1)
        .filter_map(|l| l.split_once(':'))
        .find(|(k, _)| k.trim().eq_ignore_ascii_case("Content-Length"))
        .and_then(|(_, v)| v.trim().parse::<usize>().ok())
        .unwrap_or(0);
    // Saturate so an absurd Content-Length still trips the size limit.
    Some(
        (head_len + HEAD_TERMINATOR.len())
            .checked_add(body_len)
            .unwrap_or(usize::MAX),
    )
}

fn parse_query(raw: &str) -> Result<Vec<(String, String)>, ApiError> {
    raw.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            Ok((decode_component(k, true)?, decode_component(v, true)?))
        })
        .collect()
}

fn decode_component(raw: &str, plus_as_space: bool) -> Result<String, ApiError> {
    let raw = if plus_as_space {
        raw.replace('+', " ")
    } else {
        raw.to_string()
    };
    urlencoding::decode(&raw)
        .map(|s| s.into_owned())
        .map_err(|_| ApiError::BadRequest(format!("invalid percent-encoding in '{}'", raw)))
}

// ── Response ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => Self { status, body },
            Err(e) => {
                error!("Failed to serialize response body: {}", e);
                Self {
                    status: 500,
                    body: br#"{"error":"internal serialization error"}"#.to_vec(),
                }
            }
        }
    }

    pub fn ok<T: Serialize>(value: &T) -> Self {
        Self::json(200, value)
    }

    pub fn no_content() -> Self {
        Self {
            status: 204,
            body: Vec::new(),
        }
    }

    pub fn error(err: &ApiError) -> Self {
        Self::json(
            err.status(),
            &ErrorBody {
                error: err.to_string(),
            },
        )
    }

    /// Serialize as an HTTP/1.1 response with permissive CORS headers.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut head = format!(
            "HTTP/1.1 {} {}\r\n\
            Access-Control-Allow-Origin: *\r\n\
            Connection: close\r\n",
            self.status,
            reason_phrase(self.status)
        );
        if self.status == 204 {
            head.push_str(
                "Access-Control-Allow-Methods: GET, POST, OPTIONS\r\n\
                Access-Control-Allow-Headers: Content-Type\r\n",
            );
        } else {
            head.push_str(&format!(
                "Content-Type: application/json\r\n\
                Content-Length: {}\r\n",
                self.body.len()
            ));
        }
        head.push_str("\r\n");

        let mut bytes = head.into_bytes();
        bytes.extend_from_slice(&self.body);
        bytes
    }
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        408 => "Request Timeout",
        413 => "Payload Too Large",
        422 => "Unprocessable Entity",
        _ => "Internal Server Error",
    }
}
