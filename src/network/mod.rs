pub mod http;
pub mod http_api;
pub mod router;
