//! Shared networking constants and helpers used by client and server.

/// TCP port on which the HTTP API server listens.
pub const SERVER_PORT: u16 = 3000;

/// Environment variable the client reads to override the server base URL.
pub const BASE_URL_ENV: &str = "API_BASE_URL";

/// Default server base URL used by the client when no override is present.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Helper to format an IPv4 address with a port like "ip:port".
pub fn addr(ip: &str, port: u16) -> String {
    format!("{}:{}", ip, port)
}
