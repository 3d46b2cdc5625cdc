// Build-time identity from Cargo.toml; used for the startup log line and the HTTP User-Agent.

/// Package version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name (from Cargo.toml).
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// `User-Agent` header value sent with the OpenTSDB query.
pub fn user_agent() -> String {
    format!("{}/{}", NAME, VERSION)
}
