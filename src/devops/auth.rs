use base64::{prelude::BASE64_STANDARD, Engine};

/// `Authorization` header value for a personal access token: basic auth
/// with an empty user name.
pub fn encode_basic_auth(token: &str) -> String {
    format!("Basic {}", BASE64_STANDARD.encode(format!(":{token}")))
}
