pub mod devops;
pub mod error;
pub mod hello;
pub mod status;
pub mod test_diagram;
pub mod test_http;

pub use self::error::ApiError;
