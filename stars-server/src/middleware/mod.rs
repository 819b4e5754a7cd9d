//! HTTP middleware

pub mod logging;
pub mod request_id;

pub use logging::logging_middleware;
pub use request_id::{REQUEST_ID_HEADER, XRequestId};
