//! Shared types for the stars ledger
//!
//! Wire models used by the server and its clients: JSON documents,
//! create/update payloads, and the standard response bodies.

pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use models::{Document, STORE_ID_FIELD};
pub use response::{BatchCreatedResponse, CreatedResponse, MessageResponse};
pub use serde::{Deserialize, Serialize};
