//! API Response types
//!
//! Success bodies for write endpoints. Reads return records directly.

use serde::{Deserialize, Serialize};

/// `{ "message": ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Single insert result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub message: String,
    pub inserted_id: String,
}

impl CreatedResponse {
    pub fn new(message: impl Into<String>, inserted_id: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            inserted_id: inserted_id.into(),
        }
    }
}

/// Batch insert result, ids in input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchCreatedResponse {
    pub message: String,
    pub inserted_ids: Vec<String>,
}

impl BatchCreatedResponse {
    pub fn new(message: impl Into<String>, inserted_ids: Vec<String>) -> Self {
        Self {
            message: message.into(),
            inserted_ids,
        }
    }
}
