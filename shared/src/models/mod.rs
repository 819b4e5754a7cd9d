//! Data models
//!
//! Records travel as JSON documents. Store ids are rendered as the
//! string field `_id`; business identifiers live inside the document.

pub mod class;
pub mod dashboard;
pub mod document;
pub mod person;
pub mod settings;
pub mod star;

// Re-exports
pub use class::*;
pub use dashboard::*;
pub use document::*;
pub use person::*;
pub use settings::*;
pub use star::*;
