//! Class Model

/// Fields a class record must carry on create
pub const CLASS_REQUIRED_FIELDS: [&str; 5] = ["date", "startTime", "endTime", "name", "type"];
