//! Person Model
//!
//! Persons (masters / supervisors) are free-form documents identified by
//! a caller-chosen business id stored under [`BUSINESS_ID_FIELD`].

/// Business identifier field inside a person document
pub const BUSINESS_ID_FIELD: &str = "id";

/// Default required fields for a person create payload
pub const DEFAULT_PERSON_REQUIRED_FIELDS: [&str; 3] = ["id", "name", "branchCode"];

/// Field on a star document referencing the person, e.g. `masterId`
pub fn person_ref_field(resource: &str) -> String {
    format!("{resource}Id")
}

/// Dashboard query parameter naming the person, e.g. `master_id`
pub fn person_query_param(resource: &str) -> String {
    format!("{resource}_id")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_names_follow_resource() {
        assert_eq!(person_ref_field("master"), "masterId");
        assert_eq!(person_ref_field("supervisor"), "supervisorId");
        assert_eq!(person_query_param("master"), "master_id");
    }
}
