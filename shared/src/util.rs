use uuid::Uuid;

/// Generate a new store record id.
///
/// Time-ordered UUID (v7) in 32-char lowercase hex, so ordering by id
/// matches insertion order.
pub fn new_record_id() -> String {
    Uuid::now_v7().simple().to_string()
}

/// Parse a caller-supplied record id into its canonical form.
///
/// Accepts hyphenated or simple UUID text. Returns `None` when the string
/// is not a well-formed id.
pub fn parse_record_id(raw: &str) -> Option<String> {
    Uuid::try_parse(raw.trim())
        .ok()
        .map(|id| id.simple().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_canonical_and_ordered() {
        let a = new_record_id();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = new_record_id();
        assert_eq!(a.len(), 32);
        assert_eq!(parse_record_id(&a).as_deref(), Some(a.as_str()));
        assert!(a < b);
    }

    #[test]
    fn hyphenated_ids_are_normalized() {
        let parsed = parse_record_id("0190a7b2-3c4d-7e8f-9a0b-1c2d3e4f5a6b").unwrap();
        assert_eq!(parsed, "0190a7b23c4d7e8f9a0b1c2d3e4f5a6b");
    }

    #[test]
    fn malformed_ids_are_rejected() {
        assert!(parse_record_id("not-an-id").is_none());
        assert!(parse_record_id("").is_none());
        assert!(parse_record_id("64b7f0c2e4b0a1a2b3c4d5e6").is_none());
    }
}
