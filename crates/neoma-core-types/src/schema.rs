//! Canonical field keys for structured log records
//!
//! These keys are reserved: fields merged from caller context never
//! overwrite them.

pub const FIELD_LEVEL: &str = "level";
pub const FIELD_MSG: &str = "msg";
pub const FIELD_CONTEXT: &str = "context";

/// Keys owned by the record itself rather than by caller context
pub const RESERVED_FIELDS: [&str; 2] = [FIELD_LEVEL, FIELD_MSG];

/// Whether `key` is owned by the record
pub fn is_reserved(key: &str) -> bool {
    RESERVED_FIELDS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_fields() {
        assert!(is_reserved("level"));
        assert!(is_reserved("msg"));
        assert!(!is_reserved("context"));
        assert!(!is_reserved("ctx"));
    }

    #[test]
    fn test_field_names_are_distinct() {
        assert_ne!(FIELD_LEVEL, FIELD_MSG);
        assert_ne!(FIELD_MSG, FIELD_CONTEXT);
        assert!(!is_reserved(FIELD_CONTEXT));
    }
}
