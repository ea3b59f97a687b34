//! Coercion of loosely typed path and query values into what the handlers
//! declare, with field-addressed rejections.

use crate::errors::AppError;

/// Parse an integer path segment, naming the segment in the rejection.
pub fn int_segment(name: &str, raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::invalid_field(format!("path.{name}"), "must be an integer"))
}

/// Parse a non-negative integer query parameter, falling back to `default`
/// when the parameter is absent.
pub fn index_param(name: &str, raw: Option<&str>, default: usize) -> Result<usize, AppError> {
    let Some(raw) = raw else {
        return Ok(default);
    };

    raw.trim().parse().map_err(|_| {
        AppError::invalid_field(
            format!("query.{name}"),
            "must be a non-negative integer",
        )
    })
}

/// Boolean query parameter semantics: a fixed truthy vocabulary, everything
/// else (including absence) is false. Never a rejection.
pub fn truthy_flag(raw: Option<&str>) -> bool {
    raw.is_some_and(|value| {
        matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "true" | "1" | "on" | "yes"
        )
    })
}

/// Treat an empty string the same as an absent parameter.
pub fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_segment_parses_signed_integers() {
        assert_eq!(int_segment("item_id", "42").expect("valid"), 42);
        assert_eq!(int_segment("item_id", "-3").expect("valid"), -3);
    }

    #[test]
    fn int_segment_rejects_text() {
        let error = int_segment("item_id", "abc").expect_err("expected rejection");
        assert!(matches!(error, AppError::Validation { .. }));
    }

    #[test]
    fn index_param_defaults_when_absent() {
        assert_eq!(index_param("count", None, 10).expect("valid"), 10);
    }

    #[test]
    fn index_param_parses_provided_value() {
        assert_eq!(index_param("count", Some("2"), 10).expect("valid"), 2);
    }

    #[test]
    fn index_param_rejects_negative_and_text() {
        index_param("start_index", Some("-1"), 0).expect_err("expected rejection");
        index_param("start_index", Some("abc"), 0).expect_err("expected rejection");
    }

    #[test]
    fn truthy_vocabulary_is_case_insensitive() {
        for value in ["true", "True", "TRUE", "1", "on", "On", "yes", "YES"] {
            assert!(truthy_flag(Some(value)), "{value} should be truthy");
        }
    }

    #[test]
    fn everything_else_is_false() {
        for value in ["false", "0", "off", "no", "banana", ""] {
            assert!(!truthy_flag(Some(value)), "{value} should be falsy");
        }
        assert!(!truthy_flag(None));
    }

    #[test]
    fn non_empty_drops_blank_values() {
        assert_eq!(non_empty(Some("note".to_string())).as_deref(), Some("note"));
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(None), None);
    }
}
