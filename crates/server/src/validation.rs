//! Input validation for the two request shapes that accept caller data.
//!
//! Pure functions: raw input in, either a typed value or a list of
//! field-level violation messages out. Callers join the list with `,`.
//! Validation runs on the raw query map / JSON body so that a malformed
//! field produces a message instead of an extractor rejection.

use std::collections::HashMap;

use aggra_client::NewTodo;
use serde_json::Value;

/// Validated pagination parameters for `/images`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub size: i64,
    pub offset: i64,
}

/// Validate the pagination query: `size` required integer, `offset` optional
/// integer defaulting to 0.
pub fn validate_pagination(query: &HashMap<String, String>) -> Result<PageParams, Vec<String>> {
    let mut details = Vec::new();

    let size = match query.get("size") {
        None => {
            details.push("\"size\" is required".to_string());
            None
        }
        Some(raw) => match raw.parse::<i64>() {
            Ok(v) => Some(v),
            Err(_) => {
                details.push("\"size\" must be an integer".to_string());
                None
            }
        },
    };

    let offset = match query.get("offset") {
        None => Some(0),
        Some(raw) => match raw.parse::<i64>() {
            Ok(v) => Some(v),
            Err(_) => {
                details.push("\"offset\" must be an integer".to_string());
                None
            }
        },
    };

    match (size, offset) {
        (Some(size), Some(offset)) if details.is_empty() => Ok(PageParams { size, offset }),
        _ => Err(details),
    }
}

/// Validate a todo payload: `id` optional integer (null or blank allowed),
/// `title` required string of 1-100 characters, `completed` required boolean.
pub fn validate_todo(body: &Value) -> Result<NewTodo, Vec<String>> {
    let Some(obj) = body.as_object() else {
        return Err(vec!["body must be an object".to_string()]);
    };

    let mut details = Vec::new();

    let id = match obj.get("id") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::Number(n)) => match n.as_u64() {
            Some(v) => Some(v),
            None => {
                details.push("\"id\" must be an integer".to_string());
                None
            }
        },
        Some(_) => {
            details.push("\"id\" must be an integer".to_string());
            None
        }
    };

    let title = match obj.get("title") {
        None => {
            details.push("\"title\" is required".to_string());
            None
        }
        Some(Value::String(s)) => {
            if s.is_empty() {
                details.push("\"title\" is not allowed to be empty".to_string());
                None
            } else if s.chars().count() > 100 {
                details.push("\"title\" length must be less than or equal to 100 characters long".to_string());
                None
            } else {
                Some(s.clone())
            }
        }
        Some(_) => {
            details.push("\"title\" must be a string".to_string());
            None
        }
    };

    let completed = match obj.get("completed") {
        None => {
            details.push("\"completed\" is required".to_string());
            None
        }
        Some(Value::Bool(b)) => Some(*b),
        Some(_) => {
            details.push("\"completed\" must be a boolean".to_string());
            None
        }
    };

    match (title, completed) {
        (Some(title), Some(completed)) if details.is_empty() => Ok(NewTodo { id, title, completed }),
        _ => Err(details),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_pagination_valid() {
        let params = validate_pagination(&query(&[("size", "2"), ("offset", "1")])).unwrap();
        assert_eq!(params, PageParams { size: 2, offset: 1 });
    }

    #[test]
    fn test_pagination_offset_defaults_to_zero() {
        let params = validate_pagination(&query(&[("size", "5")])).unwrap();
        assert_eq!(params, PageParams { size: 5, offset: 0 });
    }

    #[test]
    fn test_pagination_size_missing() {
        let details = validate_pagination(&query(&[("offset", "1")])).unwrap_err();
        assert_eq!(details, vec!["\"size\" is required"]);
    }

    #[test]
    fn test_pagination_size_not_an_integer() {
        let details = validate_pagination(&query(&[("size", "two")])).unwrap_err();
        assert_eq!(details, vec!["\"size\" must be an integer"]);
    }

    #[test]
    fn test_pagination_collects_all_messages() {
        let details = validate_pagination(&query(&[("offset", "x")])).unwrap_err();
        assert_eq!(details, vec!["\"size\" is required", "\"offset\" must be an integer"]);
    }

    #[test]
    fn test_pagination_negative_values_pass_schema() {
        // the schema only checks integer-ness; range handling is the pager's job
        let params = validate_pagination(&query(&[("size", "-2"), ("offset", "-1")])).unwrap();
        assert_eq!(params, PageParams { size: -2, offset: -1 });
    }

    #[test]
    fn test_todo_valid() {
        let draft = validate_todo(&json!({"title": "buy milk", "completed": false})).unwrap();
        assert_eq!(draft.id, None);
        assert_eq!(draft.title, "buy milk");
        assert!(!draft.completed);
    }

    #[test]
    fn test_todo_accepts_null_and_blank_id() {
        assert!(validate_todo(&json!({"id": null, "title": "t", "completed": true})).is_ok());
        assert!(validate_todo(&json!({"id": "", "title": "t", "completed": true})).is_ok());
        let draft = validate_todo(&json!({"id": 7, "title": "t", "completed": true})).unwrap();
        assert_eq!(draft.id, Some(7));
    }

    #[test]
    fn test_todo_rejects_non_integer_id() {
        let details = validate_todo(&json!({"id": "seven", "title": "t", "completed": true})).unwrap_err();
        assert_eq!(details, vec!["\"id\" must be an integer"]);
    }

    #[test]
    fn test_todo_title_missing() {
        let details = validate_todo(&json!({"completed": true})).unwrap_err();
        assert_eq!(details, vec!["\"title\" is required"]);
    }

    #[test]
    fn test_todo_title_empty() {
        let details = validate_todo(&json!({"title": "", "completed": true})).unwrap_err();
        assert_eq!(details, vec!["\"title\" is not allowed to be empty"]);
    }

    #[test]
    fn test_todo_title_too_long() {
        let details = validate_todo(&json!({"title": "x".repeat(101), "completed": true})).unwrap_err();
        assert_eq!(details.len(), 1);
        assert!(details[0].contains("100 characters"));
    }

    #[test]
    fn test_todo_title_at_limit_is_valid() {
        assert!(validate_todo(&json!({"title": "x".repeat(100), "completed": true})).is_ok());
    }

    #[test]
    fn test_todo_completed_missing() {
        let details = validate_todo(&json!({"title": "t"})).unwrap_err();
        assert_eq!(details, vec!["\"completed\" is required"]);
    }

    #[test]
    fn test_todo_completed_not_boolean() {
        let details = validate_todo(&json!({"title": "t", "completed": "yes"})).unwrap_err();
        assert_eq!(details, vec!["\"completed\" must be a boolean"]);
    }

    #[test]
    fn test_todo_collects_all_messages() {
        let details = validate_todo(&json!({"id": 1.5})).unwrap_err();
        assert_eq!(
            details,
            vec!["\"id\" must be an integer", "\"title\" is required", "\"completed\" is required"]
        );
    }

    #[test]
    fn test_todo_non_object_body() {
        let details = validate_todo(&json!([1, 2])).unwrap_err();
        assert_eq!(details, vec!["body must be an object"]);
    }
}
