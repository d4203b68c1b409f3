//! Deciding whether a message is a user turn.

use serde_json::Value;

const USER: &str = "user";

/// How a rule compares the field value against `"user"`.
#[derive(Debug, Clone, Copy)]
enum RoleMatch {
    /// Case-sensitive equality.
    Exact,
    /// Case-insensitive substring.
    Contains,
}

/// One named field check.
#[derive(Debug, Clone, Copy)]
struct RoleRule {
    field: &'static str,
    matching: RoleMatch,
}

impl RoleRule {
    const fn exact(field: &'static str) -> Self {
        Self {
            field,
            matching: RoleMatch::Exact,
        }
    }

    const fn contains(field: &'static str) -> Self {
        Self {
            field,
            matching: RoleMatch::Contains,
        }
    }

    fn matches(&self, value: &str) -> bool {
        match self.matching {
            RoleMatch::Exact => value == USER,
            RoleMatch::Contains => value.to_lowercase().contains(USER),
        }
    }
}

/// User-turn rules in evaluation order.
///
/// Only `author` is matched loosely: a role of `"superuser"` or `"User"` is
/// not a user turn, an author of `"Human User"` is.
const USER_RULES: &[RoleRule] = &[
    RoleRule::exact("role"),
    RoleRule::exact("sender"),
    RoleRule::exact("type"),
    RoleRule::exact("from"),
    RoleRule::contains("author"),
];

/// Returns `true` if `message` represents a user turn.
///
/// Rules are checked in order and the first match wins. Fields must hold
/// strings; messages that are not mappings are never user turns.
///
/// # Example
///
/// ```rust
/// use promptpack::normalize::is_user_message;
/// use serde_json::json;
///
/// assert!(is_user_message(&json!({"role": "user"})));
/// assert!(is_user_message(&json!({"author": "End USER"})));
/// assert!(!is_user_message(&json!({"role": "User"})));
/// assert!(!is_user_message(&json!({"role": "assistant"})));
/// ```
pub fn is_user_message(message: &Value) -> bool {
    let Some(object) = message.as_object() else {
        return false;
    };

    USER_RULES.iter().any(|rule| {
        object
            .get(rule.field)
            .and_then(Value::as_str)
            .is_some_and(|value| rule.matches(value))
    })
}
