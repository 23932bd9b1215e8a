use sea_orm::{DbErr, SqlErr};
use serde_json::Value as JsonValue;

/// SQLSTATE 23505 as classified by the driver. Errors without a driver code
/// (mock connections, `DbErr::Custom`) fall back to the message text.
pub fn is_unique_violation(err: &DbErr) -> bool {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => true,
        Some(_) => false,
        None => {
            let msg = err.to_string().to_lowercase();
            msg.contains("duplicate key") || msg.contains("unique constraint") || msg.contains("23505")
        }
    }
}

/// JSONB string arrays; anything that is not an array of strings reads as empty.
pub fn to_string_list(value: &JsonValue) -> Vec<String> {
    serde_json::from_value(value.clone()).unwrap_or_default()
}

pub fn from_string_list(values: Vec<String>) -> JsonValue {
    JsonValue::from(values)
}

/// `%search%` for ILIKE, with the pattern metacharacters escaped.
pub fn contains_pattern(search: &str) -> String {
    let escaped = search
        .trim()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}
