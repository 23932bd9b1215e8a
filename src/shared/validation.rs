use email_address::EmailAddress;
use regex::Regex;
use std::sync::OnceLock;

/// Field-level validation failures, reported together.
///
/// Rendered as the individual messages joined by `", "`, which is what the
/// admin forms display verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{}", .messages.join(", "))]
pub struct ValidationErrors {
    messages: Vec<String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
        }
    }

    pub fn add(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// `Ok(value)` when nothing was recorded.
    pub fn finish<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    /// Trims `value` and records `message` when nothing is left.
    pub fn required(&mut self, value: &str, message: &str) -> String {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.add(message);
        }
        trimmed.to_string()
    }

    pub fn max_chars(&mut self, value: &str, max: usize, message: &str) {
        if value.chars().count() > max {
            self.add(message);
        }
    }

    pub fn within<T: PartialOrd>(&mut self, value: T, min: T, max: T, message: &str) {
        if value < min || value > max {
            self.add(message);
        }
    }
}

/// Trimmed text, with blank input collapsed to `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Trims every entry and drops the blank ones.
pub fn text_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,3})+$").expect("Invalid email pattern")
    })
}

/// Accepts addresses that are both RFC-valid and match the public form's pattern.
pub fn is_valid_email(email: &str) -> bool {
    EmailAddress::is_valid(email) && email_pattern().is_match(email)
}
