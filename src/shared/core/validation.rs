use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A single field-level rule failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub rule: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.rule)
    }
}

/// Every rule failure found in a request, never just the first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", list(.violations))]
pub struct ValidationErrors {
    pub violations: Vec<Violation>,
}

impl ValidationErrors {
    /// Runs every check and collects the failures. `Ok(())` when all passed.
    pub fn from_checks(
        checks: impl IntoIterator<Item = Option<Violation>>,
    ) -> Result<(), ValidationErrors> {
        let violations: Vec<Violation> = checks.into_iter().flatten().collect();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors { violations })
        }
    }
}

fn list(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn not_empty(field: &'static str, value: &str) -> Option<Violation> {
    value.trim().is_empty().then(|| Violation {
        field,
        rule: "must not be empty".to_string(),
    })
}

/// Structural email check. The empty case belongs to [`not_empty`] so a blank
/// field reports a single violation.
pub fn email_shaped(field: &'static str, value: &str) -> Option<Violation> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let shaped = value
        .split_once('@')
        .map(|(local, domain)| !local.is_empty() && domain.contains('.'))
        .unwrap_or(false);
    (!shaped).then(|| Violation {
        field,
        rule: "must be a valid email address".to_string(),
    })
}

pub fn min_chars(field: &'static str, value: &str, min: usize) -> Option<Violation> {
    (value.chars().count() < min).then(|| Violation {
        field,
        rule: format!("must be at least {min} characters"),
    })
}
