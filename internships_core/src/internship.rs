use crate::error::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt, str::FromStr};

/// An internship as the server sees it. We don't know the backend's schema
/// yet, so this is whatever JSON the server sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Internship(pub Value);

impl Internship {
    /// The record's ID, if the server gave it one. Numeric IDs are converted
    /// to strings.
    pub fn id(&self) -> Option<InternshipId> {
        match self.0.get("id")? {
            Value::String(id) => id.parse().ok(),
            Value::Number(id) => id.to_string().parse().ok(),
            _ => None,
        }
    }

    /// Look up a single top-level field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Does every top-level field in `data` appear here with the same value?
    /// Fields the server adds (like `id`) are ignored.
    pub fn contains(&self, data: &Value) -> bool {
        match (data, &self.0) {
            (Value::Object(expected), Value::Object(actual)) => expected
                .iter()
                .all(|(key, value)| actual.get(key) == Some(value)),
            (expected, actual) => expected == actual,
        }
    }
}

impl From<Value> for Internship {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// The ID of a single internship. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InternshipId(String);

impl InternshipId {
    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for InternshipId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_string())
    }
}

impl TryFrom<String> for InternshipId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            Err(Error::EmptyId)
        } else {
            Ok(Self(value))
        }
    }
}

impl From<InternshipId> for String {
    fn from(id: InternshipId) -> Self {
        id.0
    }
}

impl fmt::Display for InternshipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_ids_are_rejected() {
        assert!(matches!("".parse::<InternshipId>(), Err(Error::EmptyId)));
        assert!(matches!("  ".parse::<InternshipId>(), Err(Error::EmptyId)));
    }

    #[test]
    fn reads_string_ids() {
        let internship = Internship(json!({"id": "abc", "title": "Intern"}));

        assert_eq!(internship.id().map(String::from), Some("abc".to_string()));
    }

    #[test]
    fn reads_numeric_ids() {
        let internship = Internship(json!({"id": 7}));

        assert_eq!(internship.id().map(String::from), Some("7".to_string()));
    }

    #[test]
    fn missing_id() {
        assert_eq!(Internship(json!({"title": "Intern"})).id(), None);
        assert_eq!(Internship(json!({"id": ""})).id(), None);
    }

    #[test]
    fn contains_ignores_extra_fields() {
        let stored = Internship(json!({"id": "1", "title": "Intern", "duration": "3 months"}));

        assert!(stored.contains(&json!({"title": "Intern"})));
        assert!(!stored.contains(&json!({"title": "Manager"})));
    }
}
