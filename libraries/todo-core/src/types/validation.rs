/// Field-keyed validation messages returned by the backend
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Map from backend field name to one or more human-readable messages.
///
/// Keys are kept exactly as the backend sends them (`first_name`, `email`, ...).
/// A bare string value is read as a single message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl<'de> Deserialize<'de> for ValidationErrors {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, OneOrMany>::deserialize(deserializer)?;
        Ok(Self(
            raw.into_iter()
                .map(|(field, messages)| {
                    let messages = match messages {
                        OneOrMany::One(message) => vec![message],
                        OneOrMany::Many(messages) => messages,
                    };
                    (field, messages)
                })
                .collect(),
        ))
    }
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message for a field
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// All messages for a backend field
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// First message for a backend field
    pub fn first(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(|m| m.first()).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_lists_and_bare_strings() {
        let errors: ValidationErrors = serde_json::from_value(serde_json::json!({
            "email": ["has already been taken", "is invalid"],
            "password": "should be at least 8 character(s)"
        }))
        .unwrap();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.first("email"), Some("has already been taken"));
        assert_eq!(errors.get("email").map(<[String]>::len), Some(2));
        assert_eq!(
            errors.first("password"),
            Some("should be at least 8 character(s)")
        );
        assert!(errors.get("first_name").is_none());
    }

    #[test]
    fn test_insert_appends() {
        let mut errors = ValidationErrors::new();
        assert!(errors.is_empty());
        errors.insert("email", "can't be blank");
        errors.insert("email", "is invalid");
        assert_eq!(errors.get("email").unwrap(), ["can't be blank", "is invalid"]);
    }
}
