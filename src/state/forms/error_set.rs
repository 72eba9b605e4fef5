//! Field-level validation messages

use super::field::FieldName;
use std::collections::BTreeMap;

/// Validation messages keyed by field. A field absent from the set is valid
/// or has not been validated yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet {
    messages: BTreeMap<FieldName, String>,
}

impl ErrorSet {
    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.messages.insert(field, message.into());
    }

    /// Remove a field's message, returning it if one was present
    pub fn remove(&mut self, field: FieldName) -> Option<String> {
        self.messages.remove(&field)
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    #[cfg(test)]
    pub fn contains(&self, field: FieldName) -> bool {
        self.messages.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Fields with a message, in display order
    pub fn fields(&self) -> Vec<FieldName> {
        self.messages.keys().copied().collect()
    }

    /// First invalid field in display order
    pub fn first_field(&self) -> Option<FieldName> {
        self.messages.keys().next().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.messages.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let errors = ErrorSet::default();
        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
        assert!(errors.first_field().is_none());
    }

    #[test]
    fn test_insert_and_get() {
        let mut errors = ErrorSet::default();
        errors.insert(FieldName::Email, "bad");
        assert!(errors.contains(FieldName::Email));
        assert_eq!(errors.get(FieldName::Email), Some("bad"));
        assert_eq!(errors.get(FieldName::City), None);
    }

    #[test]
    fn test_remove_returns_message() {
        let mut errors = ErrorSet::default();
        errors.insert(FieldName::City, "missing");
        assert_eq!(errors.remove(FieldName::City), Some("missing".to_string()));
        assert_eq!(errors.remove(FieldName::City), None);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_fields_follow_display_order() {
        let mut errors = ErrorSet::default();
        errors.insert(FieldName::TpoName, "a");
        errors.insert(FieldName::FullName, "b");
        errors.insert(FieldName::City, "c");
        assert_eq!(
            errors.fields(),
            vec![FieldName::FullName, FieldName::City, FieldName::TpoName]
        );
        assert_eq!(errors.first_field(), Some(FieldName::FullName));
    }
}
