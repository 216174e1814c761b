use std::collections::BTreeMap;

/// Validation messages collected while checking a form.
///
/// Field errors are keyed by the submitted field name; errors that concern
/// the form as a whole (a failed login, say) go to the non-field list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<String, Vec<String>>,
    non_field: Vec<String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn add_non_field(&mut self, message: impl Into<String>) {
        self.non_field.push(message.into());
    }

    pub fn for_field(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn non_field(&self) -> &[String] {
        &self.non_field
    }

    pub fn has(&self, field: &str) -> bool {
        !self.for_field(field).is_empty()
    }

    pub fn contains(&self, field: &str, message: &str) -> bool {
        self.for_field(field).iter().any(|m| m == message)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.non_field.is_empty()
    }
}
