//! Structured form descriptions handed to the [`FormRenderer`](super::FormRenderer).
//!
//! The workflow only describes what a form contains; layout and widgets are
//! the platform adapter's business.

use std::collections::BTreeMap;

use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormBlock {
    /// Read-only markdown.
    Section { block_id: String, markdown: String },
    TextInput {
        field: String,
        label: String,
        initial_value: Option<String>,
        placeholder: Option<String>,
    },
    Select {
        field: String,
        label: String,
        options: Vec<SelectOption>,
        initial_value: Option<String>,
    },
}

impl FormBlock {
    /// Field name the submitted value is keyed by, for input blocks.
    pub fn field(&self) -> Option<&str> {
        match self {
            FormBlock::Section { .. } => None,
            FormBlock::TextInput { field, .. } | FormBlock::Select { field, .. } => Some(field),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSpec {
    pub view_id: String,
    pub title: String,
    pub blocks: Vec<FormBlock>,
    /// Continuation token returned with the submission.
    pub submit_token: String,
    pub submit_label: String,
    pub close_label: String,
}

impl FormSpec {
    pub fn new(title: impl Into<String>, submit_token: String) -> Self {
        Self {
            view_id: Uuid::new_v4().to_string(),
            title: title.into(),
            blocks: Vec::new(),
            submit_token,
            submit_label: "Confirm".to_string(),
            close_label: "Dismiss".to_string(),
        }
    }

    pub fn block(mut self, block: FormBlock) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn find_field(&self, field: &str) -> Option<&FormBlock> {
        self.blocks.iter().find(|b| b.field() == Some(field))
    }
}

/// Opaque handle the renderer returns for an opened form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewHandle(pub String);

/// Submitted form values keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues(BTreeMap<String, Value>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Text value of `field`. Numbers are rendered back to text so numeric
    /// widgets and plain text inputs read the same way.
    pub fn text(&self, field: &str) -> Option<String> {
        match self.0.get(field)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

impl From<BTreeMap<String, Value>> for FormValues {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn every_form_gets_its_own_view_id() {
        let a = FormSpec::new("A", "t".into());
        let b = FormSpec::new("A", "t".into());
        assert_ne!(a.view_id, b.view_id);
        assert!(Uuid::parse_str(&a.view_id).is_ok());
    }

    #[test]
    fn text_reads_strings_and_numbers() {
        let values = FormValues::new()
            .with("bidValue", json!(150))
            .with("helpQuestion", json!("  when? "))
            .with("flag", json!(true));
        assert_eq!(values.text("bidValue").as_deref(), Some("150"));
        assert_eq!(values.text("helpQuestion").as_deref(), Some("  when? "));
        assert_eq!(values.text("flag"), None);
        assert_eq!(values.text("missing"), None);
    }

    #[test]
    fn find_field_skips_sections() {
        let form = FormSpec::new("Bid", "t".into())
            .block(FormBlock::Section {
                block_id: "bidValue".into(),
                markdown: "x".into(),
            })
            .block(FormBlock::TextInput {
                field: "bidValue".into(),
                label: "Your new bid".into(),
                initial_value: None,
                placeholder: None,
            });
        assert!(matches!(
            form.find_field("bidValue"),
            Some(FormBlock::TextInput { .. })
        ));
    }
}
