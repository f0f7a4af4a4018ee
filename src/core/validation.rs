//! Validation of submitted ticket forms
//!
//! Submitted values are trimmed, and empty strings count as absent before
//! any rule is applied.

use super::{NewTicket, Priority, Status, TicketBuilder, TicketChanges};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Maximum number of characters in a ticket title
pub const TITLE_MAX_CHARS: usize = 255;

/// Raw ticket fields as submitted by the create and edit forms
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketForm {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    /// HTML method override (`PUT` or `DELETE`)
    #[serde(default, rename = "_method", skip_serializing)]
    pub method: Option<String>,
}

/// Field-keyed validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<&'static str, Vec<String>>,
}

impl ValidationErrors {
    /// Record a message against a field
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.entry(field).or_default().push(message.into());
    }

    /// Whether no field failed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether the given field failed
    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Messages recorded for a field
    #[must_use]
    pub fn get(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Names of the failed fields, in order
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().copied()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self
            .fields
            .values()
            .flatten()
            .map(String::as_str)
            .collect();
        f.write_str(&messages.join(" "))
    }
}

impl TicketForm {
    /// Validate the form for ticket creation
    ///
    /// Absent status and priority take their defaults (open, low).
    pub fn validate_create(&self) -> Result<NewTicket, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let title = self.validated_title(&mut errors);
        let status = parse_enum::<Status>(self.status.as_deref(), "status", &mut errors);
        let priority = parse_enum::<Priority>(self.priority.as_deref(), "priority", &mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }

        let mut builder = TicketBuilder::new().title(title);
        if let Some(description) = present(self.description.as_deref()) {
            builder = builder.description(description);
        }
        if let Some(status) = status {
            builder = builder.status(status);
        }
        if let Some(priority) = priority {
            builder = builder.priority(priority);
        }
        Ok(builder.build())
    }

    /// Validate the form for updating an existing ticket
    ///
    /// Absent fields keep the stored values; a blank description clears it.
    pub fn validate_update(&self) -> Result<TicketChanges, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let title = self.validated_title(&mut errors);
        let status = parse_enum::<Status>(self.status.as_deref(), "status", &mut errors);
        let priority = parse_enum::<Priority>(self.priority.as_deref(), "priority", &mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(TicketChanges {
            title,
            description: self
                .description
                .as_deref()
                .map(|description| present(Some(description)).map(str::to_string)),
            status,
            priority,
        })
    }

    fn validated_title(&self, errors: &mut ValidationErrors) -> String {
        match present(self.title.as_deref()) {
            None => {
                errors.add("title", "The title field is required.");
                String::new()
            },
            Some(title) if title.chars().count() > TITLE_MAX_CHARS => {
                errors.add(
                    "title",
                    format!("The title field must not be greater than {TITLE_MAX_CHARS} characters."),
                );
                String::new()
            },
            Some(title) => title.to_string(),
        }
    }
}

/// Trimmed value, or `None` when absent or blank
fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_enum<T: FromStr>(
    value: Option<&str>,
    field: &'static str,
    errors: &mut ValidationErrors,
) -> Option<T> {
    let value = present(value)?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            errors.add(field, format!("The selected {field} is invalid."));
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str, status: Option<&str>, priority: Option<&str>) -> TicketForm {
        TicketForm {
            title: Some(title.to_string()),
            description: Some("Some description".to_string()),
            status: status.map(str::to_string),
            priority: priority.map(str::to_string),
            method: None,
        }
    }

    #[test]
    fn test_create_applies_defaults() {
        let ticket = form("Fix login", None, Some(""))
            .validate_create()
            .expect("valid form");

        assert_eq!(ticket.title, "Fix login");
        assert_eq!(ticket.status, Status::Open);
        assert_eq!(ticket.priority, Priority::Low);
        assert_eq!(ticket.description.as_deref(), Some("Some description"));
    }

    #[test]
    fn test_create_requires_title() {
        let errors = form("   ", Some("open"), Some("medium"))
            .validate_create()
            .unwrap_err();

        assert!(errors.has("title"));
        assert_eq!(errors.get("title"), ["The title field is required."]);
        assert!(!errors.has("status"));
    }

    #[test]
    fn test_title_length_limit() {
        let long_title = "a".repeat(TITLE_MAX_CHARS + 1);
        assert!(form(&long_title, None, None).validate_create().is_err());

        let max_title = "a".repeat(TITLE_MAX_CHARS);
        assert!(form(&max_title, None, None).validate_create().is_ok());
    }

    #[test]
    fn test_rejects_unknown_enum_values() {
        let errors = form("Title", Some("invalid_status"), Some("urgent"))
            .validate_update()
            .unwrap_err();

        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["priority", "status"]);
        assert_eq!(errors.get("status"), ["The selected status is invalid."]);
    }

    #[test]
    fn test_update_keeps_absent_enums() {
        let mut submitted = form("Updated", None, Some("high"));
        submitted.description = Some(String::new());
        let changes = submitted.validate_update().expect("valid form");

        assert_eq!(changes.status, None);
        assert_eq!(changes.priority, Some(Priority::High));
        assert_eq!(changes.description, Some(None));
    }

    #[test]
    fn test_update_keeps_absent_description() {
        let mut submitted = form("Printer", Some("closed"), None);
        submitted.description = None;
        let changes = submitted.validate_update().expect("valid form");
        assert_eq!(changes.description, None);

        submitted.description = Some("  Toner low ".to_string());
        let changes = submitted.validate_update().expect("valid form");
        assert_eq!(changes.description, Some(Some("Toner low".to_string())));
    }

    #[test]
    fn test_collects_every_failing_field() {
        let errors = form("", Some("bogus"), None).validate_create().unwrap_err();
        assert!(errors.has("title"));
        assert!(errors.has("status"));
        assert_eq!(
            errors.to_string(),
            "The selected status is invalid. The title field is required."
        );
    }
}
