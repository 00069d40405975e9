//! Submission validation for the event directory.
//!
//! A candidate [`EventInput`] must pass every rule here before the store will
//! accept it:
//! - `name` at least 2 characters
//! - `description` at least 10 characters
//! - `date` a calendar date in `YYYY-MM-DD` form
//! - `time`, `location`, `college` non-empty
//! - `link` a well-formed absolute URL
//! - `image_url`, when given, a well-formed absolute URL
//!
//! Validation collects every failing field rather than stopping at the first,
//! so a form can mark all offending inputs in one pass.

use crate::model::EventInput;
use chrono::NaiveDate;
use std::fmt;

/// One failed rule, tied to the field that broke it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: &'static str,
}

/// A rejected submission. Lists every failing field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    /// The names of the failing fields, in rule order.
    pub fn fields(&self) -> Vec<&'static str> {
        self.issues.iter().map(|issue| issue.field).collect()
    }

    pub fn mentions(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid event submission: ")?;
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", issue.field, issue.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Validates a submission candidate against the directory's rules.
///
/// # Examples
/// ```
/// use gatherings::model::{EventInput, EventType};
/// use gatherings::validate::validate_event_input;
///
/// let input = EventInput {
///     name: "AI Workshop 2025".into(),
///     description: "Hands-on introduction to modern ML tooling.".into(),
///     date: "2025-06-15".into(),
///     time: "10:00 AM - 4:00 PM".into(),
///     location: "CS Building, Room 105".into(),
///     college: "MIT".into(),
///     event_type: EventType::Workshop,
///     link: "https://example.edu/ai-workshop".into(),
///     image_url: None,
/// };
/// assert!(validate_event_input(&input).is_ok());
///
/// let bad = EventInput { description: "short".into(), ..input };
/// let err = validate_event_input(&bad).unwrap_err();
/// assert!(err.mentions("description"));
/// ```
pub fn validate_event_input(input: &EventInput) -> Result<(), ValidationError> {
    let mut issues = Vec::new();

    if input.name.chars().count() < 2 {
        issues.push(FieldIssue {
            field: "name",
            message: "event name must be at least 2 characters",
        });
    }

    if input.description.chars().count() < 10 {
        issues.push(FieldIssue {
            field: "description",
            message: "description must be at least 10 characters",
        });
    }

    if input.date.trim().is_empty() {
        issues.push(FieldIssue {
            field: "date",
            message: "date is required",
        });
    } else if NaiveDate::parse_from_str(&input.date, "%Y-%m-%d").is_err() {
        issues.push(FieldIssue {
            field: "date",
            message: "date must be a calendar date in YYYY-MM-DD form",
        });
    }

    if input.time.trim().is_empty() {
        issues.push(FieldIssue {
            field: "time",
            message: "time is required",
        });
    }

    if input.location.trim().is_empty() {
        issues.push(FieldIssue {
            field: "location",
            message: "location is required",
        });
    }

    if input.college.trim().is_empty() {
        issues.push(FieldIssue {
            field: "college",
            message: "college name is required",
        });
    }

    if !is_absolute_url(&input.link) {
        issues.push(FieldIssue {
            field: "link",
            message: "link must be a valid absolute URL",
        });
    }

    if let Some(image_url) = input.image_url.as_deref() {
        if !image_url.is_empty() && !is_absolute_url(image_url) {
            issues.push(FieldIssue {
                field: "imageUrl",
                message: "image URL must be a valid absolute URL",
            });
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { issues })
    }
}

/// Checks for `scheme://rest` shape: an alphabetic-led scheme, a non-empty
/// remainder, and no whitespace anywhere.
fn is_absolute_url(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((scheme, rest)) = s.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    let valid_scheme = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    };
    valid_scheme && !rest.is_empty()
}
