//! Template validation.
//!
//! A template is any text whose last six characters are the placeholder run
//! `XXXXXX`. Everything before the run is kept verbatim in generated names.

use crate::errors::{TempNameError, TemplateDefect};

/// Literal placeholder run that must end every template.
pub const PLACEHOLDER: &str = "XXXXXX";
/// Number of characters substituted into a template.
pub const SUFFIX_LEN: usize = PLACEHOLDER.len();

/// A template that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    raw: String,
}

impl Template {
    /// Validate `template` without touching the filesystem.
    pub fn parse(template: &str) -> Result<Self, TempNameError> {
        let defect = if template.len() < SUFFIX_LEN {
            Some(TemplateDefect::TooShort)
        } else if !template.ends_with(PLACEHOLDER) {
            Some(TemplateDefect::MissingPlaceholder)
        } else {
            None
        };

        match defect {
            Some(defect) => Err(TempNameError::InvalidTemplate {
                template: template.to_owned(),
                defect,
            }),
            None => Ok(Self {
                raw: template.to_owned(),
            }),
        }
    }

    /// Everything before the placeholder run.
    pub fn prefix(&self) -> &str {
        &self.raw[..self.raw.len() - SUFFIX_LEN]
    }

    /// The template as supplied.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Build the candidate name for one suffix draw.
    pub fn render(&self, suffix: &[u8; SUFFIX_LEN]) -> String {
        let mut name = String::with_capacity(self.raw.len());
        name.push_str(self.prefix());
        // Suffix sources only hand out ASCII alphanumerics.
        name.extend(suffix.iter().map(|&b| char::from(b)));
        name
    }
}

/// Check a template and report why it is unusable.
pub fn validate(template: &str) -> Result<(), TempNameError> {
    Template::parse(template).map(|_| ())
}
