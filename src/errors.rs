//! Typed error definitions for tempname.
//! Provides the small set of failure modes a caller can act on, each mapped to an errno.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a template was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateDefect {
    /// Fewer characters than the placeholder run itself.
    TooShort,
    /// Long enough, but the trailing six characters are not `XXXXXX`.
    MissingPlaceholder,
}

impl fmt::Display for TemplateDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TemplateDefect::TooShort => "shorter than six characters",
            TemplateDefect::MissingPlaceholder => "does not end in XXXXXX",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error)]
pub enum TempNameError {
    #[error("Invalid template '{template}': {defect}")]
    InvalidTemplate {
        template: String,
        defect: TemplateDefect,
    },

    #[error("Could not find an unused name for '{template}' after {attempts} attempts")]
    Exhausted { template: String, attempts: u32 },

    #[error("Failed to create {path}: {source}")]
    CreationFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TempNameError {
    /// errno-style code for this failure.
    ///
    /// - `InvalidTemplate` -> `EINVAL`
    /// - `Exhausted` -> `EEXIST` (what the C library reports after running out of names)
    /// - `CreationFailed` -> the OS error code, or `EIO` when there is none
    pub fn code(&self) -> i32 {
        match self {
            TempNameError::InvalidTemplate { .. } => libc::EINVAL,
            TempNameError::Exhausted { .. } => libc::EEXIST,
            TempNameError::CreationFailed { source, .. } => {
                source.raw_os_error().unwrap_or(libc::EIO)
            }
        }
    }

    /// Short machine-friendly label used in structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            TempNameError::InvalidTemplate { .. } => "invalid_template",
            TempNameError::Exhausted { .. } => "exhausted",
            TempNameError::CreationFailed { .. } => "creation_failed",
        }
    }
}
