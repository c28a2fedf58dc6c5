//! Structured error and finding types.
//!
//! [`ConfigError`] covers failures while locating, reading, and merging
//! configuration documents. [`CheckFinding`] is the structural checker's
//! output: a finding is data, not an error, so it serializes cleanly for
//! machine consumption.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Failure while loading a configuration document.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No configuration file exists in any searched location.
    #[error("no configuration file found (searched {searched})")]
    NotFound { searched: String },

    /// A profile overlay was requested but its file does not exist.
    #[error("profile '{profile}' not found in {}", dir.display())]
    ProfileNotFound { profile: String, dir: PathBuf },

    /// The file exists but could not be read.
    #[error("failed to read {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not valid YAML/JSON.
    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// The merged document does not satisfy the configuration schema.
    #[error("configuration does not satisfy the schema: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// How serious a check finding is.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The renderer will cope, but the output is likely not what was meant.
    Warning,
    /// The configuration is structurally broken.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Finding codes for programmatic handling.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckCode {
    EmptyField,
    InvalidUrl,
    DuplicateXref,
    UnknownLintRule,
    MissingGroup,
    EmptyBiblioEntry,
}

/// A single finding from the structural checker.
#[derive(Debug, Clone, Serialize)]
pub struct CheckFinding {
    pub code: CheckCode,
    pub severity: Severity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl CheckFinding {
    pub fn error(code: CheckCode, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: Severity::Error,
            message: message.into(),
            field: None,
        }
    }

    pub fn warning(code: CheckCode, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: Severity::Warning,
            message: message.into(),
            field: None,
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    // Convenience constructors

    pub fn empty_field(field: &str) -> Self {
        Self::error(CheckCode::EmptyField, format!("{} must not be empty", field))
            .with_field(field)
    }

    pub fn invalid_url(field: &str, value: &str) -> Self {
        Self::error(
            CheckCode::InvalidUrl,
            format!("{} is not a valid URL: {}", field, value),
        )
        .with_field(field)
    }

    pub fn duplicate_xref(key: &str) -> Self {
        Self::error(
            CheckCode::DuplicateXref,
            format!("xref contains '{}' more than once", key),
        )
        .with_field("xref")
    }

    pub fn unknown_lint_rule(rule: &str) -> Self {
        Self::warning(
            CheckCode::UnknownLintRule,
            format!("'{}' is not a known lint rule", rule),
        )
        .with_field("lint")
    }

    pub fn missing_group(status: &str) -> Self {
        Self::warning(
            CheckCode::MissingGroup,
            format!("specStatus '{}' is on the Recommendation track but no group is set", status),
        )
        .with_field("group")
    }

    pub fn empty_biblio_entry(key: &str) -> Self {
        Self::warning(
            CheckCode::EmptyBiblioEntry,
            format!("localBiblio entry '{}' has neither title nor href", key),
        )
        .with_field(format!("localBiblio.{}", key))
    }
}

impl fmt::Display for CheckFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}
