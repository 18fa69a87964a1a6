use std::fmt;

use thiserror::Error;

/// Which of the two boundary forms failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampKind {
    Date,
    DateTime,
}

impl TimestampKind {
    pub fn expected_format(self) -> &'static str {
        match self {
            Self::Date => "YYYY-MM-DD",
            Self::DateTime => "YYYY-MM-DD HH:MM:SS",
        }
    }
}

impl fmt::Display for TimestampKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date => f.write_str("date"),
            Self::DateTime => f.write_str("datetime"),
        }
    }
}

#[derive(Error, Debug)]
pub enum PrHelpError {
    #[error("invalid {kind} format: {value} (expected {})", .kind.expected_format())]
    MalformedTimestamp { kind: TimestampKind, value: String },

    #[error("cannot use both --after-date and --after-time flags")]
    ConflictingFilters,

    #[error("--{0} flag is required")]
    MissingRequiredArgument(&'static str),

    #[error("invalid pull request number: {0}")]
    MalformedIdentifier(String),

    #[error("failed to get repo info: {reason}")]
    RepositoryResolutionFailed {
        reason: String,
        details: Option<String>,
    },

    #[error("failed to get comments for PR {pr}: {reason}")]
    QueryExecutionFailed {
        pr: String,
        reason: String,
        details: Option<String>,
    },

    #[error("failed to list PRs: {reason}")]
    ListFailed {
        reason: String,
        details: Option<String>,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PrHelpError>;

impl PrHelpError {
    /// Raw output of the failed subprocess, if any.
    pub fn details(&self) -> Option<&str> {
        match self {
            Self::RepositoryResolutionFailed { details, .. }
            | Self::QueryExecutionFailed { details, .. }
            | Self::ListFailed { details, .. } => details.as_deref(),
            _ => None,
        }
    }

    /// Errors caused by how the command was invoked rather than by `gh`.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::ConflictingFilters | Self::MissingRequiredArgument(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::date(
        TimestampKind::Date,
        "2025-13-40",
        "invalid date format: 2025-13-40 (expected YYYY-MM-DD)"
    )]
    #[case::datetime(
        TimestampKind::DateTime,
        "yesterday",
        "invalid datetime format: yesterday (expected YYYY-MM-DD HH:MM:SS)"
    )]
    fn malformed_timestamp_names_value_and_format(
        #[case] kind: TimestampKind,
        #[case] value: &str,
        #[case] expected: &str,
    ) {
        let err = PrHelpError::MalformedTimestamp {
            kind,
            value: value.to_string(),
        };
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn query_failure_display_includes_pr() {
        let err = PrHelpError::QueryExecutionFailed {
            pr: "42".to_string(),
            reason: "exit status: 1".to_string(),
            details: Some("gh: Not Found".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "failed to get comments for PR 42: exit status: 1"
        );
        assert_eq!(err.details(), Some("gh: Not Found"));
    }

    #[test]
    fn missing_argument_display() {
        let err = PrHelpError::MissingRequiredArgument("pr");
        assert_eq!(err.to_string(), "--pr flag is required");
        assert!(err.is_usage_error());
    }

    #[test]
    fn upstream_failures_are_not_usage_errors() {
        let err = PrHelpError::ListFailed {
            reason: "exit status: 4".to_string(),
            details: None,
        };
        assert!(!err.is_usage_error());
        assert_eq!(err.details(), None);
    }
}
