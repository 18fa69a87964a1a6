mod boundary;
mod models;
mod projector;
mod query;
mod repo;

use clap::Args;
use indoc::indoc;
use tracing::debug;

use boundary::TimeBoundary;
use projector::project_unresolved;
use repo::resolve_repository;

use crate::error::{PrHelpError, Result};
use crate::shared::command::CommandRunner;

pub use models::CommentRecord;

/// Printed to stderr after usage errors.
pub const USAGE: &str = indoc! {r#"
    Usage: pr-help-cli comments --pr <number> [--after-date <date>] [--after-time <datetime>]

    Examples:
      pr-help-cli comments --pr 123
      pr-help-cli comments --pr 123 --after-date 2025-12-01
      pr-help-cli comments --pr 123 --after-time "2025-12-01 14:30:00"
"#};

#[derive(Args, Clone, Debug, Default, PartialEq, Eq)]
pub struct CommentsArgs {
    /// PR number (required)
    #[arg(long, value_name = "NUMBER")]
    pub pr: Option<String>,

    /// Only comments created on or after this date (YYYY-MM-DD format)
    #[arg(long, value_name = "DATE")]
    pub after_date: Option<String>,

    /// Only comments created at or after this time, UTC (YYYY-MM-DD HH:MM:SS format)
    #[arg(long, value_name = "DATETIME")]
    pub after_time: Option<String>,
}

/// Fetch the lead comments of all unresolved review threads of a PR.
pub fn run(args: &CommentsArgs, runner: &impl CommandRunner) -> Result<Vec<CommentRecord>> {
    let pr = args
        .pr
        .as_deref()
        .filter(|pr| !pr.is_empty())
        .ok_or(PrHelpError::MissingRequiredArgument("pr"))?;

    let boundary =
        TimeBoundary::from_flags(args.after_date.as_deref(), args.after_time.as_deref())?;
    let pr_number = parse_pr_number(pr)?;

    if let Some(boundary) = &boundary {
        debug!(%boundary, "filtering comments by creation time");
    }

    let repo = resolve_repository(runner)?;
    let threads = query::fetch_review_threads(runner, &repo, &pr_number.to_string())?;

    Ok(project_unresolved(&threads, boundary.as_ref()))
}

/// Accepts `123`, ` 123 ` and `#123`.
fn parse_pr_number(value: &str) -> Result<u64> {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    match digits.parse::<u64>() {
        Ok(n) if n > 0 && digits.bytes().all(|b| b.is_ascii_digit()) => Ok(n),
        _ => Err(PrHelpError::MalformedIdentifier(value.to_string())),
    }
}
