use tracing::debug;

use crate::error::{PrHelpError, Result};
use crate::shared::command::{CommandRunner, combined_output};

/// Fields requested from `gh pr list`.
pub const PR_LIST_FIELDS: &str = "number,title,author,url,headRefName,baseRefName";

/// Raw `gh pr list` JSON for open pull requests, unmodified.
pub fn list_open_prs(runner: &impl CommandRunner) -> Result<Vec<u8>> {
    let output = runner
        .run_gh(&["pr", "list", "--state", "open", "--json", PR_LIST_FIELDS])
        .map_err(|e| PrHelpError::ListFailed {
            reason: e.to_string(),
            details: None,
        })?;

    if !output.status.success() {
        return Err(PrHelpError::ListFailed {
            reason: output.status.to_string(),
            details: Some(combined_output(&output)),
        });
    }

    debug!(bytes = output.stdout.len(), "listed open pull requests");
    Ok(output.stdout)
}
