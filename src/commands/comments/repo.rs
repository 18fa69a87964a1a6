use serde::Deserialize;
use tracing::debug;

use crate::error::{PrHelpError, Result};
use crate::shared::command::{CommandRunner, combined_output};

/// Owner/name pair addressing the current repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoIdentity {
    pub owner: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct RepoView {
    name: String,
    owner: RepoOwner,
}

#[derive(Debug, Deserialize)]
struct RepoOwner {
    login: String,
}

/// Ask `gh` which repository the working directory belongs to.
pub fn resolve_repository(runner: &impl CommandRunner) -> Result<RepoIdentity> {
    let output = runner
        .run_gh(&["repo", "view", "--json", "owner,name"])
        .map_err(|e| PrHelpError::RepositoryResolutionFailed {
            reason: e.to_string(),
            details: None,
        })?;

    if !output.status.success() {
        return Err(PrHelpError::RepositoryResolutionFailed {
            reason: output.status.to_string(),
            details: Some(combined_output(&output)),
        });
    }

    let view: RepoView = serde_json::from_slice(&output.stdout).map_err(|e| {
        PrHelpError::RepositoryResolutionFailed {
            reason: format!("unexpected response from gh repo view: {e}"),
            details: Some(String::from_utf8_lossy(&output.stdout).into_owned()),
        }
    })?;

    debug!(owner = %view.owner.login, name = %view.name, "resolved repository");

    Ok(RepoIdentity {
        owner: view.owner.login,
        name: view.name,
    })
}
