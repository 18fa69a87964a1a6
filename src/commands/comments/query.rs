use indoc::formatdoc;
use serde::Deserialize;
use tracing::{debug, warn};

use super::models::ReviewThread;
use super::repo::RepoIdentity;
use crate::error::{PrHelpError, Result};
use crate::shared::command::{CommandRunner, combined_output};

/// Threads fetched per pull request. Anything beyond this is dropped.
pub const REVIEW_THREADS_PAGE_SIZE: u32 = 100;

/// Comments fetched per thread. Only the first is ever used.
pub const THREAD_COMMENTS_PAGE_SIZE: u32 = 100;

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<GraphQlData>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct GraphQlData {
    repository: Option<Repository>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Repository {
    pull_request: Option<PullRequest>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PullRequest {
    review_threads: ThreadConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThreadConnection {
    page_info: Option<PageInfo>,
    nodes: Vec<Option<ReviewThread>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageInfo {
    has_next_page: bool,
}

/// Quote a value as a GraphQL string literal.
fn graphql_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

/// Render the review-thread query for one pull request.
///
/// `pr_number` is interpolated as given.
pub fn build_review_threads_query(repo: &RepoIdentity, pr_number: &str) -> String {
    formatdoc! {"
        {{
          repository(owner: {owner}, name: {name}) {{
            pullRequest(number: {pr_number}) {{
              reviewThreads(first: {REVIEW_THREADS_PAGE_SIZE}) {{
                pageInfo {{
                  hasNextPage
                }}
                nodes {{
                  isResolved
                  comments(first: {THREAD_COMMENTS_PAGE_SIZE}) {{
                    nodes {{
                      author {{ login }}
                      body
                      path
                      line
                      createdAt
                    }}
                  }}
                }}
              }}
            }}
          }}
        }}
        ",
        owner = graphql_string(&repo.owner),
        name = graphql_string(&repo.name),
    }
}

/// Run the review-thread query through `gh api graphql`.
pub fn fetch_review_threads(
    runner: &impl CommandRunner,
    repo: &RepoIdentity,
    pr_number: &str,
) -> Result<Vec<ReviewThread>> {
    let failed = |reason: String, details: Option<String>| PrHelpError::QueryExecutionFailed {
        pr: pr_number.to_string(),
        reason,
        details,
    };

    let query = build_review_threads_query(repo, pr_number);
    let query_arg = format!("query={query}");
    let output = runner
        .run_gh(&["api", "graphql", "-f", &query_arg])
        .map_err(|e| failed(e.to_string(), None))?;

    if !output.status.success() {
        return Err(failed(
            output.status.to_string(),
            Some(combined_output(&output)),
        ));
    }

    let raw = || Some(String::from_utf8_lossy(&output.stdout).into_owned());
    let response: GraphQlResponse = serde_json::from_slice(&output.stdout)
        .map_err(|e| failed(format!("unexpected GraphQL response: {e}"), raw()))?;

    if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
        let messages: Vec<_> = errors.iter().map(|e| e.message.as_str()).collect();
        return Err(failed(messages.join(", "), raw()));
    }

    let connection = response
        .data
        .and_then(|d| d.repository)
        .and_then(|r| r.pull_request)
        .map(|pr| pr.review_threads)
        .ok_or_else(|| failed("pull request not found".to_string(), raw()))?;

    if connection.page_info.is_some_and(|p| p.has_next_page) {
        warn!(
            pr = pr_number,
            limit = REVIEW_THREADS_PAGE_SIZE,
            "pull request has more review threads than fetched; remaining threads are ignored"
        );
    }
    let threads: Vec<_> = connection.nodes.into_iter().flatten().collect();
    debug!(threads = threads.len(), "fetched review threads");

    Ok(threads)
}
