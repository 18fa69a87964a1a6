use chrono::{DateTime, Utc};
use serde::Serialize;

use super::comment::ReviewComment;

/// One unresolved review thread, reduced to the fields the report agent reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentRecord {
    pub file: Option<String>,
    pub line: Option<u32>,
    pub author: String,
    pub comment: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<&ReviewComment> for CommentRecord {
    fn from(comment: &ReviewComment) -> Self {
        Self {
            file: comment.path.clone(),
            line: comment.line,
            author: comment.author_login().to_string(),
            comment: comment.body.clone(),
            created_at: comment.created_at,
        }
    }
}
