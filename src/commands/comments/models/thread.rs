use super::comment::ReviewComment;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewThread {
    pub is_resolved: bool,
    pub comments: CommentsNode,
}

/// GraphQL connection nodes may be null (e.g. comments hidden from the viewer).
#[derive(Debug, Clone, Deserialize)]
pub struct CommentsNode {
    pub nodes: Vec<Option<ReviewComment>>,
}

impl ReviewThread {
    /// The first comment of the thread, if it has one.
    pub fn lead_comment(&self) -> Option<&ReviewComment> {
        self.comments.nodes.first().and_then(Option::as_ref)
    }
}
