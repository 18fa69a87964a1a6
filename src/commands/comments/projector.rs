use super::boundary::TimeBoundary;
use super::models::{CommentRecord, ReviewThread};

/// Reduce review threads to the lead comments of unresolved threads.
///
/// Threads keep upstream order. Resolved threads and threads without a lead
/// comment contribute nothing; with a boundary, only comments created at or
/// after it survive.
pub fn project_unresolved(
    threads: &[ReviewThread],
    boundary: Option<&TimeBoundary>,
) -> Vec<CommentRecord> {
    threads
        .iter()
        .filter(|thread| !thread.is_resolved)
        .filter_map(ReviewThread::lead_comment)
        .filter(|comment| boundary.is_none_or(|b| b.admits(&comment.created_at)))
        .map(CommentRecord::from)
        .collect()
}
