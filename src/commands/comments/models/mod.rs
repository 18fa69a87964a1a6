mod comment;
mod record;
mod thread;

#[cfg(test)]
pub use comment::Author;
pub use comment::ReviewComment;
pub use record::CommentRecord;
#[cfg(test)]
pub use thread::CommentsNode;
pub use thread::ReviewThread;
