use crate::CommentId;

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Invalid timestamp {0:?}")]
    InvalidTimestamp(String),

    #[error("Malformed replies payload for comment {uuid}: {message}")]
    MalformedReplies { uuid: CommentId, message: String },

    #[error("Malformed comment: {0}")]
    MalformedComment(String),

    #[error("No visibility entry for comment {0}")]
    MissingVisibility(CommentId),
}
