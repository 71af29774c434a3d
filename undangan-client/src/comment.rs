use crate::api::{self, CommentId};

/// A comment with its replies already decoded
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommentNode {
    pub uuid: CommentId,
    pub name: String,
    pub comment: String,
    pub created_at: String,
    pub is_admin: bool,
    pub presence: bool,

    /// Direct replies, in display order
    pub replies: Vec<CommentNode>,
}

impl From<api::Comment> for CommentNode {
    fn from(c: api::Comment) -> CommentNode {
        let replies = match c.comments {
            None => Vec::new(),
            Some(raw) => raw.decode(&c.uuid).unwrap_or_else(|err| {
                tracing::warn!(uuid = %c.uuid, %err, "ignoring malformed replies");
                Vec::new()
            }),
        };
        let replies = replies
            .into_iter()
            .filter_map(|r| match r {
                Ok(r) => Some(CommentNode::from(r)),
                Err(err) => {
                    tracing::warn!(parent = %c.uuid, %err, "ignoring malformed reply");
                    None
                }
            })
            .collect();
        CommentNode {
            uuid: c.uuid,
            name: c.name,
            comment: c.comment,
            created_at: c.created_at,
            is_admin: c.is_admin,
            presence: c.presence,
            replies,
        }
    }
}

impl CommentNode {
    pub fn reply_ids(&self) -> impl Iterator<Item = &CommentId> {
        self.replies.iter().map(|c| &c.uuid)
    }

    /// Decodes a list of top-level comments, skipping the ones that are not
    /// comments at all
    pub fn decode_all(values: Vec<serde_json::Value>) -> Vec<CommentNode> {
        values
            .into_iter()
            .filter_map(|v| match api::Comment::decode(v) {
                Ok(c) => Some(CommentNode::from(c)),
                Err(err) => {
                    tracing::warn!(%err, "ignoring malformed comment");
                    None
                }
            })
            .collect()
    }
}
