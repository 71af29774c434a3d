use std::fmt;

use crate::Error;

#[derive(
    Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
#[serde(transparent)]
pub struct CommentId(pub String);

impl CommentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CommentId {
    fn from(s: &str) -> CommentId {
        CommentId(s.to_string())
    }
}

/// A comment as the server sends it
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub uuid: CommentId,
    pub name: String,

    /// Raw user input, not escaped
    pub comment: String,

    pub created_at: String,

    #[serde(default)]
    pub is_admin: bool,

    /// Whether the author will attend, only meaningful on top-level comments
    #[serde(default)]
    pub presence: bool,

    /// Replies, in display order
    #[serde(default)]
    pub comments: Option<RawReplies>,
}

impl Comment {
    pub fn decode(v: serde_json::Value) -> Result<Comment, Error> {
        serde_json::from_value(v).map_err(|e| Error::MalformedComment(e.to_string()))
    }
}

/// Replies are usually shipped as a JSON document nested inside a string.
///
/// Each reply is only decoded by [`RawReplies::decode`], so that one broken
/// reply never hides its siblings nor the comment holding them.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum RawReplies {
    Encoded(String),
    Nested(Vec<serde_json::Value>),
    Malformed(serde_json::Value),
}

impl RawReplies {
    /// Fails if the payload is not a list at all, otherwise decodes every
    /// reply independently
    pub fn decode(self, parent: &CommentId) -> Result<Vec<Result<Comment, Error>>, Error> {
        let malformed = |message: String| Error::MalformedReplies {
            uuid: parent.clone(),
            message,
        };
        let values = match self {
            RawReplies::Nested(v) => v,
            RawReplies::Encoded(s) => serde_json::from_str::<Option<Vec<serde_json::Value>>>(&s)
                .map_err(|e| malformed(e.to_string()))?
                .unwrap_or_default(),
            RawReplies::Malformed(_) => {
                return Err(malformed(String::from("expected a string or an array")))
            }
        };
        Ok(values.into_iter().map(Comment::decode).collect())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(s: &str) -> Comment {
        serde_json::from_str(s).expect("parsing test comment")
    }

    fn decoded(raw: RawReplies, parent: &str) -> Result<Vec<Comment>, Error> {
        raw.decode(&CommentId::from(parent))?.into_iter().collect()
    }

    #[test]
    fn encoded_replies() {
        let c = parse(
            r#"{"uuid":"r1","name":"Alice","comment":"hi","created_at":"2024-01-01",
                "presence":true,
                "comments":"[{\"uuid\":\"c1\",\"name\":\"Bob\",\"comment\":\"ok\",\"created_at\":\"2024-01-02\",\"comments\":\"[]\"}]"}"#,
        );
        assert!(c.presence);
        assert!(!c.is_admin);
        let replies = decoded(c.comments.unwrap(), "r1").unwrap();
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].uuid, CommentId::from("c1"));
        assert_eq!(replies[0].name, "Bob");
        assert!(!replies[0].presence);
        assert_eq!(decoded(replies[0].comments.clone().unwrap(), "c1"), Ok(vec![]));
    }

    #[test]
    fn nested_replies() {
        let c = parse(
            r#"{"uuid":"r1","name":"Alice","comment":"hi","created_at":"2024-01-01",
                "comments":[{"uuid":"c1","name":"Bob","comment":"ok","created_at":"2024-01-02"},
                            {"uuid":"c2","name":"Eve","comment":"no","created_at":"2024-01-03"}]}"#,
        );
        let ids = decoded(c.comments.unwrap(), "r1")
            .unwrap()
            .into_iter()
            .map(|c| c.uuid.0)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["c1", "c2"]);
    }

    #[test]
    fn missing_or_null_replies() {
        let c = parse(r#"{"uuid":"r1","name":"A","comment":"","created_at":"x"}"#);
        assert_eq!(c.comments, None);
        let c = parse(r#"{"uuid":"r1","name":"A","comment":"","created_at":"x","comments":null}"#);
        assert_eq!(c.comments, None);
        assert_eq!(decoded(RawReplies::Encoded(String::from("null")), "r1"), Ok(vec![]));
    }

    #[test]
    fn malformed_replies() {
        let res = RawReplies::Encoded(String::from("[{\"uuid\":")).decode(&CommentId::from("r1"));
        match res {
            Err(Error::MalformedReplies { uuid, .. }) => assert_eq!(uuid.as_str(), "r1"),
            r => panic!("unexpected decoding result {r:?}"),
        }
    }

    #[test]
    fn wrongly_typed_replies_keep_the_comment() {
        let c = parse(r#"{"uuid":"r2","name":"Eve","comment":"yo","created_at":"x","comments":42}"#);
        assert_eq!(c.name, "Eve");
        assert!(matches!(
            c.comments.unwrap().decode(&c.uuid),
            Err(Error::MalformedReplies { .. }),
        ));

        let c = parse(r#"{"uuid":"r3","name":"Eve","comment":"yo","created_at":"x","comments":{"oops":1}}"#);
        assert!(c.comments.unwrap().decode(&c.uuid).is_err());
    }

    #[test]
    fn broken_reply_keeps_its_siblings() {
        let raw = RawReplies::Nested(vec![
            json!({"uuid": "c1", "name": "Bob", "comment": "ok", "created_at": "x"}),
            json!({"uuid": "c2", "name": "Eve", "comment": "no", "created_at": "x", "comments": {"oops": 1}}),
            json!({"name": "no uuid"}),
            json!(7),
        ]);
        let res = raw.decode(&CommentId::from("r1")).unwrap();
        assert_eq!(res.len(), 4);
        assert_eq!(res[0].as_ref().unwrap().uuid.as_str(), "c1");
        assert_eq!(res[1].as_ref().unwrap().uuid.as_str(), "c2");
        assert!(matches!(res[2], Err(Error::MalformedComment(_))));
        assert!(matches!(res[3], Err(Error::MalformedComment(_))));

        let encoded = serde_json::to_string(&json!([
            1,
            {"uuid": "c3", "name": "Bob", "comment": "ok", "created_at": "x"},
        ]))
        .unwrap();
        let res = RawReplies::Encoded(encoded).decode(&CommentId::from("r1")).unwrap();
        assert!(res[0].is_err());
        assert_eq!(res[1].as_ref().unwrap().uuid.as_str(), "c3");
    }
}
