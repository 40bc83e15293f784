//! Blog post wire record.

use serde::{Deserialize, Serialize};

/// A single blog post as exchanged with the remote posts API and the cache
/// store.
///
/// The wire format uses camelCase (`userId`); extra fields sent by the
/// remote API are ignored on deserialization. Consumers should treat the
/// record as opaque apart from `id` and `user_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Globally unique post identifier.
    pub id: u64,

    /// Identifier of the user who owns the post; the partition key for
    /// cache entries.
    pub user_id: u64,

    /// Post title.
    pub title: String,

    /// Post body text.
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_wire_format() {
        let json = r#"{"id": 1, "userId": 7, "title": "A", "body": "text"}"#;
        let post: Post = serde_json::from_str(json).expect("wire format should parse");

        assert_eq!(post.id, 1);
        assert_eq!(post.user_id, 7);
        assert_eq!(post.title, "A");
    }

    #[test]
    fn serializes_user_id_as_camel_case() {
        let post = Post {
            id: 2,
            user_id: 3,
            title: "T".to_string(),
            body: "B".to_string(),
        };

        let json = serde_json::to_value(&post).expect("post should serialize");
        assert_eq!(json["userId"], 3);
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn ignores_unknown_wire_fields() {
        let json = r#"{"id": 1, "userId": 1, "title": "A", "body": "B", "reactions": 42}"#;
        let post: Post = serde_json::from_str(json).expect("extra fields should be ignored");
        assert_eq!(post.id, 1);
    }
}
