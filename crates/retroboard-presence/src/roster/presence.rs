//! The per-participant presence record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use retroboard_core::types::PresenceToken;

/// One connected participant's live connection record.
///
/// `token` and `online_at` come from the transport; `is_facilitator` is
/// derived by the store and never taken from a payload as authoritative.
/// Every other field of the wire record (`name`, avatar, and whatever else
/// the application attaches) is an opaque pass-through collected into
/// `attributes` and never interpreted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presence {
    /// Unique identifier of the connection.
    pub token: PresenceToken,
    /// Arrival marker; smaller means earlier arrival.
    pub online_at: i64,
    /// Whether this participant currently holds the facilitator role.
    #[serde(default)]
    pub is_facilitator: bool,
    /// User-supplied profile fields, passed through untouched.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Presence {
    /// Create a record with an empty attribute bag.
    pub fn new(token: impl Into<PresenceToken>, online_at: i64) -> Self {
        Self {
            token: token.into(),
            online_at,
            is_facilitator: false,
            attributes: Map::new(),
        }
    }

    /// Attach a profile attribute, builder-style.
    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Look up a profile attribute by key.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// The participant's display name, if the profile carries one.
    pub fn name(&self) -> Option<&str> {
        self.attributes.get("name").and_then(Value::as_str)
    }

    /// Shallow-merge the given fields into this record.
    ///
    /// Unreserved keys overwrite or extend the attribute bag. Reserved keys
    /// are handled explicitly: `"online_at"` (number) and `"is_facilitator"`
    /// (bool) patch the typed fields, while `"token"` is the identity key
    /// and is never patchable. A reserved key carrying a value of the wrong
    /// type is ignored rather than coerced.
    pub fn merge_attributes(&mut self, attributes: &Map<String, Value>) {
        for (key, value) in attributes {
            match key.as_str() {
                "token" => {}
                "online_at" => {
                    if let Some(stamp) = value.as_i64() {
                        self.online_at = stamp;
                    }
                }
                "is_facilitator" => {
                    if let Some(flag) = value.as_bool() {
                        self.is_facilitator = flag;
                    }
                }
                _ => {
                    self.attributes.insert(key.clone(), value.clone());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_collects_profile_fields() {
        let presence: Presence =
            serde_json::from_value(json!({"token": "abc", "online_at": 7, "name": "Kevin", "age": 29}))
                .expect("deserialize");
        assert_eq!(presence.token, PresenceToken::new("abc"));
        assert_eq!(presence.online_at, 7);
        assert!(!presence.is_facilitator);
        assert_eq!(presence.name(), Some("Kevin"));
        assert_eq!(presence.attribute("age"), Some(&json!(29)));
    }

    #[test]
    fn test_serialize_flattens_profile_fields() {
        let presence = Presence::new("abc", 7).with_attribute("name", json!("Kevin"));
        let value = serde_json::to_value(&presence).expect("serialize");
        assert_eq!(value["token"], json!("abc"));
        assert_eq!(value["name"], json!("Kevin"));
    }

    #[test]
    fn test_merge_overwrites_and_extends_bag() {
        let mut presence = Presence::new("abc", 7)
            .with_attribute("name", json!("Tiny Rick"))
            .with_attribute("age", json!(180));
        let mut patch = Map::new();
        patch.insert("age".to_string(), json!(70));
        patch.insert("mood".to_string(), json!("grim"));

        presence.merge_attributes(&patch);
        assert_eq!(presence.attribute("age"), Some(&json!(70)));
        assert_eq!(presence.attribute("mood"), Some(&json!("grim")));
        assert_eq!(presence.name(), Some("Tiny Rick"));
    }

    #[test]
    fn test_merge_never_patches_token() {
        let mut presence = Presence::new("abc", 7);
        let mut patch = Map::new();
        patch.insert("token".to_string(), json!("stolen"));

        presence.merge_attributes(&patch);
        assert_eq!(presence.token, PresenceToken::new("abc"));
        assert_eq!(presence.attribute("token"), None);
    }

    #[test]
    fn test_merge_patches_typed_fields_without_coercion() {
        let mut presence = Presence::new("abc", 7);
        let mut patch = Map::new();
        patch.insert("online_at".to_string(), json!(3));
        patch.insert("is_facilitator".to_string(), json!("yes"));

        presence.merge_attributes(&patch);
        assert_eq!(presence.online_at, 3);
        // Wrong-typed reserved value is dropped, not coerced.
        assert!(!presence.is_facilitator);
        assert_eq!(presence.attribute("is_facilitator"), None);
    }
}
