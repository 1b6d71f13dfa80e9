//! Lenient decoding of records as the backend sends them.
//!
//! Documents may carry `_id`, `id` or both, and optional text fields may
//! arrive as `null`. Records decode through a private wire struct built from
//! these helpers and convert with `TryFrom`.

use super::RecordId;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("record has neither `_id` nor `id`")]
pub struct MissingId;

/// Both id keys of a document; `_id` wins when both are present
#[derive(Debug, Default, Deserialize)]
pub struct WireId {
    #[serde(rename = "_id", default)]
    mongo_id: Option<RecordId>,
    #[serde(default)]
    id: Option<RecordId>,
}

impl WireId {
    pub fn resolve(self) -> Result<RecordId, MissingId> {
        self.mongo_id.or(self.id).ok_or(MissingId)
    }
}

/// `null` decodes like a missing key: the type's default
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Doc {
        #[serde(flatten)]
        id: WireId,
        #[serde(default, deserialize_with = "null_as_default")]
        name: String,
    }

    fn doc(json: &str) -> Doc {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_mongo_id_wins_over_virtual_id() {
        let d = doc(r#"{"_id":"65a1","id":"virtual","name":"x"}"#);
        assert_eq!(d.id.resolve(), Ok(RecordId::new("65a1")));
    }

    #[test]
    fn test_plain_id_is_fallback() {
        let d = doc(r#"{"id":"7"}"#);
        assert_eq!(d.id.resolve(), Ok(RecordId::new("7")));
    }

    #[test]
    fn test_missing_id() {
        let d = doc(r#"{"name":"orphan"}"#);
        assert_eq!(d.id.resolve(), Err(MissingId));
    }

    #[test]
    fn test_null_text_is_empty() {
        assert_eq!(doc(r#"{"_id":"1","name":null}"#).name, "");
        assert_eq!(doc(r#"{"_id":"1"}"#).name, "");
    }
}
