use super::{FieldKind, RecordId, ResourceDescriptor};
use crate::shared::error::ValidationError;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

/// Value of one table cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    /// Image path relative to the API host
    Image(Option<String>),
}

/// Трейт для записи коллекции бэкенда
///
/// Implemented once per collection; the generic page, the remote client and
/// the cache reducer only ever see records through this trait.
pub trait Resource:
    Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Editable fields of a record, `Default` is the blank create template
    type Draft: Clone + Debug + Default + PartialEq + Serialize + Send + Sync + 'static;

    fn descriptor() -> &'static ResourceDescriptor;

    fn id(&self) -> &RecordId;

    /// Copy of the editable fields, used to open the edit form
    fn to_draft(&self) -> Self::Draft;

    /// Display value for the column with the given key
    fn cell(&self, column: &str) -> Cell;

    /// Read a draft field by form field name
    fn draft_value(draft: &Self::Draft, field: &str) -> String;

    /// Write a draft field by form field name; unknown names are ignored
    fn set_draft_value(draft: &mut Self::Draft, field: &str, value: String);

    /// Required text fields must be non-blank, attachments within the limit.
    fn validate(draft: &Self::Draft, attachments: usize) -> Result<(), ValidationError> {
        for field in Self::descriptor().fields {
            match field.kind {
                FieldKind::Files { max, .. } => {
                    if attachments > max {
                        return Err(ValidationError::TooManyAttachments {
                            label: field.label,
                            max,
                            actual: attachments,
                        });
                    }
                }
                _ if field.required => {
                    if Self::draft_value(draft, field.name).trim().is_empty() {
                        return Err(ValidationError::MissingField { label: field.label });
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }
}

/// Text parts of a multipart body, in form field order.
pub fn multipart_fields<R: Resource>(draft: &R::Draft) -> Vec<(&'static str, String)> {
    R::descriptor()
        .fields
        .iter()
        .filter(|f| !f.is_attachment())
        .map(|f| (f.name, R::draft_value(draft, f.name)))
        .collect()
}

/// Decode a list response item by item.
///
/// A document that does not decode is logged and skipped, so one bad record
/// does not empty the whole table.
pub fn decode_records<R: Resource>(items: Vec<serde_json::Value>) -> Vec<R> {
    let key = R::descriptor().key;
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<R>(item) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("{key}: skipping record #{index}: {e}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_category::Category;
    use serde_json::json;

    #[test]
    fn test_decode_records_skips_undecodable() {
        let items = vec![
            json!({ "_id": "1", "category_name": "Sports" }),
            json!({ "category_name": "no id" }),
            json!({ "_id": "2", "id": "2", "category_name": null }),
        ];
        let records = decode_records::<Category>(items);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].category_name, "Sports");
        assert_eq!(records[1].id.as_str(), "2");
        assert_eq!(records[1].category_name, "");
    }
}
