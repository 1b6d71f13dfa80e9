use crate::domain::common::{
    null_as_default, AfterWrite, BodyKind, Cell, Column, ColumnKind, Endpoints, FieldKind,
    FormField, HttpMethod, MissingId, RecordId, Resource, ResourceDescriptor, ResourceTexts, Route,
    WireId,
};
use serde::{Deserialize, Serialize};

/// Рубрика новостей (news type)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireNewsType")]
pub struct NewsType {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Deserialize)]
struct WireNewsType {
    #[serde(flatten)]
    id: WireId,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    kind: String,
}

impl TryFrom<WireNewsType> for NewsType {
    type Error = MissingId;

    fn try_from(wire: WireNewsType) -> Result<Self, MissingId> {
        Ok(Self {
            id: wire.id.resolve()?,
            kind: wire.kind,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsTypeDraft {
    #[serde(rename = "type")]
    pub kind: String,
}

pub static DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    key: "a003_news_type",
    endpoints: Endpoints {
        list: Route::new(HttpMethod::Get, "/api/v1/news-type"),
        create: Route::new(HttpMethod::Post, "/api/v1/news-type"),
        update: Route::new(HttpMethod::Put, "/api/v1/news-type/{id}"),
        delete: Route::new(HttpMethod::Delete, "/api/v1/news-type/{id}"),
    },
    body: BodyKind::Json,
    after_write: AfterWrite::ApplyResponse,
    columns: &[Column {
        key: "type",
        label: "Category Name",
        kind: ColumnKind::Text,
    }],
    fields: &[FormField {
        name: "type",
        label: "Category Name",
        kind: FieldKind::Text,
        required: true,
        placeholder: "News Category Name",
    }],
    texts: ResourceTexts {
        title: "News Categories",
        add_button: "Add News Category",
        create_submit: "Add News Category",
        edit_submit: "Edit News Category",
        empty: "No news categories available",
        confirm_delete: Some("Are you sure you want to delete this category?"),
        deleted: "News category deleted successfully",
        submit_failed_alert: None,
        delete_failed_alert: Some("Error deleting news category"),
    },
};

impl Resource for NewsType {
    type Draft = NewsTypeDraft;

    fn descriptor() -> &'static ResourceDescriptor {
        &DESCRIPTOR
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn to_draft(&self) -> NewsTypeDraft {
        NewsTypeDraft {
            kind: self.kind.clone(),
        }
    }

    fn cell(&self, column: &str) -> Cell {
        match column {
            "type" => Cell::Text(self.kind.clone()),
            _ => Cell::Text(String::new()),
        }
    }

    fn draft_value(draft: &NewsTypeDraft, field: &str) -> String {
        match field {
            "type" => draft.kind.clone(),
            _ => String::new(),
        }
    }

    fn set_draft_value(draft: &mut NewsTypeDraft, field: &str, value: String) {
        if field == "type" {
            draft.kind = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_field_wire_name() {
        let t: NewsType = serde_json::from_str(r#"{"_id":"x1","type":"Politics"}"#).unwrap();
        assert_eq!(t.kind, "Politics");
        let draft = t.to_draft();
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            serde_json::json!({ "type": "Politics" })
        );
    }

    #[test]
    fn test_lenient_decoding() {
        let t: NewsType =
            serde_json::from_str(r#"{"_id":"x1","id":"x1","type":null,"__v":0}"#).unwrap();
        assert_eq!(t.id.as_str(), "x1");
        assert_eq!(t.kind, "");
    }

    #[test]
    fn test_draft_access_by_field_name() {
        let mut draft = NewsTypeDraft::default();
        NewsType::set_draft_value(&mut draft, "type", "Economy".to_string());
        NewsType::set_draft_value(&mut draft, "unknown", "ignored".to_string());
        assert_eq!(NewsType::draft_value(&draft, "type"), "Economy");
    }

    #[test]
    fn test_update_uses_put() {
        assert_eq!(DESCRIPTOR.endpoints.update.method, HttpMethod::Put);
    }
}
