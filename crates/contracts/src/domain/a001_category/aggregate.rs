use crate::domain::common::{
    null_as_default, AfterWrite, BodyKind, Cell, Column, ColumnKind, Endpoints, FieldKind,
    FormField, HttpMethod, MissingId, RecordId, Resource, ResourceDescriptor, ResourceTexts, Route,
    WireId,
};
use serde::{Deserialize, Serialize};

// ============================================================================
// Record
// ============================================================================

/// Категория контента
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireCategory")]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub category_name: String,
}

#[derive(Deserialize)]
struct WireCategory {
    #[serde(flatten)]
    id: WireId,
    #[serde(default, deserialize_with = "null_as_default")]
    category_name: String,
}

impl TryFrom<WireCategory> for Category {
    type Error = MissingId;

    fn try_from(wire: WireCategory) -> Result<Self, MissingId> {
        Ok(Self {
            id: wire.id.resolve()?,
            category_name: wire.category_name,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub category_name: String,
}

// ============================================================================
// Descriptor
// ============================================================================

// DELETE is served without the `/api` prefix used by the other routes.
pub static DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    key: "a001_category",
    endpoints: Endpoints {
        list: Route::new(HttpMethod::Get, "/api/v1/categories"),
        create: Route::new(HttpMethod::Post, "/api/v1/categories"),
        update: Route::new(HttpMethod::Patch, "/api/v1/categories/{id}"),
        delete: Route::new(HttpMethod::Delete, "/v1/categories/{id}"),
    },
    body: BodyKind::Json,
    after_write: AfterWrite::ApplyResponse,
    columns: &[Column {
        key: "category_name",
        label: "Category Name",
        kind: ColumnKind::Text,
    }],
    fields: &[FormField {
        name: "category_name",
        label: "Category Name",
        kind: FieldKind::Text,
        required: true,
        placeholder: "Category Name",
    }],
    texts: ResourceTexts {
        title: "Categories",
        add_button: "Add Category",
        create_submit: "Add Category",
        edit_submit: "Edit Category",
        empty: "No categories available",
        confirm_delete: None,
        deleted: "Category deleted successfully",
        submit_failed_alert: None,
        delete_failed_alert: None,
    },
};

impl Resource for Category {
    type Draft = CategoryDraft;

    fn descriptor() -> &'static ResourceDescriptor {
        &DESCRIPTOR
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn to_draft(&self) -> CategoryDraft {
        CategoryDraft {
            category_name: self.category_name.clone(),
        }
    }

    fn cell(&self, column: &str) -> Cell {
        match column {
            "category_name" => Cell::Text(self.category_name.clone()),
            _ => Cell::Text(String::new()),
        }
    }

    fn draft_value(draft: &CategoryDraft, field: &str) -> String {
        match field {
            "category_name" => draft.category_name.clone(),
            _ => String::new(),
        }
    }

    fn set_draft_value(draft: &mut CategoryDraft, field: &str, value: String) {
        if field == "category_name" {
            draft.category_name = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_mongo_id() {
        let c: Category =
            serde_json::from_str(r#"{"_id":"65a1","category_name":"Sports","__v":0}"#).unwrap();
        assert_eq!(c.id.as_str(), "65a1");
        assert_eq!(c.category_name, "Sports");
    }

    #[test]
    fn test_deserialize_plain_id() {
        let c: Category = serde_json::from_str(r#"{"id":"1","category_name":"Sports"}"#).unwrap();
        assert_eq!(c.id.as_str(), "1");
    }

    #[test]
    fn test_deserialize_both_id_keys() {
        let c: Category =
            serde_json::from_str(r#"{"_id":"65a1","id":"65a1","category_name":"Sports"}"#)
                .unwrap();
        assert_eq!(c.id.as_str(), "65a1");
    }

    #[test]
    fn test_null_name_is_empty() {
        let c: Category = serde_json::from_str(r#"{"_id":"9","category_name":null}"#).unwrap();
        assert_eq!(c.category_name, "");
    }

    #[test]
    fn test_serializes_mongo_id() {
        let c = Category {
            id: RecordId::new("1"),
            category_name: "Sports".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&c).unwrap(),
            serde_json::json!({ "_id": "1", "category_name": "Sports" })
        );
    }

    #[test]
    fn test_draft_serializes_only_editable_fields() {
        let draft = CategoryDraft {
            category_name: "Tech".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            serde_json::json!({ "category_name": "Tech" })
        );
    }

    #[test]
    fn test_observed_delete_route() {
        assert_eq!(DESCRIPTOR.endpoints.delete.path, "/v1/categories/{id}");
        assert_eq!(DESCRIPTOR.endpoints.update.method, HttpMethod::Patch);
        assert!(DESCRIPTOR.texts.confirm_delete.is_none());
    }
}
