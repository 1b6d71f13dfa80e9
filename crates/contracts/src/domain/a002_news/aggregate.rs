use crate::domain::a003_news_type;
use crate::domain::common::{
    null_as_default, AfterWrite, BodyKind, Cell, Column, ColumnKind, Endpoints, FieldKind,
    FormField, HttpMethod, MissingId, RecordId, Resource, ResourceDescriptor, ResourceTexts, Route,
    WireId,
};
use serde::{Deserialize, Serialize};

// ============================================================================
// Record
// ============================================================================

/// Новость
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireNews")]
pub struct News {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub news_type: String,
    pub title: String,
    /// Free text, usually a date
    pub data: String,
    pub descriptions: String,
    /// Paths relative to the API host, e.g. `/uploads/abc.jpg`
    pub images: Vec<String>,
}

#[derive(Deserialize)]
struct WireNews {
    #[serde(flatten)]
    id: WireId,
    #[serde(default, deserialize_with = "null_as_default")]
    news_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    data: String,
    #[serde(default, deserialize_with = "null_as_default")]
    descriptions: String,
    #[serde(default, deserialize_with = "null_as_default")]
    images: Vec<String>,
}

impl TryFrom<WireNews> for News {
    type Error = MissingId;

    fn try_from(wire: WireNews) -> Result<Self, MissingId> {
        Ok(Self {
            id: wire.id.resolve()?,
            news_type: wire.news_type,
            title: wire.title,
            data: wire.data,
            descriptions: wire.descriptions,
            images: wire.images,
        })
    }
}

/// Text fields of a news item; images travel as attachments
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsDraft {
    pub news_type: String,
    pub title: String,
    pub data: String,
    pub descriptions: String,
}

pub const MAX_IMAGES: usize = 5;

// ============================================================================
// Descriptor
// ============================================================================

pub static DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    key: "a002_news",
    endpoints: Endpoints {
        list: Route::new(HttpMethod::Get, "/api/v1/news"),
        create: Route::new(HttpMethod::Post, "/api/v1/news/create"),
        update: Route::new(HttpMethod::Patch, "/api/v1/news/{id}"),
        delete: Route::new(HttpMethod::Delete, "/api/v1/news/{id}"),
    },
    body: BodyKind::Multipart,
    after_write: AfterWrite::Refetch,
    columns: &[
        Column {
            key: "images",
            label: "Images",
            kind: ColumnKind::Thumbnail,
        },
        Column {
            key: "data",
            label: "Data",
            kind: ColumnKind::Text,
        },
        Column {
            key: "news_type",
            label: "News Type",
            kind: ColumnKind::Text,
        },
        Column {
            key: "title",
            label: "Title",
            kind: ColumnKind::Strong,
        },
        Column {
            key: "descriptions",
            label: "Descriptions",
            kind: ColumnKind::Truncate,
        },
    ],
    fields: &[
        FormField {
            name: "title",
            label: "Title",
            kind: FieldKind::Text,
            required: true,
            placeholder: "",
        },
        FormField {
            name: "news_type",
            label: "News Type",
            kind: FieldKind::Select {
                source: &a003_news_type::DESCRIPTOR,
                value_field: "type",
                placeholder: "Select a category",
            },
            required: true,
            placeholder: "",
        },
        FormField {
            name: "images",
            label: "Images (up to 5)",
            kind: FieldKind::Files {
                max: MAX_IMAGES,
                accept: "image/*",
            },
            required: false,
            placeholder: "",
        },
        FormField {
            name: "data",
            label: "Data (e.g. date or short text)",
            kind: FieldKind::Text,
            required: true,
            placeholder: "",
        },
        FormField {
            name: "descriptions",
            label: "Descriptions",
            kind: FieldKind::TextArea { rows: 3 },
            required: true,
            placeholder: "",
        },
    ],
    texts: ResourceTexts {
        title: "News",
        add_button: "Add News",
        create_submit: "Create News",
        edit_submit: "Update News",
        empty: "No news available",
        confirm_delete: Some("Are you sure you want to delete this news?"),
        deleted: "News successfully deleted",
        submit_failed_alert: Some("Failed to process request. Check console or try again."),
        delete_failed_alert: Some("Error deleting news"),
    },
};

impl Resource for News {
    type Draft = NewsDraft;

    fn descriptor() -> &'static ResourceDescriptor {
        &DESCRIPTOR
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    // Existing images stay on the server; the form only adds new ones.
    fn to_draft(&self) -> NewsDraft {
        NewsDraft {
            news_type: self.news_type.clone(),
            title: self.title.clone(),
            data: self.data.clone(),
            descriptions: self.descriptions.clone(),
        }
    }

    fn cell(&self, column: &str) -> Cell {
        match column {
            "images" => Cell::Image(self.images.first().cloned()),
            "data" => Cell::Text(self.data.clone()),
            "news_type" => Cell::Text(self.news_type.clone()),
            "title" => Cell::Text(self.title.clone()),
            "descriptions" => Cell::Text(self.descriptions.clone()),
            _ => Cell::Text(String::new()),
        }
    }

    fn draft_value(draft: &NewsDraft, field: &str) -> String {
        match field {
            "news_type" => draft.news_type.clone(),
            "title" => draft.title.clone(),
            "data" => draft.data.clone(),
            "descriptions" => draft.descriptions.clone(),
            _ => String::new(),
        }
    }

    fn set_draft_value(draft: &mut NewsDraft, field: &str, value: String) {
        match field {
            "news_type" => draft.news_type = value,
            "title" => draft.title = value,
            "data" => draft.data = value,
            "descriptions" => draft.descriptions = value,
            _ => {}
        }
    }
}
