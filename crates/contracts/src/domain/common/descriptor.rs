//! Static description of a backend collection.
//!
//! A [`ResourceDescriptor`] carries everything the generic resource page needs
//! to talk to one collection and render it: endpoint templates, how write
//! bodies are encoded, table columns, form fields and the user-facing texts.

use super::RecordId;
use serde::{Deserialize, Serialize};

/// CRUD operation against a collection endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Method + path template. `{id}` in the path is replaced by the record id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub method: HttpMethod,
    pub path: &'static str,
}

impl Route {
    pub const fn new(method: HttpMethod, path: &'static str) -> Self {
        Self { method, path }
    }
}

/// Replace `{id}` in a path template with the percent-encoded identifier.
pub fn expand_path(template: &str, id: Option<&RecordId>) -> String {
    match id {
        Some(id) => template.replace("{id}", &urlencoding::encode(id.as_str())),
        None => template.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    pub list: Route,
    pub create: Route,
    pub update: Route,
    pub delete: Route,
}

impl Endpoints {
    pub fn route(&self, operation: Operation) -> Route {
        match operation {
            Operation::List => self.list,
            Operation::Create => self.create,
            Operation::Update => self.update,
            Operation::Delete => self.delete,
        }
    }
}

/// How create/update payloads are sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Json,
    /// `multipart/form-data`: text fields plus attached files
    Multipart,
}

/// What the page does with its cached list after a successful write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterWrite {
    /// Decode the echoed record and apply it to the cache
    ApplyResponse,
    /// Ignore the response body and fetch the whole collection again
    Refetch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Strong,
    /// Long text, clipped to a single line
    Truncate,
    /// First image of the record as a thumbnail
    Thumbnail,
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: ColumnKind,
}

#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Text,
    TextArea {
        rows: u32,
    },
    /// Value picked from another collection's records
    Select {
        source: &'static ResourceDescriptor,
        value_field: &'static str,
        placeholder: &'static str,
    },
    /// Files attached to a multipart write; never part of the draft
    Files {
        max: usize,
        accept: &'static str,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: &'static str,
}

impl FormField {
    pub fn is_attachment(&self) -> bool {
        matches!(self.kind, FieldKind::Files { .. })
    }
}

/// User-facing strings of a resource page.
///
/// `None` for an alert means the failure is only logged.
#[derive(Debug, Clone, Copy)]
pub struct ResourceTexts {
    pub title: &'static str,
    pub add_button: &'static str,
    pub create_submit: &'static str,
    pub edit_submit: &'static str,
    pub empty: &'static str,
    pub confirm_delete: Option<&'static str>,
    pub deleted: &'static str,
    pub submit_failed_alert: Option<&'static str>,
    pub delete_failed_alert: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct ResourceDescriptor {
    /// Stable key, also used as the tab key and the config section name
    pub key: &'static str,
    pub endpoints: Endpoints,
    pub body: BodyKind,
    pub after_write: AfterWrite,
    pub columns: &'static [Column],
    pub fields: &'static [FormField],
    pub texts: ResourceTexts,
}

impl ResourceDescriptor {
    pub fn field(&self, name: &str) -> Option<&'static FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The file field of a multipart resource, if any
    pub fn attachment_field(&self) -> Option<&'static FormField> {
        self.fields.iter().find(|f| f.is_attachment())
    }

    /// Number of cells in a table row: id + columns + actions
    pub fn column_span(&self) -> usize {
        self.columns.len() + 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_path_substitutes_id() {
        let id = RecordId::new("65f0c1");
        assert_eq!(
            expand_path("/api/v1/news/{id}", Some(&id)),
            "/api/v1/news/65f0c1"
        );
    }

    #[test]
    fn test_expand_path_encodes_id() {
        let id = RecordId::new("a b/c");
        assert_eq!(
            expand_path("/api/v1/news-type/{id}", Some(&id)),
            "/api/v1/news-type/a%20b%2Fc"
        );
    }

    #[test]
    fn test_expand_path_without_id() {
        assert_eq!(expand_path("/api/v1/news", None), "/api/v1/news");
    }

    #[test]
    fn test_http_method_names() {
        assert_eq!(HttpMethod::Patch.as_str(), "PATCH");
        assert_eq!(HttpMethod::Put.as_str(), "PUT");
    }
}
