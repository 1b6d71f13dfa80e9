//! Common types and traits for all resources

pub mod cache;
pub mod descriptor;
pub mod page_state;
pub mod record_id;
pub mod resource;
pub mod wire;

// Re-exports
pub use cache::CacheUpdate;
pub use descriptor::{
    AfterWrite, BodyKind, Column, ColumnKind, Endpoints, FieldKind, FormField, HttpMethod,
    Operation, ResourceDescriptor, ResourceTexts, Route,
};
pub use page_state::{EditMode, PageState, TableBody, TableRow, WriteOutcome, WriteRequest};
pub use record_id::RecordId;
pub use resource::{decode_records, multipart_fields, Cell, Resource};
pub use wire::{null_as_default, MissingId, WireId};
