//! State of one resource page: cached records, the form draft and the
//! create/edit mode of the modal.
//!
//! All transitions are plain methods so the page logic can be exercised
//! without a browser. The frontend keeps a `PageState` inside a signal and
//! calls these methods around its requests.

use super::{CacheUpdate, Cell, Operation, RecordId, Resource};
use crate::shared::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMode {
    Create,
    Edit(RecordId),
}

/// Write to send for the current draft
#[derive(Debug, Clone, PartialEq)]
pub enum WriteRequest<D> {
    Create(D),
    Update { id: RecordId, draft: D },
}

impl<D> WriteRequest<D> {
    pub fn operation(&self) -> Operation {
        match self {
            WriteRequest::Create(_) => Operation::Create,
            WriteRequest::Update { .. } => Operation::Update,
        }
    }

    pub fn id(&self) -> Option<&RecordId> {
        match self {
            WriteRequest::Create(_) => None,
            WriteRequest::Update { id, .. } => Some(id),
        }
    }

    pub fn draft(&self) -> &D {
        match self {
            WriteRequest::Create(draft) => draft,
            WriteRequest::Update { draft, .. } => draft,
        }
    }
}

/// Result of a successful write as seen by the cache
#[derive(Debug, Clone, PartialEq)]
pub enum WriteOutcome<R> {
    /// Server echoed the stored record
    Saved(R),
    /// Collection fetched again after the write
    Reloaded(Vec<R>),
}

/// One table row: the record's id, its cells in column order and the record
/// itself for the Edit action
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow<R> {
    pub id: RecordId,
    pub cells: Vec<Cell>,
    pub record: R,
}

/// What the table body shows
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody<R> {
    Loading,
    Empty(&'static str),
    Rows(Vec<TableRow<R>>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageState<R: Resource> {
    pub records: Vec<R>,
    pub draft: R::Draft,
    mode: EditMode,
    modal_open: bool,
    in_flight: u32,
}

impl<R: Resource> Default for PageState<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> PageState<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            draft: R::Draft::default(),
            mode: EditMode::Create,
            modal_open: false,
            in_flight: 0,
        }
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// True while at least one request of this page is outstanding
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn begin_request(&mut self) {
        self.in_flight += 1;
    }

    pub fn end_request(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    // ------------------------------------------------------------------
    // Modal / draft
    // ------------------------------------------------------------------

    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Edit(_))
    }

    pub fn editing_id(&self) -> Option<&RecordId> {
        match &self.mode {
            EditMode::Edit(id) => Some(id),
            EditMode::Create => None,
        }
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn open_create(&mut self) {
        self.draft = R::Draft::default();
        self.mode = EditMode::Create;
        self.modal_open = true;
    }

    pub fn open_edit(&mut self, record: &R) {
        self.draft = record.to_draft();
        self.mode = EditMode::Edit(record.id().clone());
        self.modal_open = true;
    }

    /// Hide the modal and discard the draft
    pub fn close_modal(&mut self) {
        self.draft = R::Draft::default();
        self.mode = EditMode::Create;
        self.modal_open = false;
    }

    // ------------------------------------------------------------------
    // Requests
    // ------------------------------------------------------------------

    /// Validate the draft and build the write for the current mode.
    pub fn prepare_submit(
        &self,
        attachments: usize,
    ) -> Result<WriteRequest<R::Draft>, ValidationError> {
        R::validate(&self.draft, attachments)?;
        let draft = self.draft.clone();
        Ok(match &self.mode {
            EditMode::Create => WriteRequest::Create(draft),
            EditMode::Edit(id) => WriteRequest::Update {
                id: id.clone(),
                draft,
            },
        })
    }

    pub fn finish_load(&mut self, records: Vec<R>) {
        CacheUpdate::Replace(records).apply(&mut self.records);
    }

    /// Apply a successful write to the cache, then close the modal.
    ///
    /// The id comes from the request, not from the current mode: the modal
    /// may have been reopened on another record while the request ran.
    pub fn finish_write(&mut self, request: &WriteRequest<R::Draft>, outcome: WriteOutcome<R>) {
        let update = match (outcome, request.id()) {
            (WriteOutcome::Reloaded(records), _) => CacheUpdate::Replace(records),
            (WriteOutcome::Saved(record), None) => CacheUpdate::Append(record),
            (WriteOutcome::Saved(record), Some(id)) => CacheUpdate::Update {
                id: id.clone(),
                record,
            },
        };
        update.apply(&mut self.records);
        self.close_modal();
    }

    pub fn finish_remove(&mut self, id: &RecordId) {
        CacheUpdate::Remove(id.clone()).apply(&mut self.records);
    }
    // ------------------------------------------------------------------
    // Table
    // ------------------------------------------------------------------

    /// Spinner while loading, the empty message, or one row per record
    pub fn table_body(&self) -> TableBody<R> {
        let descriptor = R::descriptor();
        if self.is_loading() {
            return TableBody::Loading;
        }
        if self.records.is_empty() {
            return TableBody::Empty(descriptor.texts.empty);
        }
        TableBody::Rows(
            self.records
                .iter()
                .map(|record| TableRow {
                    id: record.id().clone(),
                    cells: descriptor
                        .columns
                        .iter()
                        .map(|column| record.cell(column.key))
                        .collect(),
                    record: record.clone(),
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_category::{Category, CategoryDraft};
    use crate::domain::a002_news::{News, NewsDraft};

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: RecordId::new(id),
            category_name: name.to_string(),
        }
    }

    fn loaded(records: Vec<Category>) -> PageState<Category> {
        let mut state = PageState::new();
        state.finish_load(records);
        state
    }

    #[test]
    fn test_new_state_is_idle_create_mode() {
        let state = PageState::<Category>::new();
        assert!(state.records.is_empty());
        assert!(!state.is_loading());
        assert!(!state.is_editing());
        assert!(state.editing_id().is_none());
        assert!(!state.is_modal_open());
    }

    #[test]
    fn test_request_counter_releases_loading() {
        let mut state = PageState::<Category>::new();
        state.begin_request();
        state.begin_request();
        state.end_request();
        assert!(state.is_loading());
        state.end_request();
        assert!(!state.is_loading());
        state.end_request();
        assert!(!state.is_loading());
    }

    #[test]
    fn test_open_edit_copies_fields_and_sets_id() {
        let record = category("7", "Sports");
        let mut state = loaded(vec![record.clone()]);
        state.open_edit(&record);
        assert!(state.is_modal_open());
        assert!(state.is_editing());
        assert_eq!(state.editing_id(), Some(&RecordId::new("7")));
        assert_eq!(
            state.draft,
            CategoryDraft {
                category_name: "Sports".to_string()
            }
        );
    }

    #[test]
    fn test_open_create_resets_previous_edit() {
        let record = category("7", "Sports");
        let mut state = loaded(vec![record.clone()]);
        state.open_edit(&record);
        state.open_create();
        assert!(!state.is_editing());
        assert!(state.editing_id().is_none());
        assert_eq!(state.draft, CategoryDraft::default());
        assert!(state.is_modal_open());
    }

    #[test]
    fn test_close_modal_discards_draft() {
        let mut state = PageState::<Category>::new();
        state.open_create();
        state.draft.category_name = "Half typed".to_string();
        state.close_modal();
        assert!(!state.is_modal_open());
        assert_eq!(state.draft, CategoryDraft::default());
    }

    #[test]
    fn test_prepare_submit_rejects_blank_required_field() {
        let mut state = PageState::<Category>::new();
        state.open_create();
        state.draft.category_name = "   ".to_string();
        assert_eq!(
            state.prepare_submit(0),
            Err(ValidationError::MissingField {
                label: "Category Name"
            })
        );
    }

    #[test]
    fn test_prepare_submit_in_edit_mode_targets_editing_id() {
        let record = category("7", "Sports");
        let mut state = loaded(vec![record.clone()]);
        state.open_edit(&record);
        state.draft.category_name = "Football".to_string();
        let request = state.prepare_submit(0).unwrap();
        assert_eq!(request.operation(), Operation::Update);
        assert_eq!(request.id(), Some(&RecordId::new("7")));
        assert_eq!(request.draft().category_name, "Football");
    }

    #[test]
    fn test_news_attachment_limit() {
        let mut state = PageState::<News>::new();
        state.open_create();
        state.draft = NewsDraft {
            news_type: "Sport".to_string(),
            title: "Final".to_string(),
            data: "2024-05-01".to_string(),
            descriptions: "Match report".to_string(),
        };
        assert!(state.prepare_submit(5).is_ok());
        assert_eq!(
            state.prepare_submit(6),
            Err(ValidationError::TooManyAttachments {
                label: "Images (up to 5)",
                max: 5,
                actual: 6,
            })
        );
    }

    #[test]
    fn test_successful_create_appends_and_resets() {
        let mut state = loaded(vec![category("1", "Sports")]);
        state.open_create();
        state.draft.category_name = "Tech".to_string();
        let request = state.prepare_submit(0).unwrap();
        state.finish_write(&request, WriteOutcome::Saved(category("2", "Tech")));

        assert_eq!(
            state.records,
            vec![category("1", "Sports"), category("2", "Tech")]
        );
        assert!(!state.is_modal_open());
        assert!(!state.is_editing());
        assert_eq!(state.draft, CategoryDraft::default());
    }

    #[test]
    fn test_successful_update_replaces_only_edited_record() {
        let mut state = loaded(vec![category("1", "Sports"), category("2", "Tech")]);
        let target = state.records[0].clone();
        state.open_edit(&target);
        state.draft.category_name = "Football".to_string();
        let request = state.prepare_submit(0).unwrap();
        state.finish_write(&request, WriteOutcome::Saved(category("1", "Football")));

        assert_eq!(
            state.records,
            vec![category("1", "Football"), category("2", "Tech")]
        );
        assert!(state.editing_id().is_none());
    }

    #[test]
    fn test_update_uses_request_id_when_mode_changed() {
        let mut state = loaded(vec![category("1", "Sports"), category("2", "Tech")]);
        let first = state.records[0].clone();
        state.open_edit(&first);
        let request = state.prepare_submit(0).unwrap();
        let second = state.records[1].clone();
        state.open_edit(&second);
        state.finish_write(&request, WriteOutcome::Saved(category("1", "Renamed")));
        assert_eq!(state.records[0], category("1", "Renamed"));
        assert_eq!(state.records[1], category("2", "Tech"));
    }

    #[test]
    fn test_reloaded_outcome_replaces_list() {
        let mut state = loaded(vec![category("1", "Sports")]);
        state.open_create();
        state.draft.category_name = "Tech".to_string();
        let request = state.prepare_submit(0).unwrap();
        let fresh = vec![category("1", "Sports"), category("2", "Tech")];
        state.finish_write(&request, WriteOutcome::Reloaded(fresh.clone()));
        assert_eq!(state.records, fresh);
    }

    #[test]
    fn test_remove_shrinks_by_one() {
        let mut state = loaded(vec![category("1", "Sports"), category("2", "Tech")]);
        state.finish_remove(&RecordId::new("2"));
        assert_eq!(state.records.len(), 1);
        assert!(state.records.iter().all(|r| r.id.as_str() != "2"));
    }

    #[test]
    fn test_categories_scenario() {
        let body = r#"[{"id":"1","category_name":"Sports"}]"#;
        let list: Vec<Category> = serde_json::from_str(body).unwrap();
        let mut state = loaded(list);
        assert_eq!(state.records.len(), 1);
        assert_eq!(state.records[0].id.as_str(), "1");

        state.open_create();
        state.draft.category_name = "Tech".to_string();
        let request = state.prepare_submit(0).unwrap();
        let echoed: Category =
            serde_json::from_str(r#"{"id":"2","category_name":"Tech"}"#).unwrap();
        state.finish_write(&request, WriteOutcome::Saved(echoed));

        let names: Vec<(&str, &str)> = state
            .records
            .iter()
            .map(|c| (c.id.as_str(), c.category_name.as_str()))
            .collect();
        assert_eq!(names, vec![("1", "Sports"), ("2", "Tech")]);
    }

    #[test]
    fn test_table_shows_one_row_per_record() {
        let state = loaded(vec![category("1", "Sports")]);
        match state.table_body() {
            TableBody::Rows(rows) => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].id.as_str(), "1");
                assert_eq!(rows[0].cells, vec![Cell::Text("Sports".to_string())]);
                assert_eq!(rows[0].record, category("1", "Sports"));
            }
            other => panic!("unexpected table body: {other:?}"),
        }

        let state = loaded(vec![category("1", "Sports"), category("2", "Tech")]);
        match state.table_body() {
            TableBody::Rows(rows) => {
                let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
                assert_eq!(ids, vec!["1", "2"]);
            }
            other => panic!("unexpected table body: {other:?}"),
        }
    }

    #[test]
    fn test_table_empty_and_loading() {
        let mut state = PageState::<Category>::new();
        assert_eq!(state.table_body(), TableBody::Empty("No categories available"));

        state.begin_request();
        assert_eq!(state.table_body(), TableBody::Loading);

        state.end_request();
        state.finish_load(vec![category("1", "Sports")]);
        state.begin_request();
        assert_eq!(state.table_body(), TableBody::Loading);
    }

    #[test]
    fn test_table_cells_follow_column_order() {
        let news: News = serde_json::from_str(
            r#"{"_id":"n1","news_type":"Sport","title":"Final","data":"2024-05-01","descriptions":"Report","images":[]}"#,
        )
        .unwrap();
        let mut state = PageState::<News>::new();
        state.finish_load(vec![news]);
        match state.table_body() {
            TableBody::Rows(rows) => assert_eq!(
                rows[0].cells,
                vec![
                    Cell::Image(None),
                    Cell::Text("2024-05-01".to_string()),
                    Cell::Text("Sport".to_string()),
                    Cell::Text("Final".to_string()),
                    Cell::Text("Report".to_string()),
                ]
            ),
            other => panic!("unexpected table body: {other:?}"),
        }
    }
}
