use crate::shared::dialogs;
use crate::shared::loading_guard::LoadingGuard;
use crate::shared::resource_api;
use contracts::domain::common::{FieldKind, PageState, RecordId, Resource};
use contracts::shared::error::ResourceError;
use leptos::prelude::*;
use std::collections::HashMap;
use wasm_bindgen_futures::spawn_local;
use web_sys::File;

/// ViewModel for a resource page: table + create/edit modal
pub struct ResourcePageViewModel<R: Resource> {
    pub state: RwSignal<PageState<R>>,
    /// Files picked in the form; browser objects, so kept out of the draft
    pub attachments: RwSignal<Vec<File>, LocalStorage>,
    /// Select options per form field name
    pub options: RwSignal<HashMap<&'static str, Vec<String>>>,
    /// Inline message for resources that do not alert on failed submits
    pub form_error: RwSignal<Option<String>>,
}

impl<R: Resource> Clone for ResourcePageViewModel<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for ResourcePageViewModel<R> {}

impl<R: Resource> ResourcePageViewModel<R> {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(PageState::new()),
            attachments: RwSignal::new_local(Vec::new()),
            options: RwSignal::new(HashMap::new()),
            form_error: RwSignal::new(None),
        }
    }

    /// Initial fetches on mount
    pub fn init(&self) {
        self.load();
        self.load_options();
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading())
    }

    pub fn is_editing(&self) -> bool {
        self.state.with(|s| s.is_editing())
    }

    pub fn is_modal_open(&self) -> bool {
        self.state.with(|s| s.is_modal_open())
    }

    pub fn field_value(&self, name: &str) -> String {
        self.state.with(|s| R::draft_value(&s.draft, name))
    }

    pub fn options_for(&self, name: &str) -> Vec<String> {
        self.options
            .with(|o| o.get(name).cloned().unwrap_or_default())
    }

    pub fn attachment_count(&self) -> usize {
        self.attachments.with(|a| a.len())
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Fetch the collection; on failure the current list stays as it is
    pub fn load(&self) {
        let state = self.state;
        let key = R::descriptor().key;
        let guard = LoadingGuard::acquire(state);
        spawn_local(async move {
            let _guard = guard;
            match resource_api::fetch_all::<R>().await {
                Ok(records) => {
                    log::debug!("{key}: loaded {} records", records.len());
                    state.try_update(|s| s.finish_load(records));
                }
                Err(e) => log::error!("{key}: failed to load: {e}"),
            }
        });
    }

    fn load_options(&self) {
        let key = R::descriptor().key;
        for field in R::descriptor().fields {
            let FieldKind::Select {
                source,
                value_field,
                ..
            } = field.kind
            else {
                continue;
            };
            let options = self.options;
            let name = field.name;
            spawn_local(async move {
                match resource_api::fetch_options(R::descriptor(), source, value_field).await {
                    Ok(values) => {
                        options.try_update(|o| {
                            o.insert(name, values);
                        });
                    }
                    Err(e) => log::error!("{key}: failed to load options for '{name}': {e}"),
                }
            });
        }
    }

    pub fn open_create(&self) {
        self.reset_form_extras();
        self.state.update(|s| s.open_create());
    }

    pub fn open_edit(&self, record: &R) {
        self.reset_form_extras();
        self.state.update(|s| s.open_edit(record));
    }

    /// Cancel: hide the modal and drop the draft
    pub fn close(&self) {
        self.reset_form_extras();
        self.state.update(|s| s.close_modal());
    }

    fn reset_form_extras(&self) {
        self.attachments.set(Vec::new());
        self.form_error.set(None);
    }

    pub fn set_field(&self, name: &str, value: String) {
        self.state.update(|s| R::set_draft_value(&mut s.draft, name, value));
    }

    pub fn set_attachments(&self, files: Vec<File>) {
        self.attachments.set(files);
    }

    pub fn submit(&self) {
        let files = self.attachments.get_untracked();
        let request = match self.state.with_untracked(|s| s.prepare_submit(files.len())) {
            Ok(request) => request,
            Err(e) => {
                self.report_submit_failure(&e.into());
                return;
            }
        };
        self.form_error.set(None);

        let vm = *self;
        let key = R::descriptor().key;
        let guard = LoadingGuard::acquire(self.state);
        spawn_local(async move {
            let _guard = guard;
            match resource_api::write::<R>(&request, &files).await {
                Ok(outcome) => {
                    log::info!("{key}: {:?} succeeded", request.operation());
                    vm.state.try_update(|s| s.finish_write(&request, outcome));
                    vm.attachments.try_set(Vec::new());
                }
                Err(e) => vm.report_submit_failure(&e),
            }
        });
    }

    fn report_submit_failure(&self, error: &ResourceError) {
        let descriptor = R::descriptor();
        let alert = descriptor.texts.submit_failed_alert;
        match error {
            ResourceError::Validation(invalid) => {
                log::warn!("{}: draft rejected: {invalid}", descriptor.key);
                if alert.is_some() {
                    dialogs::alert(&invalid.to_string());
                } else {
                    self.form_error.try_set(Some(invalid.to_string()));
                }
            }
            other => {
                log::error!("{}: save failed: {other}", descriptor.key);
                if let Some(text) = alert {
                    dialogs::alert(text);
                }
            }
        }
    }

    pub fn remove(&self, id: RecordId) {
        let descriptor = R::descriptor();
        if let Some(question) = descriptor.texts.confirm_delete {
            if !dialogs::confirm(question) {
                return;
            }
        }

        let state = self.state;
        let guard = LoadingGuard::acquire(state);
        spawn_local(async move {
            let _guard = guard;
            match resource_api::remove::<R>(&id).await {
                Ok(()) => {
                    // Page already gone: nothing to update, nobody to tell
                    if state.try_update(|s| s.finish_remove(&id)).is_some() {
                        dialogs::alert(descriptor.texts.deleted);
                    }
                }
                Err(e) => {
                    log::error!("{}: failed to delete {id}: {e}", descriptor.key);
                    if let Some(prefix) = descriptor.texts.delete_failed_alert {
                        dialogs::alert(&format!("{prefix}: {}", e.server_message()));
                    }
                }
            }
        });
    }
}
