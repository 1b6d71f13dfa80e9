use contracts::domain::common::{PageState, Resource};
use leptos::prelude::*;

/// Marks a page as loading for as long as the guard lives.
///
/// Acquire it before spawning a request and move it into the future: the
/// flag is released when the future completes, fails or is dropped.
/// Writes go through `try_update`, so a guard outliving its page is a no-op.
pub struct LoadingGuard<R: Resource> {
    state: RwSignal<PageState<R>>,
}

impl<R: Resource> LoadingGuard<R> {
    pub fn acquire(state: RwSignal<PageState<R>>) -> Self {
        state.try_update(|s| s.begin_request());
        Self { state }
    }
}

impl<R: Resource> Drop for LoadingGuard<R> {
    fn drop(&mut self) {
        self.state.try_update(|s| s.end_request());
    }
}
