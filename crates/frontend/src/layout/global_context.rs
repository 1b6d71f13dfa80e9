use crate::layout::tabs::tab_label_for_key;
use contracts::domain::descriptor_by_key;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restore the active tab from `?active=` and keep the query string in
    /// sync with it afterwards.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        match active_from_query(&search) {
            Some(key) if is_known_tab(&key) => self.open_tab(&key, tab_label_for_key(&key)),
            Some(key) => log::warn!("Ignoring unknown tab in URL: '{key}'"),
            None => {}
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let new_url = active_query(&active_key);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            log::debug!("open_tab: key='{key}', title='{title}'");
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab: key='{key}'");
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// Tab key from a `location.search` string such as `?active=a002_news`
fn active_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get("active")
        .filter(|key| !key.is_empty())
        .cloned()
}

/// Only resource pages can be restored from the URL
fn is_known_tab(key: &str) -> bool {
    descriptor_by_key(key).is_some()
}

/// `location.search` value for the given active tab
fn active_query(key: &str) -> String {
    let query = serde_qs::to_string(&HashMap::from([("active", key)])).unwrap_or_default();
    format!("?{query}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_from_query() {
        assert_eq!(
            active_from_query("?active=a002_news"),
            Some("a002_news".to_string())
        );
        assert_eq!(
            active_from_query("active=a001_category&x=1"),
            Some("a001_category".to_string())
        );
        assert_eq!(active_from_query(""), None);
        assert_eq!(active_from_query("?active="), None);
    }

    #[test]
    fn test_only_resource_tabs_are_restored() {
        assert!(is_known_tab("a002_news"));
        assert!(!is_known_tab("p900_sales_register"));
        assert!(!is_known_tab(""));
    }

    #[test]
    fn test_active_query_restores() {
        let query = active_query("a003_news_type");
        assert_eq!(query, "?active=a003_news_type");
        assert_eq!(active_from_query(&query), Some("a003_news_type".to_string()));
    }
}
