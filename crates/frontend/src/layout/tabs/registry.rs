//! Tab registry: maps a tab key to its page.

use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_news::ui::list::NewsList;
use crate::domain::a003_news_type::ui::list::NewsTypeList;
use leptos::prelude::*;

pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "a001_category" => view! { <CategoryList /> }.into_any(),
        "a002_news" => view! { <NewsList /> }.into_any(),
        "a003_news_type" => view! { <NewsTypeList /> }.into_any(),
        _ => {
            log::warn!("Unknown tab type: {key}");
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
