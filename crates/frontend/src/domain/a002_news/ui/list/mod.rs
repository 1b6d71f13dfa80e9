use crate::shared::resource_page::resource_page;
use contracts::domain::a002_news::News;
use leptos::prelude::*;

/// News table with image thumbnails; the form posts multipart with up to
/// five images and picks the type from the news categories.
#[component]
#[allow(non_snake_case)]
pub fn NewsList() -> impl IntoView {
    resource_page::<News>()
}
