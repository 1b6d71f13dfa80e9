use crate::shared::resource_page::resource_page;
use contracts::domain::a001_category::Category;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    resource_page::<Category>()
}
