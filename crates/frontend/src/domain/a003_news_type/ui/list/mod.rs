use crate::shared::resource_page::resource_page;
use contracts::domain::a003_news_type::NewsType;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn NewsTypeList() -> impl IntoView {
    resource_page::<NewsType>()
}
