//! Sidebar: one entry per resource, opening or activating its tab

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use contracts::domain::all_descriptors;
use leptos::prelude::*;

fn icon_for_key(key: &str) -> &'static str {
    match key {
        "a001_category" => "folder",
        "a002_news" => "newspaper",
        "a003_news_type" => "tag",
        _ => "",
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-sidebar__content">
            {all_descriptors()
                .into_iter()
                .map(|descriptor| {
                    let key = descriptor.key;
                    let label = tab_label_for_key(key);
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                ctx.active.with(|a| a.as_deref() == Some(key))
                            }
                            style:padding-left="12px"
                            on:click=move |_| ctx.open_tab(key, label)
                        >
                            <div class="app-sidebar__item-content">
                                {icon(icon_for_key(key))}
                                <span>{label}</span>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
