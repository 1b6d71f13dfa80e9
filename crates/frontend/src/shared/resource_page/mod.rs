//! Generic list page for a backend collection: header, table and the
//! create/edit modal, all laid out from the resource descriptor.

pub mod view_model;

use self::view_model::ResourcePageViewModel;
use crate::shared::api_utils::asset_url;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::common::{
    Cell, Column, ColumnKind, FieldKind, FormField, Resource, TableBody, TableRow,
};
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

/// Page for the collection `R`; fetches on mount
pub fn resource_page<R: Resource>() -> AnyView {
    let vm = ResourcePageViewModel::<R>::new();
    vm.init();
    let texts = R::descriptor().texts;

    view! {
        <div class="content">
            <div class="header">
                <h2>{texts.title}</h2>
                <div class="header__actions">
                    <button
                        class="button button--secondary"
                        on:click=move |_| vm.load()
                        disabled=move || vm.is_loading()
                    >
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                    <button class="button button--primary" on:click=move |_| vm.open_create()>
                        {icon("plus")}
                        {texts.add_button}
                    </button>
                </div>
            </div>

            {records_table(vm)}

            <Show when=move || vm.is_modal_open()>
                {record_form(vm)}
            </Show>
        </div>
    }
    .into_any()
}

fn records_table<R: Resource>(vm: ResourcePageViewModel<R>) -> AnyView {
    let descriptor = R::descriptor();
    let span = descriptor.column_span();

    let rows = move || match vm.state.with(|s| s.table_body()) {
        TableBody::Loading => view! {
            <tr>
                <td class="table__cell table__cell--placeholder" colspan=span>
                    {icon("loader")}
                </td>
            </tr>
        }
        .into_any(),
        TableBody::Empty(message) => view! {
            <tr>
                <td class="table__cell table__cell--placeholder" colspan=span>
                    {message}
                </td>
            </tr>
        }
        .into_any(),
        TableBody::Rows(rows) => rows
            .into_iter()
            .map(|row| record_row(vm, row))
            .collect_view()
            .into_any(),
    };

    view! {
        <div class="table-container">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">{"ID"}</th>
                        {descriptor
                            .columns
                            .iter()
                            .map(|c| view! { <th class="table__header-cell">{c.label}</th> })
                            .collect_view()}
                        <th class="table__header-cell">{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
    .into_any()
}

fn record_row<R: Resource>(vm: ResourcePageViewModel<R>, row: TableRow<R>) -> AnyView {
    let descriptor = R::descriptor();
    let TableRow { id, cells, record } = row;
    let id_label = id.to_string();
    let cells = descriptor
        .columns
        .iter()
        .zip(cells)
        .map(|(column, cell)| record_cell(descriptor.key, column, cell))
        .collect_view();

    view! {
        <tr class="table__row">
            <td class="table__cell table__cell--id">{id_label}</td>
            {cells}
            <td class="table__cell table__cell--actions">
                <button
                    class="button button--icon"
                    title="Edit"
                    on:click=move |_| vm.open_edit(&record)
                >
                    {icon("edit")}
                </button>
                <button
                    class="button button--icon button--danger"
                    title="Delete"
                    on:click=move |_| vm.remove(id.clone())
                >
                    {icon("delete")}
                </button>
            </td>
        </tr>
    }
    .into_any()
}

fn record_cell(resource_key: &'static str, column: &Column, cell: Cell) -> AnyView {
    match (column.kind, cell) {
        (ColumnKind::Thumbnail, Cell::Image(Some(path))) => view! {
            <td class="table__cell">
                <img class="table__thumb" src=asset_url(resource_key, &path) alt=column.label />
            </td>
        }
        .into_any(),
        (_, Cell::Image(_)) => view! {
            <td class="table__cell table__cell--muted">{"No Image"}</td>
        }
        .into_any(),
        (ColumnKind::Strong, Cell::Text(text)) => view! {
            <td class="table__cell"><strong>{text}</strong></td>
        }
        .into_any(),
        (ColumnKind::Truncate, Cell::Text(text)) => {
            let title = text.clone();
            view! {
                <td class="table__cell table__cell--truncate" title=title>{text}</td>
            }
            .into_any()
        }
        (_, Cell::Text(text)) => view! { <td class="table__cell">{text}</td> }.into_any(),
    }
}

fn record_form<R: Resource>(vm: ResourcePageViewModel<R>) -> AnyView {
    let texts = R::descriptor().texts;
    let heading = move || {
        if vm.is_editing() {
            texts.edit_submit
        } else {
            texts.create_submit
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <Modal title=heading().to_string() on_close=Callback::new(move |_| vm.close())>
            <form class="form" on:submit=on_submit>
                {R::descriptor()
                    .fields
                    .iter()
                    .map(|field| form_field(vm, field))
                    .collect_view()}

                {move || vm.form_error.get().map(|e| view! { <div class="error">{e}</div> })}

                <div class="form__actions">
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || vm.is_loading()
                    >
                        {icon("save")}
                        {heading}
                    </button>
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=move |_| vm.close()
                    >
                        {icon("cancel")}
                        {"Cancel"}
                    </button>
                </div>
            </form>
        </Modal>
    }
    .into_any()
}

fn form_field<R: Resource>(vm: ResourcePageViewModel<R>, field: &'static FormField) -> AnyView {
    let name = field.name;
    let input_id = format!("{}-{}", R::descriptor().key, name);

    let control = match field.kind {
        FieldKind::Text => view! {
            <input
                type="text"
                id=input_id.clone()
                class="form__input"
                placeholder=field.placeholder
                required=field.required
                prop:value=move || vm.field_value(name)
                on:input=move |ev| vm.set_field(name, event_target_value(&ev))
            />
        }
        .into_any(),
        FieldKind::TextArea { rows } => view! {
            <textarea
                id=input_id.clone()
                class="form__textarea"
                rows=rows
                placeholder=field.placeholder
                required=field.required
                prop:value=move || vm.field_value(name)
                on:input=move |ev| vm.set_field(name, event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        FieldKind::Select { placeholder, .. } => view! {
            <select
                id=input_id.clone()
                class="form__select"
                required=field.required
                on:change=move |ev| vm.set_field(name, event_target_value(&ev))
            >
                <option value="" disabled=true prop:selected=move || vm.field_value(name).is_empty()>
                    {placeholder}
                </option>
                {move || {
                    vm.options_for(name)
                        .into_iter()
                        .map(|option| {
                            let selected = {
                                let option = option.clone();
                                move || vm.field_value(name) == option
                            };
                            let label = option.clone();
                            view! {
                                <option value=option prop:selected=selected>{label}</option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        }
        .into_any(),
        FieldKind::Files { accept, .. } => view! {
            <input
                type="file"
                id=input_id.clone()
                class="form__input"
                accept=accept
                multiple=true
                on:change=move |ev| vm.set_attachments(selected_files(&ev))
            />
            <span class="form__hint">
                {move || format!("{} selected", vm.attachment_count())}
            </span>
        }
        .into_any(),
    };

    view! {
        <div class="form__group">
            <label class="form__label" for=input_id>{field.label}</label>
            {control}
        </div>
    }
    .into_any()
}

fn selected_files(ev: &ev::Event) -> Vec<web_sys::File> {
    let Some(list) = ev
        .target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .and_then(|input| input.files())
    else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}
