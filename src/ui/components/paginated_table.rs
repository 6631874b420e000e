use std::rc::Rc;

use dioxus::prelude::*;

use crate::domain::entities::record::Record;
use crate::domain::table::calendar::parse_date_input;
use crate::domain::table::pager::{has_next, has_prev, page_links};
use crate::domain::table::{PageLink, SortDirection, TableConfig, TableEngine};
use crate::ui::style::{table_cell_style, table_container_style, table_header_cell_style};

/// A per-row button. `key` comes back in the `RowEvent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowAction {
    pub key: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowEvent {
    pub action: &'static str,
    pub id: String,
}

/// Searchable, sortable, paged table over `records`. Each instance owns its
/// own engine, so two tables on one page never share view state.
#[component]
pub fn PaginatedTable<T: Record + Clone + PartialEq + 'static>(
    title: String,
    records: Vec<T>,
    config: TableConfig<T::Field>,
    #[props(default)] actions: Vec<RowAction>,
    on_action: Option<EventHandler<RowEvent>>,
) -> Element {
    let mut engine = use_signal(|| TableEngine::<T>::new(config.clone()));

    use_effect(use_reactive((&records,), move |(records,)| {
        engine.write().reconcile(&records);
    }));

    let records = Rc::new(records);
    let engine_ref = engine.read();
    let view = engine_ref.view(&records);
    let state = engine_ref.state().clone();
    let columns = engine_ref.columns().to_vec();
    let has_date_field = engine_ref.config().date_field().is_some();

    let current_page = view.current_page;
    let total_pages = view.total_pages;
    let total_items = view.total_items;
    let rows: Vec<(String, Vec<String>)> = view
        .items
        .iter()
        .map(|record| {
            let cells = columns
                .iter()
                .map(|column| record.value(column.accessor).display())
                .collect();
            (record.id().to_string(), cells)
        })
        .collect();
    drop(engine_ref);

    let headers: Vec<_> = columns
        .iter()
        .map(|column| {
            let active = state.sort_column == Some(column.accessor);
            (column.clone(), sort_marker(active, state.sort_direction))
        })
        .collect();

    let date_start = state
        .date_start
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let date_end = state
        .date_end
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let column_count = columns.len() + usize::from(!actions.is_empty());

    rsx! {
        div { style: "display: flex; flex-direction: column; gap: 6px;",
            div { style: "display: flex; gap: 8px; align-items: center; flex-wrap: wrap;",
                span { style: "font-weight: 600;", "{title}" }
                input {
                    placeholder: "Search",
                    value: "{state.search_text}",
                    oninput: move |event| engine.write().set_search_text(event.value()),
                }
                if has_date_field {
                    span { "From" }
                    input {
                        r#type: "date",
                        value: "{date_start}",
                        oninput: move |event| {
                            let end = engine.read().state().date_end;
                            engine.write().set_date_range(parse_date_input(&event.value()), end);
                        },
                    }
                    span { "To" }
                    input {
                        r#type: "date",
                        value: "{date_end}",
                        oninput: move |event| {
                            let start = engine.read().state().date_start;
                            engine.write().set_date_range(start, parse_date_input(&event.value()));
                        },
                    }
                }
                button {
                    onclick: move |_| engine.write().clear_filters(),
                    "Clear"
                }
            }

            div { style: "{table_container_style()}",
                table { style: "border-collapse: collapse; width: 100%; background: #fff;",
                    thead {
                        tr {
                            for (column, marker) in headers.into_iter() {
                                th {
                                    style: "{table_header_cell_style()}",
                                    onclick: move |_| engine.write().set_sort(column.accessor),
                                    "{column.label}{marker}"
                                }
                            }
                            if !actions.is_empty() {
                                th { style: "{table_header_cell_style()}", "" }
                            }
                        }
                    }
                    tbody {
                        if rows.is_empty() {
                            tr {
                                td {
                                    style: "{table_cell_style()} text-align: center; color: #777;",
                                    colspan: "{column_count}",
                                    "No records found."
                                }
                            }
                        }
                        for (id, cells) in rows.iter() {
                            tr { key: "{id}",
                                for cell in cells.iter() {
                                    td { style: "{table_cell_style()}", "{cell}" }
                                }
                                if !actions.is_empty() {
                                    td { style: "{table_cell_style()} white-space: nowrap;",
                                        for action in actions.iter().copied() {
                                            button {
                                                style: "margin-right: 4px;",
                                                onclick: {
                                                    let id = id.clone();
                                                    move |_| {
                                                        if let Some(handler) = on_action {
                                                            handler.call(RowEvent { action: action.key, id: id.clone() });
                                                        }
                                                    }
                                                },
                                                "{action.label}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { style: "display: flex; gap: 6px; align-items: center;",
                button {
                    disabled: !has_prev(current_page),
                    onclick: {
                        let records = records.clone();
                        move |_| engine.write().set_page(current_page.saturating_sub(1), &records)
                    },
                    "Previous"
                }
                for link in page_links(current_page, total_pages) {
                    {match link {
                        PageLink::Gap => rsx! { span { "…" } },
                        PageLink::Page(page) => {
                            let records = records.clone();
                            let weight = if page == current_page { "700" } else { "400" };
                            rsx! {
                                button {
                                    style: "font-weight: {weight};",
                                    onclick: move |_| engine.write().set_page(page, &records),
                                    "{page}"
                                }
                            }
                        }
                    }}
                }
                button {
                    disabled: !has_next(current_page, total_pages),
                    onclick: {
                        let records = records.clone();
                        move |_| engine.write().set_page(current_page + 1, &records)
                    },
                    "Next"
                }
                span { style: "color: #555;", "Page {current_page} of {total_pages} ({total_items} records)" }
            }
        }
    }
}

fn sort_marker(active: bool, direction: SortDirection) -> &'static str {
    match (active, direction) {
        (false, _) => "",
        (true, SortDirection::Ascending) => " ▲",
        (true, SortDirection::Descending) => " ▼",
    }
}
