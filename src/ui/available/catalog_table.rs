use dioxus::prelude::*;

use crate::app::AppState;
use crate::catalog::{self, SortColumn};

/// Catalog filtered by the search box, with clickable column headers
#[component]
pub fn CatalogTable() -> Element {
    let app_state = use_context::<AppState>();
    let mut sort = app_state.sort;
    let mut selected_available = app_state.selected_available;

    let query = app_state.search.read().clone();
    let current_sort = *sort.read();
    let rows = catalog::view(&query, current_sort);
    let selected_name = (*selected_available.read()).map(|entry| entry.name);

    rsx! {
        div {
            class: "catalog-table",

            div {
                class: "catalog-row catalog-head",
                for column in SortColumn::ALL {
                    div {
                        key: "{column.title()}",
                        class: "catalog-cell sortable",
                        onclick: move |_| sort.write().toggle(column),
                        "{current_sort.header_label(column)}"
                    }
                }
            }

            if rows.is_empty() {
                div { class: "empty-hint", "No models match \"{query}\"" }
            }

            {rows.into_iter().map(|entry| {
                let row_class = if selected_name == Some(entry.name) {
                    "catalog-row list-row selected"
                } else {
                    "catalog-row list-row"
                };

                rsx! {
                    div {
                        key: "{entry.name}",
                        class: "{row_class}",
                        onclick: move |_| selected_available.set(Some(entry)),
                        div { class: "catalog-cell", "{entry.name}" }
                        div { class: "catalog-cell", "{entry.size}" }
                        div { class: "catalog-cell", "{entry.family}" }
                        div { class: "catalog-cell", "{entry.released}" }
                    }
                }
            })}
        }
    }
}
