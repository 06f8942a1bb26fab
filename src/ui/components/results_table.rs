use crate::theme::Palette;
use crate::ui::search_context::SearchContext;
use dioxus::prelude::*;
use std::rc::Rc;

/// Rows shown per page, matching the original grid
const PAGE_SIZE: usize = 5;

/// Ranked matches as a paginated table. Hidden entirely while there are no
/// rows; pagination is a client-side view over the fully loaded row set.
#[component]
pub fn ResultsTable() -> Element {
    let ctx = use_context::<Rc<SearchContext>>();
    let palette = Palette::for_mode(*ctx.dark_mode.read());
    let mut page = ctx.page;

    let state = ctx.state.read();
    if state.rows.is_empty() {
        return rsx! {};
    }

    let page_count = state.rows.len().div_ceil(PAGE_SIZE);
    let current = (*page.read()).min(page_count - 1);
    let visible = state
        .rows
        .iter()
        .skip(current * PAGE_SIZE)
        .take(PAGE_SIZE);

    rsx! {
        div {
            class: "results panel",
            style: "background-color: {palette.surface}; border-color: {palette.border};",
            div {
                class: "results-toolbar",
                button {
                    class: "export-button",
                    style: "background-color: {palette.accent};",
                    onclick: {
                        let ctx = ctx.clone();
                        move |_| ctx.export_csv()
                    },
                    "Export CSV"
                }
            }
            table {
                class: "results-table",
                style: "color: {palette.text_primary};",
                thead {
                    tr {
                        style: "background-color: {palette.table_header};",
                        th { "UniProt ID" }
                        th { "Cosine Similarity" }
                        th { "Sequence Identity (%)" }
                        th { "Pfam Domains" }
                    }
                }
                tbody {
                    for row in visible {
                        tr {
                            key: "{row.row_id}",
                            td {
                                a {
                                    href: "{row.entry.id_link}",
                                    target: "_blank",
                                    style: "color: {palette.accent};",
                                    "{row.entry.id}"
                                }
                            }
                            td { "{row.entry.similarity}" }
                            td { "{row.entry.identity}" }
                            td {
                                for (name, link) in row.entry.pfam.iter().zip(row.entry.pfam_links.iter()) {
                                    a {
                                        class: "pfam-link",
                                        href: "{link}",
                                        target: "_blank",
                                        style: "color: {palette.accent};",
                                        "{name}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
            if page_count > 1 {
                div {
                    class: "pagination",
                    style: "color: {palette.text_secondary};",
                    button {
                        disabled: current == 0,
                        onclick: move |_| page.set(current.saturating_sub(1)),
                        "Prev"
                    }
                    span { "Page {current + 1} of {page_count}" }
                    button {
                        disabled: current + 1 >= page_count,
                        onclick: move |_| page.set(current + 1),
                        "Next"
                    }
                }
            }
        }
    }
}
