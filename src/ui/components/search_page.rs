use crate::theme::Palette;
use crate::ui::components::{Header, ResultsTable, SearchForm};
use crate::ui::search_context::SearchContext;
use dioxus::prelude::*;
use std::rc::Rc;

/// The single view: header, form, and results table
#[component]
pub fn SearchPage() -> Element {
    let ctx = use_context::<Rc<SearchContext>>();
    let palette = Palette::for_mode(*ctx.dark_mode.read());

    rsx! {
        div {
            class: "search-page",
            style: "background: {palette.background}; color: {palette.text_primary};",
            Header {}
            main {
                class: "content",
                SearchForm {}
                ResultsTable {}
            }
        }
    }
}
