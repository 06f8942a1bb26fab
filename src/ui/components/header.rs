use crate::theme::Palette;
use crate::ui::search_context::SearchContext;
use dioxus::prelude::*;
use std::rc::Rc;

/// App bar with the title and the dark/light toggle
#[component]
pub fn Header() -> Element {
    let ctx = use_context::<Rc<SearchContext>>();
    let dark_mode = *ctx.dark_mode.read();
    let palette = Palette::for_mode(dark_mode);

    rsx! {
        header {
            class: "app-header",
            style: "background-color: {palette.header};",
            h1 { "Protein Similarity Search" }
            button {
                class: "theme-toggle",
                onclick: {
                    let ctx = ctx.clone();
                    move |_| ctx.toggle_theme()
                },
                if dark_mode { "☀ Light" } else { "🌙 Dark" }
            }
        }
    }
}
