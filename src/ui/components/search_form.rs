use crate::theme::Palette;
use crate::ui::search_context::SearchContext;
use dioxus::prelude::*;
use std::rc::Rc;

/// Sequence input form with Top-K selector and submit button
#[component]
pub fn SearchForm() -> Element {
    let ctx = use_context::<Rc<SearchContext>>();
    let mut sequence = ctx.sequence;
    let mut top_k = ctx.top_k;
    let palette = Palette::for_mode(*ctx.dark_mode.read());

    let loading = ctx.state.read().loading;
    let error = ctx.state.read().error.clone();

    rsx! {
        div {
            class: "search-form panel",
            style: "background-color: {palette.surface}; border-color: {palette.border};",
            label {
                style: "color: {palette.text_secondary};",
                "Protein Sequence"
            }
            textarea {
                class: "sequence-input",
                style: "border-color: {palette.border}; background-color: {palette.surface}; color: {palette.text_primary};",
                placeholder: "MKTLLVLL...",
                rows: "4",
                value: "{sequence}",
                oninput: move |event: FormEvent| {
                    sequence.set(event.value());
                }
            }
            div {
                class: "form-controls",
                label {
                    style: "color: {palette.text_secondary};",
                    "Top K"
                }
                input {
                    class: "top-k-input",
                    style: "border-color: {palette.border}; background-color: {palette.surface}; color: {palette.text_primary};",
                    r#type: "number",
                    min: "1",
                    value: "{top_k}",
                    oninput: move |event: FormEvent| {
                        // Non-numeric input keeps the previous value
                        if let Ok(value) = event.value().parse::<u32>() {
                            top_k.set(value.max(1));
                        }
                    }
                }
                button {
                    class: "submit-button",
                    style: "background-color: {palette.accent};",
                    disabled: loading,
                    onclick: {
                        let ctx = ctx.clone();
                        move |_| ctx.submit()
                    },
                    if loading { "Searching..." } else { "Search" }
                }
            }
            if let Some(message) = error {
                div {
                    class: "error-banner",
                    "{message}"
                }
            }
        }
    }
}
