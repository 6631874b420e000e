use dioxus::prelude::*;

use crate::ui::style::{modal_backdrop_style, modal_card_style};

#[component]
pub fn ConfirmDialog(prompt: String, on_resolve: EventHandler<bool>) -> Element {
    rsx! {
        div {
            style: "{modal_backdrop_style()}",
            div {
                style: "{modal_card_style()}",
                div { style: "margin-bottom: 12px;", "{prompt}" }
                div { style: "display: flex; gap: 8px; justify-content: flex-end;",
                    button { onclick: move |_| on_resolve.call(true), "Confirm" }
                    button { onclick: move |_| on_resolve.call(false), "Cancel" }
                }
            }
        }
    }
}
