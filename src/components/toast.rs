//! Toast stack rendering pending notices.

use dioxus::prelude::*;

use crate::stores::{dismiss_notice, NOTICES};

#[component]
pub fn ToastStack() -> Element {
    let notices = NOTICES.read().clone();
    if notices.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "toast-stack",
            for notice in notices {
                div {
                    key: "{notice.id}",
                    class: "toast",
                    onclick: move |_| dismiss_notice(notice.id),
                    span { class: "toast-text", "{notice.text}" }
                    span { class: "toast-dismiss", "×" }
                }
            }
        }
    }
}
