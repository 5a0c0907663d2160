//! Top navigation bar, shared by all pages.

use dioxus::prelude::*;

use crate::components::{StatusIndicator, ToastStack};
use crate::Route;

/// Layout wrapping every route: nav links, the live-channel indicator and
/// the toast stack, with the active page rendered below.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        header { class: "flex items-center gap-6 px-6 py-3 bg-[#1e1f22] text-white",
            span { class: "text-lg font-bold tracking-wide", "Ludex" }
            nav { class: "flex gap-4 text-sm",
                Link { class: "hover:text-white text-gray-300", to: Route::GamesView {}, "Games" }
                Link { class: "hover:text-white text-gray-300", to: Route::BundlesView {}, "Bundles" }
                Link { class: "hover:text-white text-gray-300", to: Route::QueuesView {}, "Queues" }
            }
            div { class: "ml-auto flex items-center",
                StatusIndicator {}
            }
        }
        ToastStack {}
        Outlet::<Route> {}
    }
}
