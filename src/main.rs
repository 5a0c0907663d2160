//! Ludex Web - Main entry point
//!
//! Browser-side UI for the Ludex games database. Supports both web (WASM)
//! and desktop platforms.

#![allow(non_snake_case)]

use dioxus::prelude::*;
use ludex_web::{live::LiveChannelProvider, routes::Route};

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    // Initialize tracing for desktop
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::EnvFilter;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("ludex_web=debug")),
            )
            .init();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        LiveChannelProvider {
            Router::<Route> {}
        }
    }
}
