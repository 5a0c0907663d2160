//! Application routing configuration.

use dioxus::prelude::*;

use crate::views::{BundlesView, GamesView, Navbar, QueuesView};

// Router configuration
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]
        #[route("/")]
        GamesView {},
        #[route("/bundles")]
        BundlesView {},
        #[route("/queues")]
        QueuesView {},
}
