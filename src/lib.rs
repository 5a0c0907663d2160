//! Ludex Web - Dioxus client for the Ludex games database.
//!
//! Page data loads over REST; everything after that arrives through the
//! live-update channel in [`live`], the engineering core of this crate.

pub mod api_client;
pub mod config;
pub mod live;
pub mod logging;
pub mod models;

pub mod components;
pub mod routes;
pub mod stores;
pub mod views;

pub use api_client::ApiClient;
pub use live::{LiveChannel, LiveChannelProvider};
pub use routes::Route;
