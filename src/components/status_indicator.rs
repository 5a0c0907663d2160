//! Connectivity badge for the live channel.

use dioxus::prelude::*;

use crate::live::{use_indicator_state, use_live_channel, IndicatorState};

/// Colored dot reflecting the live-channel state. Clicking it suspends or
/// resumes the connection; clicks are only honored once the channel has a
/// settled state to toggle from.
#[component]
pub fn StatusIndicator() -> Element {
    let channel = use_live_channel();
    let state = use_indicator_state();

    let mut class = format!("live-indicator {}", state.css_class());
    if state.is_clickable() {
        class.push_str(" clickable");
    }
    let title = match state {
        IndicatorState::Unknown => "Live updates",
        IndicatorState::Connected => "Live updates on (click to pause)",
        IndicatorState::Disconnected => "Live updates off (click to resume)",
    };

    rsx! {
        span {
            class: "{class}",
            title: "{title}",
            onclick: move |_| {
                if channel.indicator.read().is_clickable() {
                    channel.toggle();
                }
            },
        }
    }
}
