//! Hooks for components that interact with the live channel.

use dioxus::prelude::*;

use super::channel::LiveChannel;
use super::machine::IndicatorState;

/// Get the app-wide live channel from context. Panics if no
/// `LiveChannelProvider` is above the calling component.
pub fn use_live_channel() -> LiveChannel {
    use_context::<LiveChannel>()
}

/// Current indicator state (reactive).
pub fn use_indicator_state() -> IndicatorState {
    *use_live_channel().indicator.read()
}
