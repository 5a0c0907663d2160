//! Live-update channel: one push connection, many page subscribers.
//!
//! A page module calls [`LiveChannel::subscribe`] once on mount with its
//! topic and a message handler. The channel opens a single WebSocket to
//! `/websocket/<topic>`, forwards every `{"Data": ...}` payload to the
//! handler, and keeps the connectivity badge in sync. Abnormal closures
//! retry on a fixed 5-second delay until the server comes back; clicking
//! the badge suspends (close code 1000, never retried) or resumes.
//!
//! # Architecture
//!
//! ```text
//!   pages ── subscribe/toggle ──▶ LiveChannel (context handle)
//!                                      │ command stream
//!                                      ▼
//!                                 driver task ──▶ ChannelMachine (pure)
//!                                  │    ▲              │ effects
//!                                  ▼    │ events       ▼
//!                               WsTransport      indicator / notices / timer
//! ```
//!
//! The driver task is the only writer of connection state; the machine in
//! `machine.rs` holds the whole reconnect policy and is tested natively.

pub mod channel;
pub mod envelope;
pub mod hooks;
pub mod machine;
mod timers;
pub mod transport;

pub use channel::{LiveChannel, LiveChannelProvider};
pub use hooks::{use_indicator_state, use_live_channel};
pub use machine::{
    ChannelMachine, Effect, IndicatorState, MachineEvent, Phase, CLOSE_NORMAL, RETRY_DELAY_MS,
};
pub use transport::{TransportEvent, WsTransport};
