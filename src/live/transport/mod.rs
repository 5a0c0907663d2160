//! Receive-only WebSocket transport.
//!
//! Both platforms expose the same surface: `WsTransport::connect` opens the
//! socket and forwards lifecycle events into the channel driver's stream,
//! `close` requests a shutdown with an explicit close code. The client never
//! sends application frames.

/// Lifecycle events a transport reports to the channel driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    Opened,
    /// A raw text frame.
    Message(String),
    /// The connection ended; 1006 when no close frame was received.
    Closed { code: u16 },
    Error,
}

#[cfg(target_arch = "wasm32")]
mod transport_wasm;
#[cfg(target_arch = "wasm32")]
pub use transport_wasm::WsTransport;

#[cfg(not(target_arch = "wasm32"))]
mod transport_native;
#[cfg(not(target_arch = "wasm32"))]
pub use transport_native::WsTransport;
