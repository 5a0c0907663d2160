//! Desktop transport backed by tokio-tungstenite.
//!
//! A background tokio task owns the socket and forwards lifecycle events
//! into the channel driver's stream, mirroring the browser callback shape.

use futures_channel::mpsc::UnboundedSender;
use futures_util::{SinkExt, StreamExt};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::protocol::frame::coding::CloseCode;
use tokio_tungstenite::tungstenite::protocol::CloseFrame;
use tokio_tungstenite::tungstenite::Message;

use super::TransportEvent;

/// Close code reported when the connection drops without a close frame.
const CLOSE_ABNORMAL: u16 = 1006;

pub struct WsTransport {
    close_tx: tokio::sync::mpsc::UnboundedSender<u16>,
}

impl WsTransport {
    pub fn supported() -> bool {
        true
    }

    pub fn connect(url: &str, events: UnboundedSender<TransportEvent>) -> Result<Self, String> {
        let (close_tx, close_rx) = tokio::sync::mpsc::unbounded_channel::<u16>();
        let url = url.to_string();
        tokio::spawn(run_socket(url, events, close_rx));
        Ok(Self { close_tx })
    }

    /// Request shutdown; completion arrives as a `Closed` event once the
    /// server echoes the close frame.
    pub fn close(&self, code: u16) {
        let _ = self.close_tx.send(code);
    }
}

async fn run_socket(
    url: String,
    events: UnboundedSender<TransportEvent>,
    mut close_rx: tokio::sync::mpsc::UnboundedReceiver<u16>,
) {
    let (stream, _response) = match connect_async(url.as_str()).await {
        Ok(ok) => ok,
        Err(e) => {
            crate::log_error!("WebSocket connect to {url} failed: {e}");
            let _ = events.unbounded_send(TransportEvent::Error);
            return;
        }
    };
    let _ = events.unbounded_send(TransportEvent::Opened);

    let (mut write, mut read) = stream.split();

    loop {
        tokio::select! {
            incoming = read.next() => match incoming {
                Some(Ok(Message::Text(text))) => {
                    let _ = events.unbounded_send(TransportEvent::Message(text.to_string()));
                }
                Some(Ok(Message::Close(frame))) => {
                    let code = frame.map(|f| u16::from(f.code)).unwrap_or(CLOSE_ABNORMAL);
                    let _ = events.unbounded_send(TransportEvent::Closed { code });
                    break;
                }
                // Ping/pong are answered by tungstenite; binary is not part
                // of the push protocol.
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    crate::log_error!("WebSocket read error: {e}");
                    let _ = events.unbounded_send(TransportEvent::Error);
                    break;
                }
                None => {
                    let _ = events.unbounded_send(TransportEvent::Closed { code: CLOSE_ABNORMAL });
                    break;
                }
            },
            requested = close_rx.recv() => {
                let Some(code) = requested else {
                    // Handle dropped: the driver has abandoned this socket.
                    let _ = write.send(Message::Close(None)).await;
                    break;
                };
                let frame = CloseFrame {
                    code: CloseCode::from(code),
                    reason: "".into(),
                };
                if let Err(e) = write.send(Message::Close(Some(frame))).await {
                    crate::log_error!("WebSocket close failed: {e}");
                    let _ = events.unbounded_send(TransportEvent::Closed { code });
                    break;
                }
                // Keep reading: the server's close echo lands in the read
                // arm and carries the definitive close code.
            }
        }
    }
}
