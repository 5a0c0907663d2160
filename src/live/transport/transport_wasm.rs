//! Browser transport backed by `web_sys::WebSocket`.

use futures_channel::mpsc::UnboundedSender;
use wasm_bindgen::prelude::*;
use web_sys::js_sys;

use super::TransportEvent;

pub struct WsTransport {
    inner: web_sys::WebSocket,
}

impl WsTransport {
    /// Whether the runtime has the WebSocket primitive at all. When it
    /// doesn't, live updates are silently unavailable.
    pub fn supported() -> bool {
        web_sys::window()
            .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("WebSocket")).unwrap_or(false))
            .unwrap_or(false)
    }

    /// Open a socket and wire the four lifecycle callbacks. Each callback
    /// just forwards into `events`; all policy lives in the channel driver.
    pub fn connect(url: &str, events: UnboundedSender<TransportEvent>) -> Result<Self, String> {
        let ws = web_sys::WebSocket::new(url)
            .map_err(|e| format!("failed to create WebSocket for {url}: {e:?}"))?;

        let tx = events.clone();
        let onopen = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let _ = tx.unbounded_send(TransportEvent::Opened);
        }) as Box<dyn FnMut(web_sys::Event)>);
        ws.set_onopen(Some(onopen.as_ref().unchecked_ref()));
        onopen.forget();

        let tx = events.clone();
        let onmessage = Closure::wrap(Box::new(move |e: web_sys::MessageEvent| {
            if let Ok(text) = e.data().dyn_into::<js_sys::JsString>() {
                let _ = tx.unbounded_send(TransportEvent::Message(text.into()));
            }
        }) as Box<dyn FnMut(web_sys::MessageEvent)>);
        ws.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
        onmessage.forget();

        let tx = events.clone();
        let onclose = Closure::wrap(Box::new(move |e: web_sys::CloseEvent| {
            let _ = tx.unbounded_send(TransportEvent::Closed { code: e.code() });
        }) as Box<dyn FnMut(web_sys::CloseEvent)>);
        ws.set_onclose(Some(onclose.as_ref().unchecked_ref()));
        onclose.forget();

        let tx = events;
        let onerror = Closure::wrap(Box::new(move |_: web_sys::ErrorEvent| {
            let _ = tx.unbounded_send(TransportEvent::Error);
        }) as Box<dyn FnMut(web_sys::ErrorEvent)>);
        ws.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();

        Ok(Self { inner: ws })
    }

    /// Request shutdown; completion arrives as a `Closed` event.
    pub fn close(&self, code: u16) {
        if let Err(e) = self.inner.close_with_code(code) {
            crate::log_error!("WebSocket close failed: {e:?}");
        }
    }
}
