//! Site URL configuration.
//!
//! On the web the client always talks to the host that served the page, so
//! the base URL comes from `window.location`. The desktop build reads
//! `LUDEX_SITE_URL` instead (defaulting to a local dev server).

const DEFAULT_SITE_URL: &str = "http://localhost:8080";

/// Origin of the Ludex site this client talks to, e.g. `https://ludex.example`.
#[cfg(target_arch = "wasm32")]
pub fn site_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| DEFAULT_SITE_URL.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn site_origin() -> String {
    std::env::var("LUDEX_SITE_URL").unwrap_or_else(|_| DEFAULT_SITE_URL.to_string())
}

/// Construct an API URL from a path like `/api/games`.
pub fn api_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    join(&site_origin(), path)
}

/// Construct the push-notification URL for a topic:
/// `<ws|wss>://<site host>/websocket/<topic>`.
pub fn live_url(topic: &str) -> String {
    live_url_for(&site_origin(), topic)
}

fn live_url_for(origin: &str, topic: &str) -> String {
    join(&ws_origin(origin), &format!("/websocket/{topic}"))
}

/// Convert an HTTP(S) origin to its WS(S) counterpart.
fn ws_origin(origin: &str) -> String {
    if origin.starts_with("https://") {
        origin.replacen("https://", "wss://", 1)
    } else if origin.starts_with("http://") {
        origin.replacen("http://", "ws://", 1)
    } else {
        format!("ws://{origin}")
    }
}

fn join(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_url_uses_ws_for_http_origin() {
        assert_eq!(
            live_url_for("http://localhost:8080", "queues"),
            "ws://localhost:8080/websocket/queues"
        );
    }

    #[test]
    fn live_url_uses_wss_for_https_origin() {
        assert_eq!(
            live_url_for("https://ludex.example", "bundles"),
            "wss://ludex.example/websocket/bundles"
        );
    }

    #[test]
    fn live_url_handles_bare_host_and_trailing_slash() {
        assert_eq!(
            live_url_for("ludex.example/", "chat"),
            "ws://ludex.example/websocket/chat"
        );
    }

    #[test]
    fn api_url_passes_absolute_urls_through() {
        assert_eq!(
            api_url("https://cdn.example/games.json"),
            "https://cdn.example/games.json"
        );
    }
}
