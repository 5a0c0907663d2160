//! Processing-queues page.
//!
//! The `queues` topic pushes a bare queue id when a queue changes; changed
//! rows are badged until the user refreshes the table.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::api_client::ApiClient;
use crate::live::use_live_channel;
use crate::models::QueueRow;
use crate::stores::QUEUES;

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

async fn fetch_queues() {
    match ApiClient::new()
        .get_json::<Vec<QueueRow>>("/api/queues")
        .await
    {
        Ok(rows) => QUEUES.write().replace_all(rows),
        Err(e) => crate::log_error!("failed to load queues: {e}"),
    }
}

#[component]
pub fn QueuesView() -> Element {
    let channel = use_live_channel();

    use_future(|| async {
        if !QUEUES.read().is_loaded {
            fetch_queues().await;
        }
    });

    use_hook(move || {
        channel.subscribe("queues", |payload| {
            // Per-page contract: the payload is the changed queue's id.
            match payload.as_u64() {
                Some(id) => {
                    QUEUES.write().mark_stale(id);
                }
                None => crate::log_error!("queue push with unexpected shape: {payload}"),
            }
        });
    });

    let board = QUEUES.read();
    let any_stale = !board.stale.is_empty();

    rsx! {
        main { class: "p-6",
            div { class: "flex items-center gap-4 mb-4",
                h1 { class: "text-xl font-bold", "Queues" }
                if any_stale {
                    button {
                        class: "px-3 py-1 text-sm rounded bg-[#5865f2] text-white",
                        onclick: move |_| {
                            spawn(fetch_queues());
                        },
                        "Refresh"
                    }
                }
            }
            if !board.is_loaded {
                p { class: "text-gray-400", "Loading…" }
            } else {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Queue" }
                            th { "Pending" }
                            th { "Updated" }
                            th { "" }
                        }
                    }
                    tbody {
                        for queue in board.rows.iter() {
                            tr { key: "{queue.id}",
                                td { "{queue.name}" }
                                td { "{queue.pending}" }
                                td { {format_timestamp(&queue.updated_at)} }
                                td {
                                    if board.is_stale(queue.id) {
                                        span { class: "stale-badge", "changed" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
