//! Bundles page: REST history plus live inserts from the `bundles` topic.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::api_client::ApiClient;
use crate::live::use_live_channel;
use crate::models::BundleRow;
use crate::stores::BUNDLES;

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

#[component]
pub fn BundlesView() -> Element {
    let channel = use_live_channel();

    use_future(|| async {
        if BUNDLES.read().is_loaded {
            return;
        }
        match ApiClient::new()
            .get_json::<Vec<BundleRow>>("/api/bundles")
            .await
        {
            Ok(rows) => BUNDLES.write().replace_all(rows),
            Err(e) => crate::log_error!("failed to load bundles: {e}"),
        }
    });

    // One subscription per page load; the channel ignores repeats while a
    // connection is live. Each push payload is a full bundle row.
    use_hook(move || {
        channel.subscribe("bundles", |payload| {
            match serde_json::from_value::<BundleRow>(payload) {
                Ok(row) => {
                    BUNDLES.write().insert(row);
                }
                Err(e) => crate::log_error!("bundle push with unexpected shape: {e}"),
            }
        });
    });

    let feed = BUNDLES.read();

    rsx! {
        main { class: "p-6",
            h1 { class: "text-xl font-bold mb-4", "Bundles" }
            if !feed.is_loaded {
                p { class: "text-gray-400", "Loading…" }
            } else if feed.rows.is_empty() {
                p { class: "text-gray-400 italic", "No bundles yet" }
            } else {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Bundle" }
                            th { "Games" }
                            th { "Added" }
                        }
                    }
                    tbody {
                        for bundle in feed.rows.iter() {
                            tr { key: "{bundle.id}",
                                td { "{bundle.name}" }
                                td { "{bundle.game_count}" }
                                td { {format_timestamp(&bundle.added_at)} }
                            }
                        }
                    }
                }
            }
        }
    }
}
