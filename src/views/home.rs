//! Games table page.
//!
//! Plain REST-backed table; the games list has no live feed.

use dioxus::prelude::*;

use crate::api_client::ApiClient;
use crate::models::GameRow;

#[component]
pub fn GamesView() -> Element {
    let games = use_resource(|| async {
        ApiClient::new()
            .get_json::<Vec<GameRow>>("/api/games")
            .await
            .map_err(|e| e.to_string())
    });

    rsx! {
        main { class: "p-6",
            h1 { class: "text-xl font-bold mb-4", "Games" }
            match games.read().as_ref() {
                Some(Ok(rows)) => rsx! {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Genre" }
                                th { "Year" }
                                th { "Rating" }
                            }
                        }
                        tbody {
                            for game in rows.iter() {
                                tr { key: "{game.id}",
                                    td { "{game.name}" }
                                    td { "{game.genre}" }
                                    td { "{game.year}" }
                                    td {
                                        if let Some(rating) = game.rating {
                                            "{rating:.1}"
                                        } else {
                                            "—"
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    p { class: "text-red-400", "Failed to load games: {e}" }
                },
                None => rsx! {
                    p { class: "text-gray-400", "Loading…" }
                },
            }
        }
    }
}
