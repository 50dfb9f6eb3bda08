use crate::components::{send, PlayerSignal};
use crate::playback::{Command, PlaylistRow};
use dioxus::prelude::*;

/// "Up next" list beside the player; the active entry is highlighted.
#[component]
pub fn PlaylistSidebar() -> Element {
    let player = use_context::<PlayerSignal>().0;
    let rows = use_memo(move || player.read().playlist_rows());

    rsx! {
        aside { class: "playlist-sidebar",
            h3 { class: "playlist-heading", "Up next" }
            div { class: "playlist",
                for row in rows() {
                    PlaylistItem { key: "{row.id}", row: row.clone() }
                }
            }
        }
    }
}

#[component]
fn PlaylistItem(row: PlaylistRow) -> Element {
    let player = use_context::<PlayerSignal>().0;
    let id = row.id.clone();

    rsx! {
        div {
            id: "pl-item-{row.id}",
            class: if row.active { "playlist-item active" } else { "playlist-item" },
            onclick: move |_| {
                send(player, Command::Open(id.clone()));
            },
            div { class: "pl-thumb",
                video {
                    class: "pl-img",
                    src: "{row.thumb_src}",
                    preload: "metadata",
                    muted: true,
                }
            }
            div { class: "pl-info",
                h4 { "{row.title}" }
                span { "{row.views_label}" }
            }
        }
    }
}
