use crate::components::{preview_play, preview_stop, send, PlayerSignal};
use crate::playback::{catalog_cards, CardView, Command};
use dioxus::prelude::*;

#[component]
pub fn HomeView() -> Element {
    let player = use_context::<PlayerSignal>().0;
    let grid = use_memo(move || {
        let current = player.read();
        (
            catalog_cards(current.catalog()),
            current.settings().preview_min_width,
        )
    });
    let (cards, preview_min_width) = grid();

    rsx! {
        div { class: "video-grid",
            if cards.is_empty() {
                div { class: "empty-state",
                    h2 { "Nothing to watch yet" }
                    p { "The catalog is empty." }
                }
            }
            for card in cards {
                VideoCard { key: "{card.id}", card: card.clone(), preview_min_width }
            }
        }
    }
}

/// Grid card. Hovering plays a muted preview on wide windows.
#[component]
fn VideoCard(card: CardView, preview_min_width: f64) -> Element {
    let player = use_context::<PlayerSignal>().0;
    let preview_id = format!("thumb-{}", card.id);
    let id = card.id.clone();

    let on_enter = {
        let preview_id = preview_id.clone();
        move |_| preview_play(&preview_id, preview_min_width)
    };
    let on_leave = {
        let preview_id = preview_id.clone();
        move |_| preview_stop(&preview_id)
    };

    rsx! {
        div {
            class: "video-card",
            onclick: move |_| {
                send(player, Command::Open(id.clone()));
            },
            onmouseenter: on_enter,
            onmouseleave: on_leave,
            div { class: "thumbnail-container",
                video {
                    id: "{preview_id}",
                    class: "thumb-media",
                    src: "{card.preview_src}",
                    preload: "metadata",
                    muted: true,
                    "playsinline": "true",
                }
                span { class: "duration-badge", "{card.duration_label}" }
            }
            div { class: "video-info",
                div { class: "channel-avatar" }
                div { class: "video-text",
                    h3 { "{card.title}" }
                    p { "{card.meta}" }
                }
            }
        }
    }
}
