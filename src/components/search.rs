use crate::components::{send, Icon, PlayerSignal, SEARCH_INPUT_ID, SEARCH_WRAPPER_ID};
use crate::playback::{Command, SearchHit};
use dioxus::prelude::*;

/// Top bar: logo (back to the catalog) and the live title search.
#[component]
pub fn SearchHeader() -> Element {
    let player = use_context::<PlayerSignal>().0;
    let header = use_memo(move || {
        let current = player.read();
        (
            current.search_query().to_string(),
            current.search_hits(),
            current.overlay().search_open,
        )
    });
    let (query, hits, open) = header();

    let on_input = move |evt: Event<FormData>| {
        send(player, Command::SearchChanged(evt.value()));
    };

    rsx! {
        header { class: "top-bar",
            button {
                class: "logo",
                r#type: "button",
                onclick: move |_| {
                    send(player, Command::GoHome);
                },
                Icon { name: "logo".to_string(), class: "logo-icon".to_string() }
                span { "GitTube" }
            }
            div { id: SEARCH_WRAPPER_ID, class: "search-wrapper",
                input {
                    id: SEARCH_INPUT_ID,
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Search (press /)",
                    autocomplete: "off",
                    value: "{query}",
                    oninput: on_input,
                }
                Icon { name: "search".to_string(), class: "search-icon".to_string() }
                if open {
                    div { class: "search-results",
                        for hit in hits {
                            SearchResult { key: "{hit.id}", hit: hit.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SearchResult(hit: SearchHit) -> Element {
    let player = use_context::<PlayerSignal>().0;
    let id = hit.id.clone();

    rsx! {
        div {
            class: "search-item",
            onclick: move |_| {
                send(player, Command::Open(id.clone()));
            },
            Icon { name: "search".to_string(), class: "search-item-icon".to_string() }
            span { "{hit.title}" }
        }
    }
}
