use crate::catalog::Catalog;
use crate::components::views::HomeView;
use crate::components::{
    build_player, connect_media_events, install_page_listeners, location_query, PlayerSignal,
    PlayerSurface, PlaylistSidebar, SearchHeader, VideoDetails,
};
use crate::playback::View;
use crate::settings::PlayerSettings;
use dioxus::prelude::*;

#[component]
pub fn AppShell() -> Element {
    let player = use_signal(|| build_player(Catalog::embedded(), PlayerSettings::embedded()));
    use_context_provider(|| PlayerSignal(player));

    // Page listeners live for the whole session.
    use_hook(move || install_page_listeners(player));

    // The video slot only exists after the first render, so the deep link
    // is resolved here rather than in the signal initializer.
    use_effect(move || {
        let mut player = player;
        connect_media_events(player);
        let query = location_query();
        let view = player.write().boot(&query);
        tracing::info!(?view, "player ready");
    });

    // Only a view switch re-renders the shell; children track their own slices.
    let view = use_memo(move || player.read().view());
    let home_class = if view() == View::Catalog {
        "home-view"
    } else {
        "home-view hidden"
    };
    let player_class = if view() == View::Player {
        "player-view"
    } else {
        "player-view hidden"
    };

    rsx! {
        div { class: "app-container",
            SearchHeader {}
            main { class: "app-main",
                section { id: "home-view", class: "{home_class}", HomeView {} }
                section { id: "player-view", class: "{player_class}",
                    div { class: "player-column",
                        PlayerSurface {}
                        VideoDetails {}
                    }
                    PlaylistSidebar {}
                }
            }
        }
    }
}
