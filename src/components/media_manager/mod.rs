//! Media Manager - binds the player core to the browser: the `<video>`
//! backend, the History API backend and page-level listeners.

use dioxus::prelude::*;

use crate::catalog::Catalog;
use crate::playback::{Command, Player};
#[cfg(not(target_arch = "wasm32"))]
use crate::playback::{HeadlessHost, MemoryHistory};
use crate::settings::PlayerSettings;

mod browser;
#[cfg(target_arch = "wasm32")]
mod web_video;

pub use browser::*;
#[cfg(target_arch = "wasm32")]
pub use web_video::*;

/// Element ids the core's browser backends look up.
pub const PLAYER_WRAPPER_ID: &str = "player-wrapper";
pub const VIDEO_SLOT_ID: &str = "video-slot";
pub const PROGRESS_TRACK_ID: &str = "progress-bar";
pub const SEARCH_WRAPPER_ID: &str = "search-wrapper";
pub const SEARCH_INPUT_ID: &str = "search-input";
pub const SETTINGS_MENU_ID: &str = "settings-menu";
pub const SETTINGS_TOGGLE_ID: &str = "settings-btn";

#[cfg(target_arch = "wasm32")]
pub type AppPlayer = Player<WebMediaHost, BrowserHistory>;
#[cfg(not(target_arch = "wasm32"))]
pub type AppPlayer = Player<HeadlessHost, MemoryHistory>;

/// Context handle to the page's single player.
#[derive(Clone, Copy)]
pub struct PlayerSignal(pub Signal<AppPlayer>);

#[cfg(target_arch = "wasm32")]
pub fn build_player(catalog: Catalog, settings: PlayerSettings) -> AppPlayer {
    Player::new(catalog, settings, WebMediaHost::default(), BrowserHistory)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn build_player(catalog: Catalog, settings: PlayerSettings) -> AppPlayer {
    Player::new(catalog, settings, HeadlessHost, MemoryHistory::default())
}

/// Dispatches a command and carries out any browser effect it hands back.
/// Returns whether such an effect was applied.
pub fn send(mut player: Signal<AppPlayer>, command: Command) -> bool {
    let effect = player.write().dispatch(command);
    effect.map(apply_shell_effect).unwrap_or(false)
}
