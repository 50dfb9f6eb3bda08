//! Player state machine: the single owner of playback, navigation and
//! overlay state. UI components only read projections of it and send it
//! [`Command`]s.

mod commands;
mod media;
mod navigation;
mod overlay;
mod progress;
mod projection;
mod session;
mod social;
#[cfg(test)]
mod testing;

pub use commands::*;
pub use media::*;
pub use navigation::*;
pub use overlay::*;
pub use progress::*;
pub use projection::*;
pub use session::*;
pub use social::*;

use crate::catalog::{Catalog, CatalogEntry};
use crate::settings::PlayerSettings;

pub struct Player<M: MediaHost, H: HistoryBackend> {
    catalog: Catalog,
    settings: PlayerSettings,
    session: PlaybackSession,
    navigation: NavigationState,
    progress: ProgressTracker,
    overlay: OverlayState,
    social: SocialBook,
    search_query: String,
    host: M,
    media: Option<M::Element>,
    /// Bumped on every activation; notices carrying an older value are stale.
    attachment: u64,
    history: H,
    autoplay_pending: bool,
}

impl<M: MediaHost, H: HistoryBackend> Player<M, H> {
    pub fn new(catalog: Catalog, settings: PlayerSettings, host: M, history: H) -> Self {
        Self {
            session: PlaybackSession::new(&settings),
            social: SocialBook::new(settings.social_scope, settings.default_star_count),
            navigation: NavigationState::default(),
            progress: ProgressTracker::default(),
            overlay: OverlayState::default(),
            search_query: String::new(),
            media: None,
            attachment: 0,
            autoplay_pending: false,
            catalog,
            settings,
            host,
            history,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> &PlayerSettings {
        &self.settings
    }

    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    pub fn view(&self) -> View {
        self.navigation.view
    }

    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    pub fn overlay(&self) -> &OverlayState {
        &self.overlay
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn active_entry(&self) -> Option<&CatalogEntry> {
        self.session
            .active_entry_id
            .as_deref()
            .and_then(|id| self.catalog.get(id))
    }

    pub fn is_attached(&self) -> bool {
        self.media.is_some()
    }

    pub fn host_mut(&mut self) -> &mut M {
        &mut self.host
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }
}
