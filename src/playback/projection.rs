//! Pure projections of player state onto what the page draws.

use super::media::MediaHost;
use super::navigation::HistoryBackend;
use super::overlay::SettingsPanel;
use super::social::format_count;
use super::Player;
use crate::catalog::{Catalog, CatalogEntry};

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub meta: String,
    pub duration_label: String,
    pub preview_src: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistRow {
    pub id: String,
    pub title: String,
    pub views_label: String,
    pub thumb_src: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceView {
    pub wrapper_class: &'static str,
    pub play_icon: &'static str,
    pub mute_icon: &'static str,
    pub volume_percent: f64,
    pub captions_active: bool,
    pub speed_label: String,
    pub quality_label: String,
    pub settings_open: bool,
    pub settings_panel: SettingsPanel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailsView {
    pub title: String,
    pub channel: String,
    pub subscribers_label: String,
    pub published_label: String,
    pub starred: bool,
    pub star_label: &'static str,
    pub star_count_label: String,
    pub following: bool,
    pub follow_label: &'static str,
}

pub fn speed_label(rate: f64) -> String {
    if rate == 1.0 {
        "Normal".to_string()
    } else {
        format!("{rate}x")
    }
}

fn card_view(entry: &CatalogEntry) -> CardView {
    CardView {
        id: entry.id.clone(),
        title: entry.title.clone(),
        meta: format!(
            "{} • {} • {}",
            entry.channel, entry.view_count_label, entry.age_label
        ),
        duration_label: entry.duration_label.clone(),
        preview_src: format!("{}#t=0.1", entry.source_uri),
    }
}

pub fn catalog_cards(catalog: &Catalog) -> Vec<CardView> {
    catalog.entries().iter().map(card_view).collect()
}

/// One row per entry; exactly the active one (if any) is marked.
pub fn playlist_rows(catalog: &Catalog, active: Option<&str>) -> Vec<PlaylistRow> {
    catalog
        .entries()
        .iter()
        .map(|entry| PlaylistRow {
            id: entry.id.clone(),
            title: entry.title.clone(),
            views_label: entry.view_count_label.clone(),
            thumb_src: format!("{}#t=1.0", entry.source_uri),
            active: active == Some(entry.id.as_str()),
        })
        .collect()
}

impl<M: MediaHost, H: HistoryBackend> Player<M, H> {
    pub fn playlist_rows(&self) -> Vec<PlaylistRow> {
        playlist_rows(&self.catalog, self.session.active_entry_id.as_deref())
    }

    pub fn search_hits(&self) -> Vec<SearchHit> {
        self.catalog
            .search(&self.search_query)
            .into_iter()
            .map(|entry| SearchHit {
                id: entry.id.clone(),
                title: entry.title.clone(),
            })
            .collect()
    }

    pub fn surface_view(&self) -> SurfaceView {
        let playing = self.session.is_playing;
        SurfaceView {
            wrapper_class: if playing { "playing" } else { "paused" },
            play_icon: if playing { "pause" } else { "play" },
            mute_icon: if self.session.muted { "volume-off" } else { "volume" },
            volume_percent: (self.session.volume * 100.0).round(),
            captions_active: self.session.captions_enabled,
            speed_label: speed_label(self.session.playback_rate),
            quality_label: self.session.quality.clone(),
            settings_open: self.overlay.settings_open,
            settings_panel: self.overlay.settings_panel,
        }
    }

    pub fn details_view(&self) -> Option<DetailsView> {
        let entry = self.active_entry()?;
        let social = self.social_state()?;
        Some(DetailsView {
            title: entry.title.clone(),
            channel: entry.channel.clone(),
            subscribers_label: format!("{} subscribers", entry.view_count_label),
            published_label: format!("Published {}", entry.age_label),
            starred: social.starred,
            star_label: if social.starred { "Starred" } else { "Star" },
            star_count_label: format_count(social.star_count),
            following: social.following,
            follow_label: if social.following { "Following" } else { "Follow" },
        })
    }
}
