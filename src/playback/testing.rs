//! In-memory media backend for exercising the player without a browser.

use std::cell::RefCell;
use std::rc::Rc;

use super::media::{MediaElement, MediaHost, MediaInit};
use super::navigation::MemoryHistory;
use super::Player;
use crate::catalog::{Catalog, CatalogEntry};
use crate::error::{PlayerError, PlayerResult};
use crate::settings::PlayerSettings;

/// Everything the fake elements were asked to do.
#[derive(Debug, Default)]
pub struct MediaLog {
    pub attach_count: usize,
    /// Ids of elements attached and not yet detached.
    pub live: Vec<String>,
    /// Ids of elements currently playing.
    pub playing: Vec<String>,
    pub seeks: Vec<f64>,
    pub volumes: Vec<f64>,
    pub rates: Vec<f64>,
    pub last_init: Option<MediaInit>,
}

pub type SharedLog = Rc<RefCell<MediaLog>>;

pub struct FakeHost {
    log: SharedLog,
    reject_play: bool,
}

pub struct FakeElement {
    id: String,
    log: SharedLog,
    reject_play: bool,
    current_time: f64,
    detached: bool,
}

impl MediaHost for FakeHost {
    type Element = FakeElement;

    fn attach(
        &mut self,
        entry: &CatalogEntry,
        _attachment: u64,
        init: MediaInit,
    ) -> Option<FakeElement> {
        let mut log = self.log.borrow_mut();
        log.attach_count += 1;
        log.live.push(entry.id.clone());
        log.last_init = Some(init);
        Some(FakeElement {
            id: entry.id.clone(),
            log: self.log.clone(),
            reject_play: self.reject_play,
            current_time: 0.0,
            detached: false,
        })
    }
}

impl MediaElement for FakeElement {
    fn play(&mut self) -> PlayerResult<()> {
        if self.reject_play {
            return Err(PlayerError::PlaybackRejected);
        }
        let mut log = self.log.borrow_mut();
        if !self.detached && !log.playing.contains(&self.id) {
            log.playing.push(self.id.clone());
        }
        Ok(())
    }

    fn pause(&mut self) {
        self.log.borrow_mut().playing.retain(|id| id != &self.id);
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.current_time = seconds;
        self.log.borrow_mut().seeks.push(seconds);
    }

    /// The fake only learns its duration through `MetadataLoaded` notices.
    fn duration(&self) -> Option<f64> {
        None
    }

    fn set_volume(&mut self, volume: f64) {
        self.log.borrow_mut().volumes.push(volume);
    }

    fn set_muted(&mut self, _muted: bool) {}

    fn set_playback_rate(&mut self, rate: f64) {
        self.log.borrow_mut().rates.push(rate);
    }

    fn set_captions(&mut self, _showing: bool) -> bool {
        true
    }

    fn detach(&mut self) {
        self.detached = true;
        let mut log = self.log.borrow_mut();
        log.live.retain(|id| id != &self.id);
        log.playing.retain(|id| id != &self.id);
    }
}

pub fn catalog_of(len: usize) -> Catalog {
    let entries = (0..len)
        .map(|i| CatalogEntry {
            id: format!("v{i}"),
            title: format!("Video {i}"),
            source_uri: format!("https://example.test/v{i}.mp4"),
            duration_label: "1:40".to_string(),
            view_count_label: format!("{i}k views"),
            age_label: "1 day ago".to_string(),
            channel: "GitTube Academy".to_string(),
            star_seed: None,
        })
        .collect();
    Catalog::new(entries).unwrap()
}

pub fn fake_player_with(
    len: usize,
    settings: PlayerSettings,
    reject_play: bool,
) -> (Player<FakeHost, MemoryHistory>, SharedLog) {
    let log = SharedLog::default();
    let host = FakeHost {
        log: log.clone(),
        reject_play,
    };
    let player = Player::new(catalog_of(len), settings, host, MemoryHistory::default());
    (player, log)
}

pub fn fake_player(len: usize) -> (Player<FakeHost, MemoryHistory>, SharedLog) {
    fake_player_with(len, PlayerSettings::default(), false)
}
