use tracing::{debug, info, warn};

use super::media::{MediaElement, MediaEvent, MediaHost, MediaInit, MediaNotice};
use super::navigation::{deep_link_id, HistoryBackend, HistoryState, View};
use super::progress::TrackBounds;
use super::social::SocialState;
use super::Player;
use crate::error::{PlayerError, PlayerResult};
use crate::settings::PlayerSettings;

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSession {
    pub active_entry_id: Option<String>,
    pub is_playing: bool,
    pub volume: f64,
    pub playback_rate: f64,
    pub muted: bool,
    /// Advisory only; the sources are single-bitrate files.
    pub quality: String,
    pub captions_enabled: bool,
    pub is_scrubbing: bool,
}

impl PlaybackSession {
    pub fn new(settings: &PlayerSettings) -> Self {
        Self {
            active_entry_id: None,
            is_playing: false,
            volume: settings.initial_volume,
            playback_rate: 1.0,
            muted: false,
            quality: settings.default_quality.clone(),
            captions_enabled: false,
            is_scrubbing: false,
        }
    }

    fn media_init(&self) -> MediaInit {
        MediaInit {
            volume: self.volume,
            muted: self.muted,
            playback_rate: self.playback_rate,
        }
    }
}

impl<M: MediaHost, H: HistoryBackend> Player<M, H> {
    /// Resolves the initial view from the page's query string. A resolvable
    /// deep link opens the player without pushing history; the current slot
    /// is stamped so back/forward can return to it.
    pub fn boot(&mut self, query: &str) -> View {
        if let Some(id) = deep_link_id(query) {
            match self.activate(&id, false) {
                Ok(()) => {
                    self.history.replace(&self.navigation.history_state());
                    return View::Player;
                }
                Err(err) => warn!("ignoring deep link: {err}"),
            }
        }
        self.history.replace(&self.navigation.history_state());
        View::Catalog
    }

    /// Replays a history slot after browser back/forward. Never writes history.
    pub fn restore(&mut self, state: Option<HistoryState>) {
        let target = state.and_then(|state| state.v);
        debug!(?target, "restoring history state");
        match target {
            Some(id) if self.session.active_entry_id.as_deref() == Some(id.as_str()) => {}
            Some(id) => {
                if let Err(err) = self.activate(&id, false) {
                    warn!("history points at a missing entry: {err}");
                    self.deactivate(false);
                }
            }
            None => self.deactivate(false),
        }
    }

    pub fn activate(&mut self, entry_id: &str, record_history: bool) -> PlayerResult<()> {
        let entry = self
            .catalog
            .get(entry_id)
            .cloned()
            .ok_or_else(|| PlayerError::NotFound(entry_id.to_string()))?;

        let reselected = self.session.active_entry_id.as_deref() == Some(entry.id.as_str());
        self.teardown_media();
        if self.settings.reset_on_switch {
            self.session.captions_enabled = false;
            self.session.playback_rate = 1.0;
        }
        self.session.is_playing = false;
        self.session.is_scrubbing = false;
        self.progress.reset();
        self.overlay.close_settings();

        self.attachment = self.attachment.wrapping_add(1);
        self.media = self
            .host
            .attach(&entry, self.attachment, self.session.media_init());
        if self.session.captions_enabled {
            if let Some(media) = self.media.as_mut() {
                media.set_captions(true);
            }
        }
        self.session.active_entry_id = Some(entry.id.clone());
        self.autoplay_pending = true;
        self.navigation.show_player(&entry.id);
        // Restarting the active entry stays in its slot so one Back still leaves it.
        if record_history {
            let state = self.navigation.history_state();
            if reselected {
                self.history.replace(&state);
            } else {
                self.history.push(&state);
            }
        }
        info!(entry = %entry.id, title = %entry.title, "activated");
        Ok(())
    }

    pub fn deactivate(&mut self, record_history: bool) {
        let was_in_player = self.navigation.view == View::Player;
        self.teardown_media();
        self.session.active_entry_id = None;
        self.session.is_playing = false;
        self.session.is_scrubbing = false;
        self.autoplay_pending = false;
        self.progress.reset();
        self.overlay.close_settings();
        self.navigation.show_catalog();
        if record_history && was_in_player {
            self.history.push(&self.navigation.history_state());
        }
        if was_in_player {
            info!("returned to catalog");
        }
    }

    /// Opens an entry picked from the grid, playlist or search results,
    /// falling back to the catalog when it no longer exists.
    pub fn select(&mut self, entry_id: &str) {
        if let Err(err) = self.activate(entry_id, true) {
            warn!("{err}");
            self.deactivate(true);
        }
    }

    pub fn toggle_playback(&mut self) -> PlayerResult<()> {
        if self.session.active_entry_id.is_none() {
            return Err(PlayerError::NoActiveSession);
        }
        if self.session.is_playing {
            let media = self.media.as_mut().ok_or(PlayerError::NoMediaElement)?;
            media.pause();
            self.session.is_playing = false;
            Ok(())
        } else {
            self.autoplay_pending = false;
            self.start_playback()
        }
    }

    fn start_playback(&mut self) -> PlayerResult<()> {
        let media = self.media.as_mut().ok_or(PlayerError::NoMediaElement)?;
        self.session.is_playing = true;
        if let Err(err) = media.play() {
            self.session.is_playing = false;
            warn!("{err}");
            return Err(err);
        }
        Ok(())
    }

    /// Moves to the following entry, wrapping from the last back to the first.
    pub fn advance_to_next(&mut self) -> PlayerResult<()> {
        let active = self
            .session
            .active_entry_id
            .as_deref()
            .ok_or(PlayerError::NoActiveSession)?;
        let current = self
            .catalog
            .position(active)
            .ok_or_else(|| PlayerError::NotFound(active.to_string()))?;
        let next = (current + 1) % self.catalog.entries().len();
        let next_id = match self.catalog.at(next) {
            Some(entry) => entry.id.clone(),
            None => return Err(PlayerError::NoActiveSession),
        };
        debug!(from = current, to = next, "advancing playlist");
        self.activate(&next_id, true)
    }

    pub fn seek_relative(&mut self, delta_secs: f64) -> PlayerResult<()> {
        if !delta_secs.is_finite() {
            return Err(PlayerError::InvalidRange {
                what: "seek offset",
                value: delta_secs,
            });
        }
        let known = self.progress.duration();
        let media = self.media.as_mut().ok_or(PlayerError::NoMediaElement)?;
        let duration = media
            .duration()
            .filter(|d| d.is_finite() && *d > 0.0)
            .or(known)
            .ok_or(PlayerError::MissingDuration)?;
        let target = (media.current_time() + delta_secs).clamp(0.0, duration);
        media.set_current_time(target);
        self.progress.set_position(target);
        Ok(())
    }

    pub fn set_volume(&mut self, volume: f64) -> PlayerResult<()> {
        if !volume.is_finite() {
            return Err(PlayerError::InvalidRange {
                what: "volume",
                value: volume,
            });
        }
        let volume = volume.clamp(0.0, 1.0);
        self.session.volume = volume;
        if let Some(media) = self.media.as_mut() {
            media.set_volume(volume);
        }
        Ok(())
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.session.muted = muted;
        if let Some(media) = self.media.as_mut() {
            media.set_muted(muted);
        }
    }

    pub fn toggle_mute(&mut self) {
        self.set_muted(!self.session.muted);
    }

    pub fn set_playback_rate(&mut self, rate: f64) -> PlayerResult<()> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(PlayerError::InvalidRange {
                what: "playback rate",
                value: rate,
            });
        }
        self.session.playback_rate = rate;
        if let Some(media) = self.media.as_mut() {
            media.set_playback_rate(rate);
        }
        Ok(())
    }

    pub fn toggle_captions(&mut self) {
        let enabled = !self.session.captions_enabled;
        self.session.captions_enabled = enabled;
        let has_track = self
            .media
            .as_mut()
            .map(|media| media.set_captions(enabled))
            .unwrap_or(false);
        if enabled && !has_track {
            info!("captions enabled but no caption track is loaded");
        }
    }

    pub fn set_quality(&mut self, quality: &str) {
        self.session.quality = quality.to_string();
        info!(%quality, "quality preference set");
    }

    /// Pointer pressed on the progress track.
    pub fn begin_scrub(&mut self, bounds: TrackBounds, client_x: f64) {
        if self.media.is_none() {
            return;
        }
        self.session.is_scrubbing = true;
        self.progress.scrub_at(bounds.fraction_at(client_x));
    }

    /// Pointer moved while pressed. Only the visual head moves until release.
    pub fn scrub_to(&mut self, bounds: TrackBounds, client_x: f64) {
        if self.session.is_scrubbing {
            self.progress.scrub_at(bounds.fraction_at(client_x));
        }
    }

    /// Pointer released: commits the gesture to the media element.
    pub fn end_scrub(&mut self) -> PlayerResult<()> {
        if !self.session.is_scrubbing {
            return Ok(());
        }
        self.session.is_scrubbing = false;
        let Some(fraction) = self.progress.finish_scrub() else {
            return Ok(());
        };
        let known = self.progress.duration();
        let media = self.media.as_mut().ok_or(PlayerError::NoMediaElement)?;
        let duration = media
            .duration()
            .filter(|d| d.is_finite() && *d > 0.0)
            .or(known)
            .ok_or(PlayerError::MissingDuration)?;
        let target = fraction * duration;
        media.set_current_time(target);
        self.progress.set_duration(Some(duration));
        self.progress.set_position(target);
        Ok(())
    }

    pub fn hover_at(&mut self, bounds: TrackBounds, client_x: f64) {
        self.progress.hover(bounds.fraction_at(client_x));
    }

    pub fn clear_hover(&mut self) {
        self.progress.clear_hover();
    }

    /// Applies a media notification. Notices for anything but the active
    /// entry are stale and dropped; returns whether the notice was applied.
    pub fn handle_media_event(&mut self, notice: MediaNotice) -> bool {
        if self.session.active_entry_id.as_deref() != Some(notice.entry_id.as_str())
            || notice.attachment != self.attachment
        {
            debug!(
                entry = %notice.entry_id,
                attachment = notice.attachment,
                event = ?notice.event,
                "dropping stale media notice"
            );
            return false;
        }

        match notice.event {
            MediaEvent::TimeUpdate { position, duration } => {
                if self.session.is_scrubbing {
                    return false;
                }
                if self.progress.observe(position, duration).is_err() {
                    return false;
                }
            }
            MediaEvent::MetadataLoaded { duration } => {
                self.progress.set_duration(duration);
                if self.autoplay_pending {
                    self.autoplay_pending = false;
                    let _ = self.start_playback();
                }
            }
            MediaEvent::Ended => {
                self.session.is_playing = false;
                if self.settings.auto_advance {
                    if let Err(err) = self.advance_to_next() {
                        warn!("auto-advance failed: {err}");
                    }
                }
            }
            MediaEvent::PlayRejected => {
                self.session.is_playing = false;
                warn!(entry = %notice.entry_id, "{}", PlayerError::PlaybackRejected);
            }
            MediaEvent::SurfaceClicked => {
                if let Err(err) = self.toggle_playback() {
                    debug!("surface click ignored: {err}");
                }
            }
        }
        true
    }

    pub fn social_state(&self) -> Option<SocialState> {
        let entry = self.active_entry()?;
        Some(self.social.state(&entry.id, entry.star_seed))
    }

    pub fn toggle_star(&mut self) -> Option<SocialState> {
        let (id, seed) = self.active_entry().map(|e| (e.id.clone(), e.star_seed))?;
        Some(self.social.update(&id, seed, SocialState::toggle_star))
    }

    pub fn toggle_follow(&mut self) -> Option<SocialState> {
        let (id, seed) = self.active_entry().map(|e| (e.id.clone(), e.star_seed))?;
        Some(self.social.update(&id, seed, SocialState::toggle_follow))
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.search_query = query.to_string();
        let has_hits = !self.catalog.search(query).is_empty();
        self.overlay.set_search_open(has_hits);
    }

    fn teardown_media(&mut self) {
        if let Some(mut media) = self.media.take() {
            media.pause();
            media.detach();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{fake_player, fake_player_with, FakeHost};
    use super::super::*;
    use crate::error::PlayerError;
    use crate::settings::PlayerSettings;

    fn loaded(player: &mut TestPlayer, id: &str) {
        player.handle_media_event(MediaNotice::new(
            id,
            player.attachment,
            MediaEvent::MetadataLoaded {
                duration: Some(100.0),
            },
        ));
    }

    type TestPlayer = Player<FakeHost, MemoryHistory>;

    #[test]
    fn activate_unknown_entry_is_not_found() {
        let (mut player, log) = fake_player(3);
        assert_eq!(
            player.activate("missing", true),
            Err(PlayerError::NotFound("missing".to_string()))
        );
        assert_eq!(player.view(), View::Catalog);
        assert_eq!(log.borrow().attach_count, 0);
        assert_eq!(player.history().push_count(), 0);
    }

    #[test]
    fn at_most_one_element_is_attached_and_playing() {
        let (mut player, log) = fake_player(3);
        for id in ["v0", "v1", "v1", "v2", "v0"] {
            player.activate(id, true).unwrap();
            loaded(&mut player, id);
            let log = log.borrow();
            assert_eq!(log.live, vec![id.to_string()]);
            assert_eq!(log.playing, vec![id.to_string()]);
        }
        player.deactivate(true);
        assert!(log.borrow().live.is_empty());
        assert!(log.borrow().playing.is_empty());
        assert_eq!(player.view(), View::Catalog);
        assert_eq!(player.session().active_entry_id, None);
    }

    #[test]
    fn back_and_forward_replay_navigation() {
        let (mut player, _log) = fake_player(3);
        player.boot("");
        player.activate("v1", true).unwrap();

        let back = player.history_mut().back();
        player.restore(back);
        assert_eq!(player.view(), View::Catalog);
        assert_eq!(player.session().active_entry_id, None);

        let forward = player.history_mut().forward();
        player.restore(forward);
        assert_eq!(player.view(), View::Player);
        assert_eq!(player.session().active_entry_id.as_deref(), Some("v1"));
        assert_eq!(player.history().push_count(), 1);
    }

    #[test]
    fn restore_to_unknown_entry_falls_back_to_catalog() {
        let (mut player, _log) = fake_player(3);
        player.activate("v0", true).unwrap();
        player.restore(Some(HistoryState::player("gone")));
        assert_eq!(player.view(), View::Catalog);
        assert_eq!(player.history().push_count(), 1);
    }

    #[test]
    fn double_toggle_restores_playing_state() {
        let (mut player, log) = fake_player(3);
        player.activate("v0", true).unwrap();
        loaded(&mut player, "v0");
        assert!(player.session().is_playing);
        player.toggle_playback().unwrap();
        player.toggle_playback().unwrap();
        assert!(player.session().is_playing);
        assert_eq!(log.borrow().playing, vec!["v0".to_string()]);

        player.toggle_playback().unwrap();
        assert!(!player.session().is_playing);
        player.toggle_playback().unwrap();
        player.toggle_playback().unwrap();
        assert!(!player.session().is_playing);
    }

    #[test]
    fn toggle_without_session_is_rejected_quietly() {
        let (mut player, _log) = fake_player(3);
        assert_eq!(player.toggle_playback(), Err(PlayerError::NoActiveSession));
        assert!(!player.session().is_playing);
    }

    #[test]
    fn playback_starts_once_metadata_is_loaded() {
        let (mut player, _log) = fake_player(3);
        player.activate("v0", true).unwrap();
        assert!(!player.session().is_playing);
        loaded(&mut player, "v0");
        assert!(player.session().is_playing);
        assert_eq!(player.progress().duration(), Some(100.0));
    }

    #[test]
    fn rejected_play_reverts_to_paused() {
        let (mut player, _log) = fake_player_with(3, PlayerSettings::default(), true);
        player.activate("v0", true).unwrap();
        loaded(&mut player, "v0");
        assert!(!player.session().is_playing);
        assert_eq!(player.toggle_playback(), Err(PlayerError::PlaybackRejected));
        assert!(!player.session().is_playing);
    }

    #[test]
    fn late_rejection_only_affects_its_own_entry() {
        let (mut player, _log) = fake_player(3);
        player.activate("v0", true).unwrap();
        loaded(&mut player, "v0");
        player.activate("v1", true).unwrap();
        loaded(&mut player, "v1");
        let current = player.attachment;
        assert!(!player.handle_media_event(MediaNotice::new("v0", current, MediaEvent::PlayRejected)));
        assert!(player.session().is_playing);
        assert!(player.handle_media_event(MediaNotice::new("v1", current, MediaEvent::PlayRejected)));
        assert!(!player.session().is_playing);
    }

    #[test]
    fn stale_time_updates_are_dropped() {
        let (mut player, _log) = fake_player(3);
        player.activate("v0", true).unwrap();
        player.activate("v1", true).unwrap();
        let applied = player.handle_media_event(MediaNotice::new(
            "v0",
            player.attachment,
            MediaEvent::TimeUpdate {
                position: 50.0,
                duration: Some(100.0),
            },
        ));
        assert!(!applied);
        assert_eq!(player.progress().position(), 0.0);
    }

    #[test]
    fn notices_from_a_replaced_element_of_the_same_entry_are_dropped() {
        let (mut player, _log) = fake_player(3);
        player.activate("v0", true).unwrap();
        loaded(&mut player, "v0");
        let previous = player.attachment;
        player.select("v0");

        let late_tick = MediaNotice::new(
            "v0",
            previous,
            MediaEvent::TimeUpdate {
                position: 90.0,
                duration: Some(100.0),
            },
        );
        assert!(!player.handle_media_event(late_tick));
        assert_eq!(player.progress().position(), 0.0);

        loaded(&mut player, "v0");
        assert!(!player.handle_media_event(MediaNotice::new("v0", previous, MediaEvent::PlayRejected)));
        assert!(player.session().is_playing);
    }

    #[test]
    fn reselecting_the_active_entry_keeps_one_history_slot() {
        let (mut player, log) = fake_player(3);
        player.boot("");
        player.select("v0");
        player.select("v0");
        assert_eq!(player.history().push_count(), 1);
        assert_eq!(player.history().len(), 2);
        assert_eq!(log.borrow().attach_count, 2);

        let back = player.history_mut().back();
        player.restore(back);
        assert_eq!(player.view(), View::Catalog);
        assert_eq!(player.session().active_entry_id, None);
    }

    #[test]
    fn single_entry_catalog_restarts_in_place() {
        let (mut player, log) = fake_player(1);
        player.activate("v0", true).unwrap();
        let first = player.attachment;
        player.handle_media_event(MediaNotice::new("v0", first, MediaEvent::Ended));
        assert_eq!(player.session().active_entry_id.as_deref(), Some("v0"));
        assert_ne!(player.attachment, first);
        assert_eq!(player.history().push_count(), 1);
        assert_eq!(log.borrow().live, vec!["v0".to_string()]);
    }

    #[test]
    fn ended_wraps_around_to_first_entry() {
        let (mut player, _log) = fake_player(3);
        player.activate("v2", true).unwrap();
        player.handle_media_event(MediaNotice::new("v2", player.attachment, MediaEvent::Ended));
        assert_eq!(player.session().active_entry_id.as_deref(), Some("v0"));
        assert_eq!(player.history().current(), &HistoryState::player("v0"));
    }

    #[test]
    fn advance_moves_forward_one_entry() {
        let (mut player, _log) = fake_player(3);
        player.activate("v0", true).unwrap();
        player.advance_to_next().unwrap();
        assert_eq!(player.session().active_entry_id.as_deref(), Some("v1"));
        assert_eq!(player.history().push_count(), 2);
    }

    #[test]
    fn ended_without_auto_advance_just_stops() {
        let settings = PlayerSettings {
            auto_advance: false,
            ..PlayerSettings::default()
        };
        let (mut player, _log) = fake_player_with(3, settings, false);
        player.activate("v2", true).unwrap();
        loaded(&mut player, "v2");
        player.handle_media_event(MediaNotice::new("v2", player.attachment, MediaEvent::Ended));
        assert_eq!(player.session().active_entry_id.as_deref(), Some("v2"));
        assert!(!player.session().is_playing);
    }

    #[test]
    fn deep_link_opens_player_without_pushing() {
        let (mut player, _log) = fake_player(3);
        assert_eq!(player.boot("?v=v2"), View::Player);
        assert_eq!(player.session().active_entry_id.as_deref(), Some("v2"));
        assert_eq!(player.history().push_count(), 0);
        assert_eq!(player.history().current(), &HistoryState::player("v2"));
    }

    #[test]
    fn unknown_deep_link_stays_on_catalog() {
        let (mut player, log) = fake_player(3);
        assert_eq!(player.boot("?v=nope"), View::Catalog);
        assert_eq!(player.session().active_entry_id, None);
        assert_eq!(log.borrow().attach_count, 0);
        assert_eq!(player.history().push_count(), 0);
    }

    #[test]
    fn scrub_before_track_start_seeks_to_zero() {
        let (mut player, log) = fake_player(3);
        player.activate("v0", true).unwrap();
        loaded(&mut player, "v0");
        let bounds = TrackBounds::new(100.0, 400.0);
        player.begin_scrub(bounds, 20.0);
        player.end_scrub().unwrap();
        assert_eq!(log.borrow().seeks, vec![0.0]);
        assert_eq!(player.progress().position(), 0.0);
    }

    #[test]
    fn scrub_past_track_end_seeks_to_duration() {
        let (mut player, log) = fake_player(3);
        player.activate("v0", true).unwrap();
        loaded(&mut player, "v0");
        let bounds = TrackBounds::new(100.0, 400.0);
        player.begin_scrub(bounds, 150.0);
        player.scrub_to(bounds, 9000.0);
        player.end_scrub().unwrap();
        assert_eq!(log.borrow().seeks, vec![100.0]);
    }

    #[test]
    fn scrubbing_suspends_position_sync() {
        let (mut player, _log) = fake_player(3);
        player.activate("v0", true).unwrap();
        loaded(&mut player, "v0");
        player.begin_scrub(TrackBounds::new(0.0, 100.0), 80.0);
        let applied = player.handle_media_event(MediaNotice::new(
            "v0",
            player.attachment,
            MediaEvent::TimeUpdate {
                position: 10.0,
                duration: Some(100.0),
            },
        ));
        assert!(!applied);
        assert_eq!(player.progress().view().fill_ratio, 0.8);
        player.end_scrub().unwrap();
        assert!(!player.session().is_scrubbing);
        assert_eq!(player.progress().position(), 80.0);
    }

    #[test]
    fn seek_relative_is_clamped() {
        let (mut player, log) = fake_player(3);
        player.activate("v0", true).unwrap();
        loaded(&mut player, "v0");
        player.seek_relative(-30.0).unwrap();
        player.seek_relative(250.0).unwrap();
        assert_eq!(log.borrow().seeks, vec![0.0, 100.0]);
    }

    #[test]
    fn seek_without_duration_is_skipped() {
        let (mut player, log) = fake_player(3);
        player.activate("v0", true).unwrap();
        assert_eq!(player.seek_relative(5.0), Err(PlayerError::MissingDuration));
        assert!(log.borrow().seeks.is_empty());
    }

    #[test]
    fn volume_and_rate_are_validated() {
        let (mut player, log) = fake_player(3);
        player.activate("v0", true).unwrap();
        player.set_volume(1.7).unwrap();
        assert_eq!(player.session().volume, 1.0);
        assert!(player.set_volume(f64::NAN).is_err());
        assert!(player.set_playback_rate(0.0).is_err());
        assert!(player.set_playback_rate(-1.0).is_err());
        player.set_playback_rate(1.5).unwrap();
        let log = log.borrow();
        assert_eq!(log.volumes, vec![1.0]);
        assert_eq!(log.rates, vec![1.5]);
    }

    #[test]
    fn switching_entries_resets_captions_and_speed() {
        let (mut player, _log) = fake_player(3);
        player.activate("v0", true).unwrap();
        player.toggle_captions();
        player.set_playback_rate(2.0).unwrap();
        player.set_volume(0.3).unwrap();
        player.activate("v1", true).unwrap();
        assert!(!player.session().captions_enabled);
        assert_eq!(player.session().playback_rate, 1.0);
        assert_eq!(player.session().volume, 0.3);
    }

    #[test]
    fn speed_and_captions_can_survive_a_switch() {
        let settings = PlayerSettings {
            reset_on_switch: false,
            ..PlayerSettings::default()
        };
        let (mut player, log) = fake_player_with(3, settings, false);
        player.activate("v0", true).unwrap();
        player.toggle_captions();
        player.set_playback_rate(2.0).unwrap();
        player.activate("v1", true).unwrap();
        assert!(player.session().captions_enabled);
        assert_eq!(player.session().playback_rate, 2.0);
        assert_eq!(log.borrow().last_init.map(|init| init.playback_rate), Some(2.0));
    }

    #[test]
    fn controls_tolerate_missing_element() {
        let (mut player, _log) = fake_player(3);
        player.toggle_mute();
        player.toggle_captions();
        player.set_volume(0.5).unwrap();
        assert_eq!(player.seek_relative(3.0), Err(PlayerError::NoMediaElement));
        assert_eq!(player.end_scrub(), Ok(()));
        assert!(player.session().muted);
        assert_eq!(player.session().volume, 0.5);
    }

    #[test]
    fn select_missing_entry_returns_home() {
        let (mut player, _log) = fake_player(3);
        player.select("v1");
        player.select("deleted");
        assert_eq!(player.view(), View::Catalog);
        assert_eq!(player.history().current(), &HistoryState::catalog());
    }

    #[test]
    fn going_home_twice_records_one_slot() {
        let (mut player, _log) = fake_player(3);
        player.activate("v0", true).unwrap();
        player.deactivate(true);
        player.deactivate(true);
        assert_eq!(player.history().push_count(), 2);
    }

    #[test]
    fn surface_click_toggles_playback() {
        let (mut player, _log) = fake_player(3);
        player.activate("v0", true).unwrap();
        loaded(&mut player, "v0");
        player.handle_media_event(MediaNotice::new("v0", player.attachment, MediaEvent::SurfaceClicked));
        assert!(!player.session().is_playing);
    }

    #[test]
    fn star_and_follow_need_an_active_entry() {
        let (mut player, _log) = fake_player(3);
        assert_eq!(player.toggle_star(), None);
        player.activate("v0", true).unwrap();
        let state = player.toggle_star().unwrap();
        assert!(state.starred);
        assert_eq!(state.star_count, 1_241);
        assert!(player.toggle_follow().unwrap().following);
    }

    #[test]
    fn search_query_opens_dropdown_only_with_hits() {
        let (mut player, _log) = fake_player(3);
        player.set_search_query("video 1");
        assert!(player.overlay().search_open);
        player.set_search_query("zzz");
        assert!(!player.overlay().search_open);
        player.set_search_query("");
        assert!(!player.overlay().search_open);
    }
}
