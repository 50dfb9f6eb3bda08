//! Boundary between the player core and whatever actually decodes video.

use crate::catalog::CatalogEntry;
use crate::error::PlayerResult;

/// Playback properties applied to a freshly attached element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaInit {
    pub volume: f64,
    pub muted: bool,
    pub playback_rate: f64,
}

/// A single attached media element.
///
/// Implementations never panic on a detached element; calls after `detach` are ignored.
pub trait MediaElement {
    /// Requests playback. A synchronous refusal is returned as `PlaybackRejected`;
    /// asynchronous refusals arrive later as [`MediaEvent::PlayRejected`].
    fn play(&mut self) -> PlayerResult<()>;
    fn pause(&mut self);
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64);
    /// `None` until metadata has loaded.
    fn duration(&self) -> Option<f64>;
    fn set_volume(&mut self, volume: f64);
    fn set_muted(&mut self, muted: bool);
    fn set_playback_rate(&mut self, rate: f64);
    /// Returns `false` when the element has no caption track to toggle.
    fn set_captions(&mut self, showing: bool) -> bool;
    fn detach(&mut self);
}

/// Creates media elements for catalog entries.
pub trait MediaHost {
    type Element: MediaElement;

    /// `attachment` identifies this element among every element the player
    /// has attached; the element tags each notice it raises with it.
    fn attach(
        &mut self,
        entry: &CatalogEntry,
        attachment: u64,
        init: MediaInit,
    ) -> Option<Self::Element>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    TimeUpdate { position: f64, duration: Option<f64> },
    MetadataLoaded { duration: Option<f64> },
    Ended,
    PlayRejected,
    SurfaceClicked,
}

/// A media event tagged with the entry and the attachment it was emitted
/// for, so stale callbacks from a replaced element can be recognised and
/// dropped even when the same entry was attached again.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaNotice {
    pub entry_id: String,
    pub attachment: u64,
    pub event: MediaEvent,
}

impl MediaNotice {
    pub fn new(entry_id: impl Into<String>, attachment: u64, event: MediaEvent) -> Self {
        Self {
            entry_id: entry_id.into(),
            attachment,
            event,
        }
    }
}

/// Host for targets without a DOM. It never attaches anything, so every
/// element-dependent operation degrades to a no-op.
#[derive(Debug, Default)]
pub struct HeadlessHost;

#[derive(Debug)]
pub enum NoElement {}

impl MediaElement for NoElement {
    fn play(&mut self) -> PlayerResult<()> {
        match *self {}
    }
    fn pause(&mut self) {
        match *self {}
    }
    fn current_time(&self) -> f64 {
        match *self {}
    }
    fn set_current_time(&mut self, _seconds: f64) {
        match *self {}
    }
    fn duration(&self) -> Option<f64> {
        match *self {}
    }
    fn set_volume(&mut self, _volume: f64) {
        match *self {}
    }
    fn set_muted(&mut self, _muted: bool) {
        match *self {}
    }
    fn set_playback_rate(&mut self, _rate: f64) {
        match *self {}
    }
    fn set_captions(&mut self, _showing: bool) -> bool {
        match *self {}
    }
    fn detach(&mut self) {
        match *self {}
    }
}

impl MediaHost for HeadlessHost {
    type Element = NoElement;

    fn attach(
        &mut self,
        entry: &CatalogEntry,
        _attachment: u64,
        _init: MediaInit,
    ) -> Option<NoElement> {
        tracing::debug!(entry = %entry.id, "no media backend on this target");
        None
    }
}
