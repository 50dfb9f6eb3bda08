use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Event, HtmlVideoElement, TextTrackMode};

use super::VIDEO_SLOT_ID;
use crate::catalog::CatalogEntry;
use crate::error::{PlayerError, PlayerResult};
use crate::playback::{MediaElement, MediaEvent, MediaHost, MediaInit, MediaNotice};

/// Receives every notice raised by an attached `<video>`.
pub type NoticeSink = Rc<dyn Fn(MediaNotice)>;

/// Creates one `<video>` per activation inside the player surface.
#[derive(Default)]
pub struct WebMediaHost {
    sink: Option<NoticeSink>,
}

impl WebMediaHost {
    /// Must be connected before the first attach, or elements play without
    /// reporting back.
    pub fn connect(&mut self, sink: NoticeSink) {
        self.sink = Some(sink);
    }
}

pub struct WebVideo {
    entry_id: String,
    attachment: u64,
    element: HtmlVideoElement,
    sink: Option<NoticeSink>,
    listeners: Vec<(&'static str, Closure<dyn FnMut(Event)>)>,
    detached: bool,
}

fn known_duration(element: &HtmlVideoElement) -> Option<f64> {
    let duration = element.duration();
    (duration.is_finite() && duration > 0.0).then_some(duration)
}

impl MediaHost for WebMediaHost {
    type Element = WebVideo;

    fn attach(
        &mut self,
        entry: &CatalogEntry,
        attachment: u64,
        init: MediaInit,
    ) -> Option<WebVideo> {
        let document = window()?.document()?;
        let Some(slot) = document.get_element_by_id(VIDEO_SLOT_ID) else {
            tracing::warn!(entry = %entry.id, "player surface is not mounted yet");
            return None;
        };

        let element: HtmlVideoElement = document.create_element("video").ok()?.dyn_into().ok()?;
        element.set_class_name("video-element");
        element.set_attribute("preload", "metadata").ok()?;
        element.set_attribute("playsinline", "").ok()?;
        element.set_src(&entry.source_uri);
        element.set_volume(init.volume);
        element.set_muted(init.muted);
        element.set_playback_rate(init.playback_rate);

        let track = document.create_element("track").ok()?;
        track.set_attribute("kind", "captions").ok()?;
        track.set_attribute("label", "English").ok()?;
        track.set_attribute("srclang", "en").ok()?;
        element.append_child(&track).ok()?;

        let mut video = WebVideo {
            entry_id: entry.id.clone(),
            attachment,
            element,
            sink: self.sink.clone(),
            listeners: Vec::new(),
            detached: false,
        };
        video.listen("timeupdate", |el| MediaEvent::TimeUpdate {
            position: el.current_time(),
            duration: known_duration(el),
        });
        video.listen("loadedmetadata", |el| MediaEvent::MetadataLoaded {
            duration: known_duration(el),
        });
        video.listen("ended", |_| MediaEvent::Ended);
        video.listen("click", |_| MediaEvent::SurfaceClicked);

        slot.replace_children_with_node_1(&video.element);
        tracing::debug!(entry = %entry.id, attachment, "video element attached");
        Some(video)
    }
}

impl WebVideo {
    fn listen(&mut self, kind: &'static str, map: fn(&HtmlVideoElement) -> MediaEvent) {
        let Some(sink) = self.sink.clone() else {
            return;
        };
        let element = self.element.clone();
        let entry_id = self.entry_id.clone();
        let attachment = self.attachment;
        let callback = Closure::wrap(Box::new(move |_event: Event| {
            sink(MediaNotice::new(entry_id.clone(), attachment, map(&element)));
        }) as Box<dyn FnMut(Event)>);

        if self
            .element
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .is_ok()
        {
            self.listeners.push((kind, callback));
        }
    }
}

impl MediaElement for WebVideo {
    fn play(&mut self) -> PlayerResult<()> {
        if self.detached {
            return Ok(());
        }
        let promise = self
            .element
            .play()
            .map_err(|_| PlayerError::PlaybackRejected)?;
        let sink = self.sink.clone();
        let entry_id = self.entry_id.clone();
        let attachment = self.attachment;
        wasm_bindgen_futures::spawn_local(async move {
            if wasm_bindgen_futures::JsFuture::from(promise).await.is_err() {
                if let Some(sink) = sink {
                    sink(MediaNotice::new(entry_id, attachment, MediaEvent::PlayRejected));
                }
            }
        });
        Ok(())
    }

    fn pause(&mut self) {
        if !self.detached {
            let _ = self.element.pause();
        }
    }

    fn current_time(&self) -> f64 {
        self.element.current_time()
    }

    fn set_current_time(&mut self, seconds: f64) {
        if !self.detached {
            self.element.set_current_time(seconds);
        }
    }

    fn duration(&self) -> Option<f64> {
        known_duration(&self.element)
    }

    fn set_volume(&mut self, volume: f64) {
        self.element.set_volume(volume);
    }

    fn set_muted(&mut self, muted: bool) {
        self.element.set_muted(muted);
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.element.set_playback_rate(rate);
    }

    fn set_captions(&mut self, showing: bool) -> bool {
        let Some(track) = self.element.text_tracks().and_then(|tracks| tracks.get(0)) else {
            return false;
        };
        track.set_mode(if showing {
            TextTrackMode::Showing
        } else {
            TextTrackMode::Hidden
        });
        true
    }

    fn detach(&mut self) {
        if self.detached {
            return;
        }
        self.detached = true;
        let _ = self.element.pause();
        for (kind, callback) in self.listeners.drain(..) {
            let _ = self
                .element
                .remove_event_listener_with_callback(kind, callback.as_ref().unchecked_ref());
        }
        let _ = self.element.remove_attribute("src");
        self.element.load();
        self.element.remove();
        self.sink = None;
        tracing::debug!(entry = %self.entry_id, "video element detached");
    }
}

impl Drop for WebVideo {
    fn drop(&mut self) {
        self.detach();
    }
}

