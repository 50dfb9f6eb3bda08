use dioxus::prelude::*;

use super::AppPlayer;
use crate::playback::{ShellEffect, TrackBounds};

#[cfg(target_arch = "wasm32")]
use super::web_video::NoticeSink;
#[cfg(target_arch = "wasm32")]
use super::{
    PLAYER_WRAPPER_ID, PROGRESS_TRACK_ID, SEARCH_INPUT_ID, SEARCH_WRAPPER_ID, SETTINGS_MENU_ID,
    SETTINGS_TOGGLE_ID,
};
#[cfg(target_arch = "wasm32")]
use crate::playback::{
    resolve_key, ClickScope, Command, HistoryBackend, HistoryState, KeyInput, MediaNotice,
};
#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, EventTarget, HtmlElement, HtmlVideoElement, KeyboardEvent, MouseEvent};

/// History API backend. Entries carry `{ v: id | null }` and the address
/// bar mirrors the active entry as `?v=<id>`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct BrowserHistory;

#[cfg(target_arch = "wasm32")]
impl BrowserHistory {
    fn write(&self, state: &HistoryState, replace: bool) {
        let Some(win) = window() else {
            return;
        };
        let Ok(history) = win.history() else {
            return;
        };
        let path = win
            .location()
            .pathname()
            .unwrap_or_else(|_| "/".to_string());
        let url = state.location(&path);
        let Some(payload) = serde_json::to_string(state)
            .ok()
            .and_then(|json| js_sys::JSON::parse(&json).ok())
        else {
            tracing::warn!(?state, "could not encode history state");
            return;
        };

        let result = if replace {
            history.replace_state_with_url(&payload, "", Some(&url))
        } else {
            history.push_state_with_url(&payload, "", Some(&url))
        };
        if result.is_err() {
            tracing::warn!(%url, "history update rejected");
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl HistoryBackend for BrowserHistory {
    fn push(&mut self, state: &HistoryState) {
        self.write(state, false);
    }

    fn replace(&mut self, state: &HistoryState) {
        self.write(state, true);
    }
}

/// Decodes the state object handed to a `popstate` listener. Anything that
/// is not a `{ v }` object reads as no state.
#[cfg(target_arch = "wasm32")]
fn parse_history_state(value: &JsValue) -> Option<HistoryState> {
    if value.is_null() || value.is_undefined() {
        return None;
    }
    let json = js_sys::JSON::stringify(value).ok()?.as_string()?;
    serde_json::from_str(&json).ok()
}

#[cfg(target_arch = "wasm32")]
pub fn location_query() -> String {
    window()
        .and_then(|win| win.location().search().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn location_query() -> String {
    String::new()
}

#[cfg(target_arch = "wasm32")]
pub fn track_bounds(id: &str) -> Option<TrackBounds> {
    let element = window()?.document()?.get_element_by_id(id)?;
    let rect = element.get_bounding_client_rect();
    Some(TrackBounds::new(rect.left(), rect.width()))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn track_bounds(_id: &str) -> Option<TrackBounds> {
    None
}

#[cfg(target_arch = "wasm32")]
fn is_editable_target(target: Option<EventTarget>) -> bool {
    let Some(target) = target else {
        return false;
    };

    let mut current = target.dyn_into::<web_sys::Element>().ok();
    while let Some(element) = current {
        let tag = element.tag_name().to_ascii_lowercase();
        if tag == "input" || tag == "textarea" || tag == "select" {
            return true;
        }
        if element
            .get_attribute("contenteditable")
            .map(|v| v.to_ascii_lowercase() != "false")
            .unwrap_or(false)
        {
            return true;
        }
        current = element.parent_element();
    }

    false
}

#[cfg(target_arch = "wasm32")]
fn click_scope(target: Option<EventTarget>) -> ClickScope {
    let element = target.and_then(|t| t.dyn_into::<web_sys::Element>().ok());
    let within = |id: &str| {
        element
            .as_ref()
            .and_then(|el| el.closest(&format!("#{id}")).ok().flatten())
            .is_some()
    };
    ClickScope {
        in_search: within(SEARCH_WRAPPER_ID),
        in_settings_menu: within(SETTINGS_MENU_ID),
        on_settings_toggle: within(SETTINGS_TOGGLE_ID),
    }
}

/// Carries out work the player hands back. Returns whether it succeeded.
#[cfg(target_arch = "wasm32")]
pub fn apply_shell_effect(effect: ShellEffect) -> bool {
    let Some(document) = window().and_then(|win| win.document()) else {
        return false;
    };
    match effect {
        ShellEffect::ToggleFullscreen => {
            if document.fullscreen_element().is_some() {
                document.exit_fullscreen();
                return true;
            }
            document
                .get_element_by_id(PLAYER_WRAPPER_ID)
                .map(|wrapper| wrapper.request_fullscreen().is_ok())
                .unwrap_or(false)
        }
        ShellEffect::FocusSearch => document
            .get_element_by_id(SEARCH_INPUT_ID)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|input| input.focus().is_ok())
            .unwrap_or(false),
        ShellEffect::CopyShareLink => copy_page_url(),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_shell_effect(effect: ShellEffect) -> bool {
    tracing::debug!(?effect, "no browser shell on this target");
    false
}

/// Writes the current address to the clipboard. The clipboard API is looked
/// up dynamically so insecure contexts without it fail softly.
#[cfg(target_arch = "wasm32")]
fn copy_page_url() -> bool {
    let Some(win) = window() else {
        return false;
    };
    let Ok(href) = win.location().href() else {
        return false;
    };
    let navigator = JsValue::from(win.navigator());
    let Some(clipboard) = js_sys::Reflect::get(&navigator, &"clipboard".into())
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
    else {
        tracing::warn!("clipboard API unavailable");
        return false;
    };
    let Some(write_text) = js_sys::Reflect::get(&clipboard, &"writeText".into())
        .ok()
        .and_then(|value| value.dyn_into::<js_sys::Function>().ok())
    else {
        return false;
    };
    match write_text.call1(&clipboard, &JsValue::from_str(&href)) {
        Ok(promise) => {
            if let Ok(promise) = promise.dyn_into::<js_sys::Promise>() {
                wasm_bindgen_futures::spawn_local(async move {
                    if wasm_bindgen_futures::JsFuture::from(promise).await.is_err() {
                        tracing::warn!("clipboard write was refused");
                    }
                });
            }
            true
        }
        Err(_) => false,
    }
}

/// Starts a muted card preview when the window is wide enough for hover
/// previews to make sense.
#[cfg(target_arch = "wasm32")]
pub fn preview_play(id: &str, min_width: f64) {
    let Some(win) = window() else {
        return;
    };
    let wide = win
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .map(|width| width > min_width)
        .unwrap_or(false);
    if !wide {
        return;
    }
    if let Some(video) = preview_element(id) {
        video.set_muted(true);
        if let Ok(promise) = video.play() {
            wasm_bindgen_futures::spawn_local(async move {
                let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
            });
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn preview_stop(id: &str) {
    if let Some(video) = preview_element(id) {
        let _ = video.pause();
        video.set_current_time(0.1);
    }
}

#[cfg(target_arch = "wasm32")]
fn preview_element(id: &str) -> Option<HtmlVideoElement> {
    window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlVideoElement>()
        .ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn preview_play(_id: &str, _min_width: f64) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn preview_stop(_id: &str) {}

/// Runs `f` after `ms` milliseconds with the Dioxus runtime entered.
#[cfg(target_arch = "wasm32")]
pub fn after_ms<F>(ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    let runtime = Runtime::current();
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(ms).await;
        let _guard = RuntimeGuard::new(runtime);
        f();
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn after_ms<F>(_ms: u32, _f: F)
where
    F: FnOnce() + 'static,
{
}

/// Routes media notices from the `<video>` backend into the player. Writes
/// are deferred a tick so a notice raised while the player is mid-update
/// never re-enters it.
#[cfg(target_arch = "wasm32")]
pub fn connect_media_events(mut player: Signal<AppPlayer>) {
    let runtime = Runtime::current();
    let sink: NoticeSink = Rc::new(move |notice: MediaNotice| {
        let runtime = runtime.clone();
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(0).await;
            let _guard = RuntimeGuard::new(runtime);
            let mut player = player;
            player.write().handle_media_event(notice);
        });
    });
    player.write().host_mut().connect(sink);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn connect_media_events(_player: Signal<AppPlayer>) {}

/// Document and window listeners the page needs for its whole lifetime:
/// keyboard shortcuts, scrub dragging, outside clicks and history pops.
#[cfg(target_arch = "wasm32")]
pub fn install_page_listeners(player: Signal<AppPlayer>) {
    let Some(win) = window() else {
        return;
    };
    let Some(document) = win.document() else {
        return;
    };
    let runtime = Runtime::current();

    let keydown_cb = {
        let mut player = player;
        let runtime = runtime.clone();
        Closure::wrap(Box::new(move |e: KeyboardEvent| {
            let _guard = RuntimeGuard::new(runtime.clone());
            if e.is_composing() {
                return;
            }
            let input = KeyInput {
                key: e.key(),
                in_text_field: is_editable_target(e.target()),
                ctrl: e.ctrl_key(),
                meta: e.meta_key(),
                alt: e.alt_key(),
            };
            let (view, step) = {
                let current = player.peek();
                (current.view(), current.settings().seek_step_secs)
            };
            let Some(binding) = resolve_key(&input, view, step) else {
                return;
            };
            if binding.prevent_default {
                e.prevent_default();
            }
            let effect = player.write().dispatch(binding.command);
            if let Some(effect) = effect {
                apply_shell_effect(effect);
            }
        }) as Box<dyn FnMut(_)>)
    };

    let mousemove_cb = {
        let mut player = player;
        let runtime = runtime.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            let _guard = RuntimeGuard::new(runtime.clone());
            if !player.peek().session().is_scrubbing {
                return;
            }
            if let Some(bounds) = track_bounds(PROGRESS_TRACK_ID) {
                player.write().scrub_to(bounds, e.client_x() as f64);
            }
        }) as Box<dyn FnMut(_)>)
    };

    let mouseup_cb = {
        let mut player = player;
        let runtime = runtime.clone();
        Closure::wrap(Box::new(move |_e: MouseEvent| {
            let _guard = RuntimeGuard::new(runtime.clone());
            if !player.peek().session().is_scrubbing {
                return;
            }
            if let Err(err) = player.write().end_scrub() {
                tracing::debug!("scrub released without a seek: {err}");
            }
        }) as Box<dyn FnMut(_)>)
    };

    let click_cb = {
        let mut player = player;
        let runtime = runtime.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            let _guard = RuntimeGuard::new(runtime.clone());
            let scope = click_scope(e.target());
            player.write().dispatch(Command::OutsideClick(scope));
        }) as Box<dyn FnMut(_)>)
    };

    let popstate_cb = {
        let mut player = player;
        let runtime = runtime.clone();
        Closure::wrap(Box::new(move |e: web_sys::PopStateEvent| {
            let _guard = RuntimeGuard::new(runtime.clone());
            let state = parse_history_state(&e.state());
            tracing::debug!(?state, "history pop");
            player.write().restore(state);
        }) as Box<dyn FnMut(_)>)
    };

    let _ = document
        .add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref());
    let _ = document
        .add_event_listener_with_callback("mousemove", mousemove_cb.as_ref().unchecked_ref());
    let _ =
        document.add_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref());
    let _ = document.add_event_listener_with_callback_and_bool(
        "click",
        click_cb.as_ref().unchecked_ref(),
        true,
    );
    let _ =
        win.add_event_listener_with_callback("popstate", popstate_cb.as_ref().unchecked_ref());

    keydown_cb.forget();
    mousemove_cb.forget();
    mouseup_cb.forget();
    click_cb.forget();
    popstate_cb.forget();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn install_page_listeners(_player: Signal<AppPlayer>) {}
