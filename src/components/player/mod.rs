use crate::components::{
    after_ms, send, track_bounds, Icon, PlayerSignal, PLAYER_WRAPPER_ID, PROGRESS_TRACK_ID,
    VIDEO_SLOT_ID,
};
use crate::playback::Command;
use dioxus::prelude::*;

mod controls;
mod settings_menu;

use controls::{
    CaptionsButton, FullscreenButton, MuteButton, PlayPauseButton, SettingsButton, VolumeSlider,
};
use settings_menu::SettingsMenu;

/// The video surface. The `<video>` itself is inserted into the slot by the
/// media host, outside of Dioxus' diffing.
#[component]
pub fn PlayerSurface() -> Element {
    let player = use_context::<PlayerSignal>().0;
    let state = use_memo(move || {
        let current = player.read();
        (current.surface_view(), current.progress().view())
    });
    let (surface, progress) = state();

    rsx! {
        div { id: PLAYER_WRAPPER_ID, class: "player-wrapper {surface.wrapper_class}",
            div { id: VIDEO_SLOT_ID, class: "video-slot" }
            button {
                class: "big-play-btn",
                r#type: "button",
                onclick: move |_| {
                    send(player, Command::TogglePlayback);
                },
                Icon { name: "play".to_string(), class: "big-play-icon".to_string() }
            }
            div { class: "controls-overlay",
                ProgressArea {
                    fill_percent: progress.fill_percent(),
                    hover_percent: progress.hover_ratio.map(|ratio| ratio * 100.0),
                }
                div { class: "controls-row",
                    div { class: "controls-left",
                        PlayPauseButton { icon: surface.play_icon }
                        div { class: "volume-container",
                            MuteButton { icon: surface.mute_icon }
                            VolumeSlider { percent: surface.volume_percent }
                        }
                        span { class: "time-display", "{progress.label()}" }
                    }
                    div { class: "controls-right",
                        CaptionsButton { active: surface.captions_active }
                        div { class: "settings-anchor",
                            SettingsButton { open: surface.settings_open }
                            if surface.settings_open {
                                SettingsMenu {
                                    panel: surface.settings_panel,
                                    rate_label: surface.speed_label.clone(),
                                    quality_label: surface.quality_label.clone(),
                                }
                            }
                        }
                        FullscreenButton {}
                    }
                }
            }
        }
    }
}

/// Seek track with hover preview. Presses start a scrub here; moves and the
/// release are tracked on the document so the drag may leave the track.
#[component]
fn ProgressArea(fill_percent: f64, #[props(!optional)] hover_percent: Option<f64>) -> Element {
    let mut player = use_context::<PlayerSignal>().0;

    let on_press = move |evt: MouseEvent| {
        if let Some(bounds) = track_bounds(PROGRESS_TRACK_ID) {
            player
                .write()
                .begin_scrub(bounds, evt.client_coordinates().x);
        }
    };
    let on_hover = move |evt: MouseEvent| {
        if let Some(bounds) = track_bounds(PROGRESS_TRACK_ID) {
            player.write().hover_at(bounds, evt.client_coordinates().x);
        }
    };

    rsx! {
        div {
            class: "progress-area",
            onmousemove: on_hover,
            onmouseleave: move |_| player.write().clear_hover(),
            div {
                id: PROGRESS_TRACK_ID,
                class: "progress-bar",
                onmousedown: on_press,
                if let Some(hover) = hover_percent {
                    div { class: "progress-hover", style: "width: {hover}%" }
                }
                div { class: "progress-filled", style: "width: {fill_percent}%" }
                div { class: "scrub-head", style: "left: {fill_percent}%" }
            }
        }
    }
}

/// Title, channel and the star/follow/share actions under the surface.
#[component]
pub fn VideoDetails() -> Element {
    let player = use_context::<PlayerSignal>().0;
    let mut copied = use_signal(|| false);
    let feedback_ms = use_memo(move || player.read().settings().share_feedback_ms);
    let details = use_memo(move || player.read().details_view());

    let Some(details) = details() else {
        return rsx! {
            div { class: "video-details empty" }
        };
    };

    let on_share = move |_| {
        if send(player, Command::Share) {
            copied.set(true);
            after_ms(feedback_ms(), move || copied.set(false));
        }
    };

    rsx! {
        div { class: "video-details",
            h1 { class: "video-title", "{details.title}" }
            div { class: "details-row",
                div { class: "channel-info",
                    div { class: "channel-avatar" }
                    div { class: "channel-text",
                        h4 { "{details.channel}" }
                        span { "{details.subscribers_label}" }
                    }
                    button {
                        class: if details.following { "follow-btn following" } else { "follow-btn" },
                        r#type: "button",
                        onclick: move |_| {
                            send(player, Command::ToggleFollow);
                        },
                        "{details.follow_label}"
                    }
                }
                div { class: "action-buttons",
                    button {
                        id: "star-btn",
                        class: if details.starred { "action-btn starred" } else { "action-btn" },
                        r#type: "button",
                        onclick: move |_| {
                            send(player, Command::ToggleStar);
                        },
                        Icon {
                            name: if details.starred { "star-filled".to_string() } else { "star".to_string() },
                            class: "action-icon".to_string(),
                        }
                        span { "{details.star_label}" }
                        span { class: "star-count", "{details.star_count_label}" }
                    }
                    button {
                        class: "action-btn",
                        r#type: "button",
                        onclick: on_share,
                        Icon { name: "share".to_string(), class: "action-icon".to_string() }
                        span { if copied() { "Copied!" } else { "Share" } }
                    }
                }
            }
            div { class: "description-box",
                span { class: "published", "{details.published_label}" }
            }
        }
    }
}
