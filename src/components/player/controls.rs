use crate::components::{send, Icon, PlayerSignal, SETTINGS_TOGGLE_ID};
use crate::playback::Command;
use dioxus::prelude::*;

const CONTROL_CLASS: &str = "control-btn";

#[component]
pub(super) fn PlayPauseButton(icon: &'static str) -> Element {
    let player = use_context::<PlayerSignal>().0;
    rsx! {
        button {
            class: CONTROL_CLASS,
            r#type: "button",
            title: "Play (space)",
            onclick: move |_| {
                send(player, Command::TogglePlayback);
            },
            Icon { name: icon.to_string(), class: "control-icon".to_string() }
        }
    }
}

#[component]
pub(super) fn MuteButton(icon: &'static str) -> Element {
    let player = use_context::<PlayerSignal>().0;
    rsx! {
        button {
            class: CONTROL_CLASS,
            r#type: "button",
            title: "Mute (m)",
            onclick: move |_| {
                send(player, Command::ToggleMute);
            },
            Icon { name: icon.to_string(), class: "control-icon".to_string() }
        }
    }
}

/// Volume range. The slider works in whole percent; the player in 0..=1.
#[component]
pub(super) fn VolumeSlider(percent: f64) -> Element {
    let player = use_context::<PlayerSignal>().0;
    let on_volume_change = move |e: Event<FormData>| {
        if let Ok(val) = e.value().parse::<f64>() {
            send(player, Command::SetVolume(val / 100.0));
        }
    };

    rsx! {
        input {
            class: "volume-slider",
            r#type: "range",
            min: "0",
            max: "100",
            step: "1",
            value: percent as i32,
            oninput: on_volume_change,
        }
    }
}

#[component]
pub(super) fn CaptionsButton(active: bool) -> Element {
    let player = use_context::<PlayerSignal>().0;
    rsx! {
        button {
            class: if active { "control-btn active-cc" } else { CONTROL_CLASS },
            r#type: "button",
            title: "Subtitles (c)",
            onclick: move |_| {
                send(player, Command::ToggleCaptions);
            },
            Icon { name: "captions".to_string(), class: "control-icon".to_string() }
        }
    }
}

#[component]
pub(super) fn SettingsButton(open: bool) -> Element {
    let player = use_context::<PlayerSignal>().0;
    rsx! {
        button {
            id: SETTINGS_TOGGLE_ID,
            class: if open { "control-btn rotated" } else { CONTROL_CLASS },
            r#type: "button",
            title: "Settings",
            onclick: move |_| {
                send(player, Command::ToggleSettings);
            },
            Icon { name: "settings".to_string(), class: "control-icon".to_string() }
        }
    }
}

#[component]
pub(super) fn FullscreenButton() -> Element {
    let player = use_context::<PlayerSignal>().0;
    rsx! {
        button {
            class: CONTROL_CLASS,
            r#type: "button",
            title: "Full screen (f)",
            onclick: move |_| {
                send(player, Command::ToggleFullscreen);
            },
            Icon { name: "fullscreen".to_string(), class: "control-icon".to_string() }
        }
    }
}
