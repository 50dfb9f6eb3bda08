use crate::components::{send, Icon, PlayerSignal, SETTINGS_MENU_ID};
use crate::playback::{speed_label, Command, SettingsPanel};
use dioxus::prelude::*;

#[component]
pub(super) fn SettingsMenu(
    panel: SettingsPanel,
    rate_label: String,
    quality_label: String,
) -> Element {
    let player = use_context::<PlayerSignal>().0;
    let options = use_memo(move || {
        let current = player.read();
        (
            current.settings().speed_options.clone(),
            current.settings().quality_options.clone(),
            current.session().playback_rate,
        )
    });
    let (speeds, qualities, current_rate) = options();

    rsx! {
        div { id: SETTINGS_MENU_ID, class: "settings-menu",
            {match panel {
                SettingsPanel::Main => rsx! {
                    div { class: "settings-panel",
                        div {
                            class: "settings-item",
                            onclick: move |_| {
                                send(player, Command::OpenPanel(SettingsPanel::Speed));
                            },
                            span { "Playback speed" }
                            span { class: "settings-value",
                                "{rate_label}"
                                Icon { name: "chevron-right".to_string(), class: "chevron".to_string() }
                            }
                        }
                        div {
                            class: "settings-item",
                            onclick: move |_| {
                                send(player, Command::OpenPanel(SettingsPanel::Quality));
                            },
                            span { "Quality" }
                            span { class: "settings-value",
                                "{quality_label}"
                                Icon { name: "chevron-right".to_string(), class: "chevron".to_string() }
                            }
                        }
                    }
                },
                SettingsPanel::Speed => rsx! {
                    div { class: "settings-panel",
                        PanelHeader { title: "Playback speed" }
                        for rate in speeds {
                            SpeedOption { key: "{rate}", rate, selected: rate == current_rate }
                        }
                    }
                },
                SettingsPanel::Quality => rsx! {
                    div { class: "settings-panel",
                        PanelHeader { title: "Quality" }
                        for quality in qualities {
                            QualityOption {
                                key: "{quality}",
                                selected: quality == quality_label,
                                quality: quality.clone(),
                            }
                        }
                    }
                },
            }}
        }
    }
}

#[component]
fn PanelHeader(title: &'static str) -> Element {
    let player = use_context::<PlayerSignal>().0;
    rsx! {
        div {
            class: "settings-header",
            onclick: move |_| {
                send(player, Command::ClosePanel);
            },
            Icon { name: "chevron-left".to_string(), class: "chevron".to_string() }
            span { "{title}" }
        }
    }
}

#[component]
fn SpeedOption(rate: f64, selected: bool) -> Element {
    let player = use_context::<PlayerSignal>().0;
    rsx! {
        div {
            class: if selected { "settings-option selected" } else { "settings-option" },
            onclick: move |_| {
                send(player, Command::SetSpeed(rate));
            },
            if selected {
                Icon { name: "check".to_string(), class: "check".to_string() }
            }
            span { "{speed_label(rate)}" }
        }
    }
}

#[component]
fn QualityOption(quality: String, selected: bool) -> Element {
    let player = use_context::<PlayerSignal>().0;
    let value = quality.clone();
    rsx! {
        div {
            class: if selected { "settings-option selected" } else { "settings-option" },
            onclick: move |_| {
                send(player, Command::SetQuality(value.clone()));
            },
            if selected {
                Icon { name: "check".to_string(), class: "check".to_string() }
            }
            span { "{quality}" }
        }
    }
}
