//! Discrete user intents and the key bindings that produce them.

use tracing::debug;

use super::media::MediaHost;
use super::navigation::{HistoryBackend, View};
use super::overlay::{ClickScope, SettingsPanel};
use super::Player;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Open(String),
    GoHome,
    TogglePlayback,
    ToggleMute,
    ToggleCaptions,
    ToggleFullscreen,
    FocusSearch,
    SeekBy(f64),
    SetVolume(f64),
    SetSpeed(f64),
    SetQuality(String),
    ToggleSettings,
    OpenPanel(SettingsPanel),
    ClosePanel,
    SearchChanged(String),
    OutsideClick(ClickScope),
    ToggleStar,
    ToggleFollow,
    Share,
}

/// Work the core cannot do itself and hands back to the browser shell.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellEffect {
    ToggleFullscreen,
    FocusSearch,
    CopyShareLink,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyInput {
    pub key: String,
    /// Focus is inside an input, textarea, select or contenteditable element.
    pub in_text_field: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyBinding {
    pub command: Command,
    pub prevent_default: bool,
}

impl KeyBinding {
    fn plain(command: Command) -> Self {
        Self {
            command,
            prevent_default: false,
        }
    }

    fn exclusive(command: Command) -> Self {
        Self {
            command,
            prevent_default: true,
        }
    }
}

pub fn resolve_key(input: &KeyInput, view: View, seek_step: f64) -> Option<KeyBinding> {
    if input.in_text_field || input.ctrl || input.meta || input.alt {
        return None;
    }

    let in_player = view == View::Player;
    match input.key.to_lowercase().as_str() {
        " " | "spacebar" if in_player => Some(KeyBinding::exclusive(Command::TogglePlayback)),
        "f" => Some(KeyBinding::plain(Command::ToggleFullscreen)),
        "m" => Some(KeyBinding::plain(Command::ToggleMute)),
        "c" => Some(KeyBinding::plain(Command::ToggleCaptions)),
        "/" => Some(KeyBinding::exclusive(Command::FocusSearch)),
        "arrowleft" if in_player => Some(KeyBinding::exclusive(Command::SeekBy(-seek_step))),
        "arrowright" if in_player => Some(KeyBinding::exclusive(Command::SeekBy(seek_step))),
        _ => None,
    }
}

impl<M: MediaHost, H: HistoryBackend> Player<M, H> {
    /// The one place every discrete intent is routed through.
    pub fn dispatch(&mut self, command: Command) -> Option<ShellEffect> {
        debug!(?command, "dispatch");
        let outcome = match command {
            Command::Open(id) => {
                self.set_search_query("");
                self.select(&id);
                Ok(())
            }
            Command::GoHome => {
                self.deactivate(true);
                Ok(())
            }
            Command::TogglePlayback => self.toggle_playback(),
            Command::ToggleMute => {
                self.toggle_mute();
                Ok(())
            }
            Command::ToggleCaptions => {
                self.toggle_captions();
                Ok(())
            }
            Command::ToggleFullscreen => return Some(ShellEffect::ToggleFullscreen),
            Command::FocusSearch => return Some(ShellEffect::FocusSearch),
            Command::SeekBy(delta) => self.seek_relative(delta),
            Command::SetVolume(volume) => self.set_volume(volume),
            Command::SetSpeed(rate) => {
                self.overlay.close_settings();
                self.set_playback_rate(rate)
            }
            Command::SetQuality(quality) => {
                self.overlay.close_settings();
                self.set_quality(&quality);
                Ok(())
            }
            Command::ToggleSettings => {
                self.overlay.toggle_settings();
                Ok(())
            }
            Command::OpenPanel(panel) => {
                self.overlay.open_panel(panel);
                Ok(())
            }
            Command::ClosePanel => {
                self.overlay.close_panel();
                Ok(())
            }
            Command::SearchChanged(query) => {
                self.set_search_query(&query);
                Ok(())
            }
            Command::OutsideClick(scope) => {
                self.overlay.dismiss_outside(scope);
                Ok(())
            }
            Command::ToggleStar => {
                self.toggle_star();
                Ok(())
            }
            Command::ToggleFollow => {
                self.toggle_follow();
                Ok(())
            }
            Command::Share => {
                return self.active_entry().map(|_| ShellEffect::CopyShareLink);
            }
        };
        if let Err(err) = outcome {
            debug!("command ignored: {err}");
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::fake_player;
    use super::*;

    fn resolve(input: KeyInput, view: View) -> Option<Command> {
        resolve_key(&input, view, 5.0).map(|binding| binding.command)
    }

    #[test]
    fn space_toggles_only_in_player_view() {
        let binding = resolve_key(&KeyInput::new(" "), View::Player, 5.0).unwrap();
        assert_eq!(binding.command, Command::TogglePlayback);
        assert!(binding.prevent_default);
        assert_eq!(resolve(KeyInput::new(" "), View::Catalog), None);
    }

    #[test]
    fn text_fields_swallow_shortcuts() {
        let input = KeyInput {
            in_text_field: true,
            ..KeyInput::new("m")
        };
        assert_eq!(resolve(input, View::Player), None);
    }

    #[test]
    fn letter_keys_ignore_case() {
        assert_eq!(resolve(KeyInput::new("F"), View::Catalog), Some(Command::ToggleFullscreen));
        assert_eq!(resolve(KeyInput::new("M"), View::Player), Some(Command::ToggleMute));
        assert_eq!(resolve(KeyInput::new("c"), View::Player), Some(Command::ToggleCaptions));
    }

    #[test]
    fn slash_focuses_search_and_blocks_default() {
        let binding = resolve_key(&KeyInput::new("/"), View::Catalog, 5.0).unwrap();
        assert_eq!(binding.command, Command::FocusSearch);
        assert!(binding.prevent_default);
    }

    #[test]
    fn chords_are_left_to_the_browser() {
        let input = KeyInput {
            ctrl: true,
            ..KeyInput::new("f")
        };
        assert_eq!(resolve(input, View::Player), None);
    }

    #[test]
    fn arrows_seek_by_step() {
        assert_eq!(resolve(KeyInput::new("ArrowLeft"), View::Player), Some(Command::SeekBy(-5.0)));
        assert_eq!(resolve(KeyInput::new("ArrowRight"), View::Player), Some(Command::SeekBy(5.0)));
        assert_eq!(resolve(KeyInput::new("ArrowRight"), View::Catalog), None);
    }

    #[test]
    fn shell_only_commands_are_handed_back() {
        let (mut player, _log) = fake_player(3);
        assert_eq!(player.dispatch(Command::ToggleFullscreen), Some(ShellEffect::ToggleFullscreen));
        assert_eq!(player.dispatch(Command::FocusSearch), Some(ShellEffect::FocusSearch));
        assert_eq!(player.dispatch(Command::Share), None);
        player.dispatch(Command::Open("v0".to_string()));
        assert_eq!(player.dispatch(Command::Share), Some(ShellEffect::CopyShareLink));
    }

    #[test]
    fn choosing_a_speed_closes_the_menu() {
        let (mut player, _log) = fake_player(3);
        player.dispatch(Command::Open("v0".to_string()));
        player.dispatch(Command::ToggleSettings);
        player.dispatch(Command::OpenPanel(SettingsPanel::Speed));
        player.dispatch(Command::SetSpeed(1.25));
        assert!(!player.overlay().settings_open);
        assert_eq!(player.session().playback_rate, 1.25);
    }

    #[test]
    fn invalid_commands_leave_state_untouched() {
        let (mut player, _log) = fake_player(3);
        assert_eq!(player.dispatch(Command::TogglePlayback), None);
        player.dispatch(Command::SetSpeed(-2.0));
        assert_eq!(player.session().playback_rate, 1.0);
        assert_eq!(player.view(), View::Catalog);
    }

    #[test]
    fn opening_a_search_hit_clears_the_query() {
        let (mut player, _log) = fake_player(3);
        player.dispatch(Command::SearchChanged("video 2".to_string()));
        assert!(player.overlay().search_open);
        player.dispatch(Command::Open("v2".to_string()));
        assert_eq!(player.search_query(), "");
        assert!(!player.overlay().search_open);
        assert_eq!(player.session().active_entry_id.as_deref(), Some("v2"));
    }

    #[test]
    fn quality_is_recorded_without_touching_playback() {
        let (mut player, log) = fake_player(3);
        player.dispatch(Command::Open("v0".to_string()));
        player.dispatch(Command::SetQuality("480p".to_string()));
        assert_eq!(player.session().quality, "480p");
        assert_eq!(log.borrow().attach_count, 1);
    }
}
