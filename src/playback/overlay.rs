#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsPanel {
    #[default]
    Main,
    Speed,
    Quality,
}

/// Where a document click landed, relative to the overlays that care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickScope {
    pub in_search: bool,
    pub in_settings_menu: bool,
    pub on_settings_toggle: bool,
}

/// Open/closed state of the search dropdown and the settings menu.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverlayState {
    pub search_open: bool,
    pub settings_open: bool,
    pub settings_panel: SettingsPanel,
}

impl OverlayState {
    pub fn toggle_settings(&mut self) {
        self.settings_open = !self.settings_open;
        self.settings_panel = SettingsPanel::Main;
    }

    pub fn open_panel(&mut self, panel: SettingsPanel) {
        if self.settings_open {
            self.settings_panel = panel;
        }
    }

    pub fn close_panel(&mut self) {
        self.settings_panel = SettingsPanel::Main;
    }

    pub fn close_settings(&mut self) {
        self.settings_open = false;
        self.settings_panel = SettingsPanel::Main;
    }

    pub fn set_search_open(&mut self, open: bool) {
        self.search_open = open;
    }

    pub fn dismiss_outside(&mut self, scope: ClickScope) {
        if !scope.in_search {
            self.search_open = false;
        }
        if !scope.in_settings_menu && !scope.on_settings_toggle {
            self.close_settings();
        }
    }
}
