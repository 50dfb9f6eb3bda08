use serde::{Deserialize, Serialize};

/// Query parameter carrying the active video id, e.g. `?v=v2`.
pub const DEEP_LINK_PARAM: &str = "v";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Catalog,
    Player,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavigationState {
    pub view: View,
    pub history_entry_id: Option<String>,
}

impl NavigationState {
    pub fn show_player(&mut self, entry_id: &str) {
        self.view = View::Player;
        self.history_entry_id = Some(entry_id.to_string());
    }

    pub fn show_catalog(&mut self) {
        self.view = View::Catalog;
        self.history_entry_id = None;
    }

    pub fn history_state(&self) -> HistoryState {
        HistoryState {
            v: self.history_entry_id.clone(),
        }
    }
}

/// What gets stored alongside each history slot. Back/forward replay this
/// directly instead of re-reading the URL.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HistoryState {
    #[serde(default)]
    pub v: Option<String>,
}

impl HistoryState {
    pub fn player(entry_id: impl Into<String>) -> Self {
        Self {
            v: Some(entry_id.into()),
        }
    }

    pub fn catalog() -> Self {
        Self { v: None }
    }

    /// Address-bar form of this state relative to `base_path`.
    pub fn location(&self, base_path: &str) -> String {
        match &self.v {
            Some(id) => format!("?{DEEP_LINK_PARAM}={}", urlencoding::encode(id)),
            None => base_path.to_string(),
        }
    }
}

pub trait HistoryBackend {
    fn push(&mut self, state: &HistoryState);
    fn replace(&mut self, state: &HistoryState);
}

/// Pulls the deep-link id out of a query string (with or without the leading `?`).
pub fn deep_link_id(query: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == DEEP_LINK_PARAM)
        .and_then(|(_, value)| {
            let value = value.replace('+', " ");
            urlencoding::decode(&value).ok().map(|v| v.into_owned())
        })
        .filter(|id| !id.is_empty())
}

/// Cursor-based history stack with browser semantics: pushing drops any
/// forward entries, back/forward move the cursor and return the slot's state.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryHistory {
    entries: Vec<HistoryState>,
    cursor: usize,
    pushes: usize,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self {
            entries: vec![HistoryState::catalog()],
            cursor: 0,
            pushes: 0,
        }
    }
}

impl MemoryHistory {
    pub fn current(&self) -> &HistoryState {
        &self.entries[self.cursor]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of `push` calls seen, including ones whose slots were later truncated.
    pub fn push_count(&self) -> usize {
        self.pushes
    }

    pub fn back(&mut self) -> Option<HistoryState> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current().clone())
    }

    pub fn forward(&mut self) -> Option<HistoryState> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current().clone())
    }
}

impl HistoryBackend for MemoryHistory {
    fn push(&mut self, state: &HistoryState) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(state.clone());
        self.cursor = self.entries.len() - 1;
        self.pushes += 1;
    }

    fn replace(&mut self, state: &HistoryState) {
        self.entries[self.cursor] = state.clone();
    }
}
