use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{PlayerError, PlayerResult};

const EMBEDDED_CATALOG: &str = include_str!("../assets/catalog.json");

fn default_channel() -> String {
    "GitTube Academy".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    pub title: String,
    #[serde(alias = "src")]
    pub source_uri: String,
    #[serde(default, alias = "duration")]
    pub duration_label: String,
    #[serde(default, alias = "views")]
    pub view_count_label: String,
    #[serde(default, alias = "date")]
    pub age_label: String,
    #[serde(default = "default_channel")]
    pub channel: String,
    #[serde(default)]
    pub star_seed: Option<u64>,
}

/// Ordered, read-only list of playable videos.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> PlayerResult<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(PlayerError::DuplicateEntry(entry.id.clone()));
            }
        }
        Ok(Self { entries })
    }

    pub fn from_json(raw: &str) -> PlayerResult<Self> {
        let entries: Vec<CatalogEntry> =
            serde_json::from_str(raw).map_err(|err| PlayerError::Catalog(err.to_string()))?;
        Self::new(entries)
    }

    /// Catalog shipped in `assets/catalog.json`. A broken file yields an empty catalog.
    pub fn embedded() -> Self {
        match Self::from_json(EMBEDDED_CATALOG) {
            Ok(catalog) => catalog,
            Err(err) => {
                tracing::error!("{err}; starting with an empty catalog");
                Self::default()
            }
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn at(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    /// Case-insensitive title substring match. An empty query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&CatalogEntry> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|entry| entry.title.to_lowercase().contains(&needle))
            .collect()
    }
}
