use serde::{Deserialize, Serialize};

use crate::error::{PlayerError, PlayerResult};

const EMBEDDED_SETTINGS: &str = include_str!("../assets/settings.json");

/// Whether star/follow toggles are shared by every video or tracked per video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SocialScope {
    #[default]
    Global,
    PerEntry,
}

/// Player settings, bundled with the app at build time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub initial_volume: f64,
    pub social_scope: SocialScope,
    /// Switching videos turns captions off and resets the speed to 1x.
    pub reset_on_switch: bool,
    /// Start the next video (wrapping around) when one finishes.
    pub auto_advance: bool,
    pub default_star_count: u64,
    pub default_quality: String,
    pub speed_options: Vec<f64>,
    pub quality_options: Vec<String>,
    pub seek_step_secs: f64,
    /// Card previews only run when the viewport is wider than this.
    pub preview_min_width: f64,
    pub share_feedback_ms: u32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            initial_volume: 1.0,
            social_scope: SocialScope::Global,
            reset_on_switch: true,
            auto_advance: true,
            default_star_count: 1_240,
            default_quality: "1080p".to_string(),
            speed_options: vec![0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 2.0],
            quality_options: vec![
                "1080p".to_string(),
                "720p".to_string(),
                "480p".to_string(),
                "360p".to_string(),
            ],
            seek_step_secs: 5.0,
            preview_min_width: 900.0,
            share_feedback_ms: 2_000,
        }
    }
}

impl PlayerSettings {
    pub fn from_json(raw: &str) -> PlayerResult<Self> {
        let settings: PlayerSettings =
            serde_json::from_str(raw).map_err(|err| PlayerError::Settings(err.to_string()))?;
        Ok(settings.normalized())
    }

    /// Settings shipped in `assets/settings.json`, or the defaults if that file is broken.
    pub fn embedded() -> Self {
        match Self::from_json(EMBEDDED_SETTINGS) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!("{err}; using default settings");
                Self::default()
            }
        }
    }

    fn normalized(mut self) -> Self {
        let defaults = Self::default();
        self.initial_volume = if self.initial_volume.is_finite() {
            self.initial_volume.clamp(0.0, 1.0)
        } else {
            defaults.initial_volume
        };
        self.speed_options.retain(|rate| rate.is_finite() && *rate > 0.0);
        if self.speed_options.is_empty() {
            self.speed_options = defaults.speed_options;
        }
        if self.quality_options.is_empty() {
            self.quality_options = defaults.quality_options;
        }
        if !self.seek_step_secs.is_finite() || self.seek_step_secs <= 0.0 {
            self.seek_step_secs = defaults.seek_step_secs;
        }
        self
    }
}
