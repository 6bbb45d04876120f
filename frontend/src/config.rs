use log::{warn, Level};
use serde::Deserialize;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose carousel/timer logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const SITE_NAME: &str = "FUTO GIST";

// Business line that all WhatsApp deep links point at
pub const WHATSAPP_NUMBER: &str = "08082610560";

pub const DEFAULT_AUTO_PLAY_DELAY_MS: u32 = 5000;
pub const DEFAULT_FADE_DURATION_MS: u32 = 300;
pub const DEFAULT_PROGRESS_KICKOFF_MS: u32 = 100;
pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Per-instance carousel tuning.
///
/// Deserialized from the JSON in a mount point's `data-carousel-config`
/// attribute or from the options object handed to `createCarousel`. Every
/// field falls back to its default when missing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselConfig {
    pub auto_play: bool,
    pub auto_play_delay_ms: u32,
    /// Must match the CSS opacity transition on `.carousel-slide`.
    pub fade_duration_ms: u32,
    pub progress_kickoff_ms: u32,
    pub swipe_threshold_px: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_play: true,
            auto_play_delay_ms: DEFAULT_AUTO_PLAY_DELAY_MS,
            fade_duration_ms: DEFAULT_FADE_DURATION_MS,
            progress_kickoff_ms: DEFAULT_PROGRESS_KICKOFF_MS,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
        }
    }
}

impl CarouselConfig {
    /// Parses a config blob, logging and falling back to defaults on bad input.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<CarouselConfig>(raw) {
            Ok(config) => config.normalized(),
            Err(e) => {
                warn!("Ignoring invalid carousel config {:?}: {}", raw, e);
                Self::default()
            }
        }
    }

    /// Replaces a zero auto-play delay, which would make the interval spin.
    pub fn normalized(mut self) -> Self {
        if self.auto_play_delay_ms == 0 {
            self.auto_play_delay_ms = DEFAULT_AUTO_PLAY_DELAY_MS;
        }
        if !self.swipe_threshold_px.is_finite() || self.swipe_threshold_px < 0.0 {
            self.swipe_threshold_px = DEFAULT_SWIPE_THRESHOLD_PX;
        }
        self
    }
}
