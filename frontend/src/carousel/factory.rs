use serde::{Deserialize, Serialize};

use crate::config::CarouselConfig;
use super::transition::TransitionKind;

pub const CAROUSEL_CLASS: &str = "carousel";
pub const TRACK_CLASS: &str = "carousel-track";
pub const SLIDE_CLASS: &str = "carousel-slide";
pub const PREV_BUTTON_CLASS: &str = "carousel-btn prev";
pub const NEXT_BUTTON_CLASS: &str = "carousel-btn next";
pub const INDICATORS_CLASS: &str = "carousel-indicators";
pub const INDICATOR_CLASS: &str = "indicator";
pub const PROGRESS_CLASS: &str = "carousel-progress";
pub const PROGRESS_FILL_CLASS: &str = "carousel-progress-fill";
pub const ACTIVE_CLASS: &str = "active";

const DEFAULT_ICON: &str = "fas fa-image";

/// One slide as handed to [`create_carousel`](super::dom::create_carousel).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideDescriptor {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub button_text: Option<String>,
    #[serde(default)]
    pub button_link: Option<String>,
}

impl SlideDescriptor {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            icon: None,
            button_text: None,
            button_link: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_button(mut self, text: impl Into<String>, link: impl Into<String>) -> Self {
        self.button_text = Some(text.into());
        self.button_link = Some(link.into());
        self
    }

    pub fn icon_class(&self) -> &str {
        match self.icon.as_deref() {
            Some(icon) if !icon.is_empty() => icon,
            _ => DEFAULT_ICON,
        }
    }

    /// Call-to-action text and target. No text means no button; a missing
    /// link points at `#`.
    pub fn button(&self) -> Option<(&str, &str)> {
        let text = self.button_text.as_deref().filter(|t| !t.is_empty())?;
        Some((text, self.button_link.as_deref().unwrap_or("#")))
    }
}

/// `{ type: "default" | "fade" | "progress", ...CarouselConfig }`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarouselOptions {
    #[serde(rename = "type")]
    pub kind: TransitionKind,
    #[serde(flatten)]
    pub config: CarouselConfig,
}

impl CarouselOptions {
    pub fn of_kind(kind: TransitionKind) -> Self {
        Self { kind, config: CarouselConfig::default() }
    }
}

/// Id given to the carousel element generated inside `container_id`.
pub fn carousel_id(container_id: &str) -> String {
    format!("{}-carousel", container_id)
}

/// Class list of the slide at `index`; the first one starts active.
pub fn slide_class(index: usize) -> String {
    if index == 0 {
        format!("{} {}", SLIDE_CLASS, ACTIVE_CLASS)
    } else {
        SLIDE_CLASS.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_defaults() {
        let slide: SlideDescriptor =
            serde_json::from_str(r#"{"title": "Tech Fest", "description": "Two days of talks"}"#).unwrap();
        assert_eq!(slide.icon_class(), "fas fa-image");
        assert_eq!(slide.button(), None);
    }

    #[test]
    fn slide_button_without_link_points_at_anchor() {
        let slide: SlideDescriptor = serde_json::from_str(
            r#"{"title": "Buka", "description": "Lunch", "icon": "fas fa-utensils", "buttonText": "Order"}"#,
        )
        .unwrap();
        assert_eq!(slide.icon_class(), "fas fa-utensils");
        assert_eq!(slide.button(), Some(("Order", "#")));

        let linked = SlideDescriptor::new("Buka", "Lunch").with_button("Order", "/business");
        assert_eq!(linked.button(), Some(("Order", "/business")));
    }

    #[test]
    fn options_parse_type_and_config() {
        let options: CarouselOptions =
            serde_json::from_str(r#"{"type": "progress", "autoPlayDelayMs": 3000}"#).unwrap();
        assert_eq!(options.kind, TransitionKind::Progress);
        assert_eq!(options.config.auto_play_delay_ms, 3000);

        let options: CarouselOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, CarouselOptions::default());
        assert_eq!(options.kind, TransitionKind::Instant);

        let options: CarouselOptions = serde_json::from_str(r#"{"type": "cube"}"#).unwrap();
        assert_eq!(options.kind, TransitionKind::Instant);
    }

    #[test]
    fn generated_ids_and_classes() {
        assert_eq!(carousel_id("events"), "events-carousel");
        assert_eq!(slide_class(0), "carousel-slide active");
        assert_eq!(slide_class(2), "carousel-slide");
    }
}
