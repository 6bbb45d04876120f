//! Decoding raw touch and key input into carousel commands.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Previous,
    Next,
}

/// Decides whether a finished touch was a horizontal swipe.
///
/// The gesture must be more horizontal than vertical and travel further than
/// `threshold` so vertical scrolling and jitter are ignored. Dragging right
/// (positive delta) goes back.
pub fn classify_swipe(delta_x: f64, delta_y: f64, threshold: f64) -> Option<SwipeDirection> {
    if delta_x.abs() > delta_y.abs() && delta_x.abs() > threshold {
        if delta_x > 0.0 {
            Some(SwipeDirection::Previous)
        } else {
            Some(SwipeDirection::Next)
        }
    } else {
        None
    }
}

/// Remembers where a touch started until it ends.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f64,
    start: Option<(f64, f64)>,
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self { threshold, start: None }
    }

    pub fn begin(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
    }

    pub fn end(&mut self, x: f64, y: f64) -> Option<SwipeDirection> {
        let (start_x, start_y) = self.start.take()?;
        classify_swipe(x - start_x, y - start_y, self.threshold)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Previous,
    Next,
    ToggleAutoPlay,
}

impl KeyCommand {
    /// Maps a `KeyboardEvent.key` value. Anything unmapped is left to the browser.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(KeyCommand::Previous),
            "ArrowRight" => Some(KeyCommand::Next),
            " " | "Enter" => Some(KeyCommand::ToggleAutoPlay),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_left_swipe_goes_forward() {
        assert_eq!(classify_swipe(-60.0, 5.0, 50.0), Some(SwipeDirection::Next));
    }

    #[test]
    fn long_right_swipe_goes_back() {
        assert_eq!(classify_swipe(75.0, -10.0, 50.0), Some(SwipeDirection::Previous));
    }

    #[test]
    fn short_swipe_is_ignored() {
        assert_eq!(classify_swipe(30.0, 5.0, 50.0), None);
        assert_eq!(classify_swipe(50.0, 0.0, 50.0), None);
    }

    #[test]
    fn mostly_vertical_gesture_is_a_scroll() {
        assert_eq!(classify_swipe(-80.0, 120.0, 50.0), None);
    }

    #[test]
    fn tracker_needs_a_start_point() {
        let mut tracker = SwipeTracker::new(50.0);
        assert_eq!(tracker.end(0.0, 0.0), None);

        tracker.begin(200.0, 100.0);
        assert_eq!(tracker.end(140.0, 105.0), Some(SwipeDirection::Next));
        // start is consumed
        assert_eq!(tracker.end(0.0, 105.0), None);
    }

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(KeyCommand::from_key("ArrowLeft"), Some(KeyCommand::Previous));
        assert_eq!(KeyCommand::from_key("ArrowRight"), Some(KeyCommand::Next));
        assert_eq!(KeyCommand::from_key(" "), Some(KeyCommand::ToggleAutoPlay));
        assert_eq!(KeyCommand::from_key("Enter"), Some(KeyCommand::ToggleAutoPlay));
        assert_eq!(KeyCommand::from_key("ArrowUp"), None);
        assert_eq!(KeyCommand::from_key("Tab"), None);
    }
}
