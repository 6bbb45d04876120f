//! What the carousel needs from the page it is mounted on.
//!
//! The engine never touches the DOM or `setInterval` directly. It talks to a
//! [`SlideSurface`] for visual state and a [`Scheduler`] for time, which keeps
//! it runnable (and testable) outside a browser.

/// Opaque id of a repeating timer, valid until passed to [`Scheduler::cancel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub(crate) u64);

/// One state of the progress fill: a width plus the CSS transition used to
/// reach it (`None` jumps there instantly).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressFrame {
    pub width_percent: f64,
    pub transition_ms: Option<u32>,
}

impl ProgressFrame {
    pub fn reset() -> Self {
        Self { width_percent: 0.0, transition_ms: None }
    }

    pub fn fill_over(duration_ms: u32) -> Self {
        Self { width_percent: 100.0, transition_ms: Some(duration_ms) }
    }

    pub fn css_width(&self) -> String {
        format!("{}%", self.width_percent)
    }

    pub fn css_transition(&self) -> String {
        match self.transition_ms {
            Some(ms) => format!("width {}ms linear", ms),
            None => "none".to_string(),
        }
    }
}

/// The rendered carousel: its slides, indicators and optional progress fill.
///
/// Methods take `&self` because DOM handles mutate through shared references;
/// implementations that keep state use interior mutability.
pub trait SlideSurface {
    fn slide_count(&self) -> usize;
    fn set_slide_active(&self, index: usize, active: bool);
    fn set_slide_opacity(&self, index: usize, opacity: f64);

    /// Replaces any existing indicators with `count` fresh ones. Surfaces
    /// without an indicator container ignore this.
    fn create_indicators(&self, count: usize);
    fn indicator_count(&self) -> usize;
    fn set_indicator_active(&self, index: usize, active: bool);

    /// Injects the progress bar. Returns false if the surface can't host one.
    fn mount_progress_bar(&self) -> bool;
    fn set_progress(&self, frame: ProgressFrame);
}

/// Timer facility. Callbacks run on the same thread, never re-entrantly.
pub trait Scheduler {
    fn schedule_repeating(&self, every_ms: u32, callback: Box<dyn FnMut()>) -> TimerHandle;
    /// Fire-and-forget delayed action; there is no way to cancel it.
    fn schedule_once(&self, after_ms: u32, callback: Box<dyn FnOnce()>);
    fn cancel(&self, handle: TimerHandle);
}

/// Marks `active` as the only active slide.
pub fn show_only(surface: &dyn SlideSurface, active: usize) {
    for i in 0..surface.slide_count() {
        surface.set_slide_active(i, i == active);
    }
}

/// Marks `active` as the only highlighted indicator.
pub fn sync_indicators(surface: &dyn SlideSurface, active: usize) {
    for i in 0..surface.indicator_count() {
        surface.set_indicator_active(i, i == active);
    }
}
