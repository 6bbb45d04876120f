//! How a slide change is drawn.
//!
//! A strategy is chosen when the carousel is built and kept for its whole
//! life, because some of them add elements to the surface at mount time.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::Deserialize;

use super::host::{show_only, sync_indicators, ProgressFrame, Scheduler, SlideSurface};
use crate::config::CarouselConfig;

/// Strategy selector as written in page options: `"default"`, `"fade"` or
/// `"progress"`. Unknown names fall back to the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum TransitionKind {
    #[default]
    Instant,
    Fade,
    Progress,
}

impl TransitionKind {
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "fade" => TransitionKind::Fade,
            "progress" => TransitionKind::Progress,
            _ => TransitionKind::Instant,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionKind::Instant => "default",
            TransitionKind::Fade => "fade",
            TransitionKind::Progress => "progress",
        }
    }

    pub fn build(self) -> Box<dyn Transition> {
        match self {
            TransitionKind::Instant => Box::new(Instant),
            TransitionKind::Fade => Box::new(Fade::default()),
            TransitionKind::Progress => Box::new(ProgressBar::default()),
        }
    }
}

impl From<String> for TransitionKind {
    fn from(name: String) -> Self {
        TransitionKind::parse(&name)
    }
}

/// What a strategy may touch while it runs.
pub struct TransitionContext<'a> {
    pub surface: &'a Rc<dyn SlideSurface>,
    pub scheduler: &'a Rc<dyn Scheduler>,
    pub config: &'a CarouselConfig,
    pub auto_playing: bool,
}

pub trait Transition {
    fn kind(&self) -> TransitionKind;

    /// Called once, before the first slide is shown.
    fn on_mount(&mut self, _ctx: &TransitionContext<'_>) {}

    /// Moves the active mark from `from` to `to` (never equal).
    fn render_transition(&mut self, ctx: &TransitionContext<'_>, from: usize, to: usize);

    /// Called after every successful slide change.
    fn on_navigate(&mut self, _ctx: &TransitionContext<'_>) {}

    /// Called whenever auto-play (re)starts.
    fn on_auto_play_start(&mut self, _ctx: &TransitionContext<'_>) {}
}

/// Swap the active slide in one step.
pub struct Instant;

impl Transition for Instant {
    fn kind(&self) -> TransitionKind {
        TransitionKind::Instant
    }

    fn render_transition(&mut self, ctx: &TransitionContext<'_>, _from: usize, to: usize) {
        show_only(&**ctx.surface, to);
        sync_indicators(&**ctx.surface, to);
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingFade {
    from: usize,
    to: usize,
    generation: u64,
}

impl PendingFade {
    fn finish(self, surface: &dyn SlideSurface) {
        surface.set_slide_active(self.from, false);
        surface.set_slide_active(self.to, true);
        surface.set_slide_opacity(self.to, 1.0);
    }
}

/// Fade the old slide out, then swap the active mark once the CSS fade has run.
///
/// Indicators move immediately. If another change arrives while a fade is
/// still pending, the pending one is finished on the spot and its delayed
/// callback turns into a no-op, so exactly one slide ends up active.
#[derive(Default)]
pub struct Fade {
    pending: Rc<RefCell<Option<PendingFade>>>,
    generation: Cell<u64>,
}

impl Fade {
    fn settle_pending(&self, surface: &dyn SlideSurface) {
        // take() before finish() so the borrow is released
        let pending = self.pending.borrow_mut().take();
        if let Some(pending) = pending {
            pending.finish(surface);
        }
    }
}

impl Transition for Fade {
    fn kind(&self) -> TransitionKind {
        TransitionKind::Fade
    }

    fn render_transition(&mut self, ctx: &TransitionContext<'_>, from: usize, to: usize) {
        self.settle_pending(&**ctx.surface);

        ctx.surface.set_slide_opacity(from, 0.0);
        sync_indicators(&**ctx.surface, to);

        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        *self.pending.borrow_mut() = Some(PendingFade { from, to, generation });

        let pending = Rc::clone(&self.pending);
        let surface = Rc::clone(ctx.surface);
        ctx.scheduler.schedule_once(
            ctx.config.fade_duration_ms,
            Box::new(move || {
                let due = {
                    let mut slot = pending.borrow_mut();
                    if slot.map_or(false, |p| p.generation == generation) {
                        slot.take()
                    } else {
                        None
                    }
                };
                if let Some(fade) = due {
                    fade.finish(&*surface);
                }
            }),
        );
    }
}

/// Instant swaps plus a fill bar that sweeps across once per auto-play period.
///
/// The fill restarts on every slide change while auto-play runs; changes
/// made while paused leave it alone.
#[derive(Default)]
pub struct ProgressBar {
    mounted: bool,
    generation: Rc<Cell<u64>>,
}

impl ProgressBar {
    fn restart(&self, ctx: &TransitionContext<'_>) {
        if !self.mounted {
            return;
        }
        ctx.surface.set_progress(ProgressFrame::reset());

        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        let current = Rc::clone(&self.generation);
        let surface = Rc::clone(ctx.surface);
        let duration = ctx.config.auto_play_delay_ms;
        // Give the browser a frame to render the reset before animating
        ctx.scheduler.schedule_once(
            ctx.config.progress_kickoff_ms,
            Box::new(move || {
                if current.get() == generation {
                    surface.set_progress(ProgressFrame::fill_over(duration));
                }
            }),
        );
    }
}

impl Transition for ProgressBar {
    fn kind(&self) -> TransitionKind {
        TransitionKind::Progress
    }

    fn on_mount(&mut self, ctx: &TransitionContext<'_>) {
        self.mounted = ctx.surface.mount_progress_bar();
        if self.mounted {
            ctx.surface.set_progress(ProgressFrame::reset());
        }
    }

    fn render_transition(&mut self, ctx: &TransitionContext<'_>, _from: usize, to: usize) {
        show_only(&**ctx.surface, to);
        sync_indicators(&**ctx.surface, to);
    }

    fn on_navigate(&mut self, ctx: &TransitionContext<'_>) {
        if ctx.auto_playing {
            self.restart(ctx);
        }
    }

    fn on_auto_play_start(&mut self, ctx: &TransitionContext<'_>) {
        self.restart(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::testing::{FakeSurface, ManualClock};

    struct Rig {
        fake: Rc<FakeSurface>,
        clock: Rc<ManualClock>,
        surface: Rc<dyn SlideSurface>,
        scheduler: Rc<dyn Scheduler>,
        config: CarouselConfig,
    }

    impl Rig {
        fn new(slides: usize) -> Self {
            let fake = FakeSurface::new(slides);
            fake.create_indicators(slides);
            show_only(&*fake, 0);
            sync_indicators(&*fake, 0);
            let clock = ManualClock::new();
            Rig {
                surface: fake.clone(),
                scheduler: clock.clone(),
                fake,
                clock,
                config: CarouselConfig::default(),
            }
        }

        fn ctx(&self, auto_playing: bool) -> TransitionContext<'_> {
            TransitionContext {
                surface: &self.surface,
                scheduler: &self.scheduler,
                config: &self.config,
                auto_playing,
            }
        }
    }

    #[test]
    fn kind_names_parse_leniently() {
        assert_eq!(TransitionKind::parse("fade"), TransitionKind::Fade);
        assert_eq!(TransitionKind::parse(" Progress "), TransitionKind::Progress);
        assert_eq!(TransitionKind::parse("default"), TransitionKind::Instant);
        assert_eq!(TransitionKind::parse("slide-3d"), TransitionKind::Instant);
    }

    #[test]
    fn built_strategy_reports_its_kind() {
        for kind in [TransitionKind::Instant, TransitionKind::Fade, TransitionKind::Progress] {
            assert_eq!(kind.build().kind(), kind);
        }
    }

    #[test]
    fn instant_swaps_in_one_step() {
        let rig = Rig::new(3);
        Instant.render_transition(&rig.ctx(false), 0, 2);
        assert_eq!(rig.fake.active_slides(), vec![2]);
        assert_eq!(rig.fake.active_indicators(), vec![2]);
        assert_eq!(rig.clock.pending_once(), 0);
    }

    #[test]
    fn fade_swaps_after_the_fade_duration() {
        let rig = Rig::new(3);
        let mut fade = Fade::default();
        fade.render_transition(&rig.ctx(false), 0, 1);

        // old slide fading, still marked active; indicators already moved
        assert_eq!(rig.fake.opacity(0), Some(0.0));
        assert_eq!(rig.fake.active_slides(), vec![0]);
        assert_eq!(rig.fake.active_indicators(), vec![1]);

        rig.clock.advance(299);
        assert_eq!(rig.fake.active_slides(), vec![0]);

        rig.clock.advance(1);
        assert_eq!(rig.fake.active_slides(), vec![1]);
        assert_eq!(rig.fake.opacity(1), Some(1.0));
    }

    #[test]
    fn fade_settles_a_pending_fade_before_starting_another() {
        let rig = Rig::new(3);
        let mut fade = Fade::default();
        fade.render_transition(&rig.ctx(false), 0, 1);
        rig.clock.advance(100);
        fade.render_transition(&rig.ctx(false), 1, 2);

        // first fade was finished early, second one is under way
        assert_eq!(rig.fake.active_slides(), vec![1]);
        assert_eq!(rig.fake.opacity(1), Some(0.0));
        assert_eq!(rig.fake.active_indicators(), vec![2]);

        // stale callback for the first fade fires here and does nothing
        rig.clock.advance(200);
        assert_eq!(rig.fake.active_slides(), vec![1]);

        rig.clock.advance(100);
        assert_eq!(rig.fake.active_slides(), vec![2]);
        assert_eq!(rig.fake.opacity(2), Some(1.0));
    }

    #[test]
    fn progress_bar_restarts_only_while_auto_playing() {
        let rig = Rig::new(3);
        let mut progress = ProgressBar::default();
        progress.on_mount(&rig.ctx(true));
        assert!(rig.fake.progress_mounted());
        rig.fake.clear_progress_frames();

        progress.render_transition(&rig.ctx(false), 0, 1);
        progress.on_navigate(&rig.ctx(false));
        rig.clock.advance(1000);
        assert!(rig.fake.progress_frames().is_empty());

        progress.render_transition(&rig.ctx(true), 1, 2);
        progress.on_navigate(&rig.ctx(true));
        assert_eq!(rig.fake.progress_frames(), vec![ProgressFrame::reset()]);
        rig.clock.advance(100);
        assert_eq!(
            rig.fake.progress_frames(),
            vec![ProgressFrame::reset(), ProgressFrame::fill_over(5000)]
        );
    }

    #[test]
    fn stale_progress_kickoff_is_dropped() {
        let rig = Rig::new(3);
        let mut progress = ProgressBar::default();
        progress.on_mount(&rig.ctx(true));
        rig.fake.clear_progress_frames();

        progress.on_navigate(&rig.ctx(true));
        rig.clock.advance(50);
        progress.on_navigate(&rig.ctx(true));
        rig.clock.advance(100);

        let fills = rig
            .fake
            .progress_frames()
            .into_iter()
            .filter(|f| f.width_percent == 100.0)
            .count();
        assert_eq!(fills, 1);
    }
}
