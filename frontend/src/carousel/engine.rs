//! Carousel Core: index bookkeeping, auto-play and input commands.
//!
//! Every navigation path ends in [`Carousel::go_to_slide`]; the active
//! [`Transition`] decides how the change is drawn. The handle is cheap to
//! clone and all clones drive the same instance.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, info};

use super::host::{show_only, sync_indicators, Scheduler, SlideSurface, TimerHandle};
use super::input::{KeyCommand, SwipeDirection};
use super::transition::{Transition, TransitionContext, TransitionKind};
use crate::config::CarouselConfig;

struct CarouselState {
    surface: Rc<dyn SlideSurface>,
    scheduler: Rc<dyn Scheduler>,
    transition: Box<dyn Transition>,
    config: CarouselConfig,
    slide_count: usize,
    current: usize,
    auto_play: Option<TimerHandle>,
    resume_after_hover: bool,
    destroyed: bool,
}

impl CarouselState {
    fn with_transition(&mut self, f: impl FnOnce(&mut dyn Transition, &TransitionContext<'_>)) {
        let ctx = TransitionContext {
            surface: &self.surface,
            scheduler: &self.scheduler,
            config: &self.config,
            auto_playing: self.auto_play.is_some(),
        };
        f(self.transition.as_mut(), &ctx);
    }

    fn go_to(&mut self, index: usize) {
        if self.destroyed || index >= self.slide_count || index == self.current {
            return;
        }
        let from = self.current;
        self.with_transition(|t, ctx| t.render_transition(ctx, from, index));
        self.current = index;
        self.with_transition(|t, ctx| t.on_navigate(ctx));
    }

    fn next(&mut self) {
        let target = (self.current + 1) % self.slide_count;
        self.go_to(target);
    }

    fn previous(&mut self) {
        let target = (self.current + self.slide_count - 1) % self.slide_count;
        self.go_to(target);
    }

    fn stop_timer(&mut self) -> bool {
        match self.auto_play.take() {
            Some(handle) => {
                self.scheduler.cancel(handle);
                true
            }
            None => false,
        }
    }
}

/// A mounted carousel, or an inert stand-in when there was nothing to mount.
#[derive(Clone, Default)]
pub struct Carousel {
    state: Option<Rc<RefCell<CarouselState>>>,
}

impl PartialEq for Carousel {
    fn eq(&self, other: &Self) -> bool {
        match (&self.state, &other.state) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl Carousel {
    /// An instance that ignores every call.
    pub fn inert() -> Self {
        Self { state: None }
    }

    /// Builds indicators, lets the strategy prepare the surface, activates
    /// slide 0 and starts auto-play (if configured).
    ///
    /// A surface with no slides yields an inert instance.
    pub fn mount(
        surface: Rc<dyn SlideSurface>,
        scheduler: Rc<dyn Scheduler>,
        transition: Box<dyn Transition>,
        config: CarouselConfig,
    ) -> Self {
        let slide_count = surface.slide_count();
        if slide_count == 0 {
            debug!("Carousel has no slides, staying inert");
            return Self::inert();
        }

        surface.create_indicators(slide_count);

        let mut state = CarouselState {
            surface,
            scheduler,
            transition,
            config,
            slide_count,
            current: 0,
            auto_play: None,
            resume_after_hover: false,
            destroyed: false,
        };
        state.with_transition(|t, ctx| t.on_mount(ctx));
        show_only(&*state.surface, 0);
        sync_indicators(&*state.surface, 0);

        let auto_play = state.config.auto_play;
        info!(
            "Mounted carousel: {} slides, {} transition",
            slide_count,
            state.transition.kind().as_str()
        );

        let carousel = Self { state: Some(Rc::new(RefCell::new(state))) };
        if auto_play {
            carousel.start_auto_play();
        }
        carousel
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut CarouselState) -> R) -> Option<R> {
        self.state.as_ref().map(|state| f(&mut state.borrow_mut()))
    }

    pub fn is_inert(&self) -> bool {
        self.state.is_none()
    }

    pub fn current_index(&self) -> usize {
        self.with_state(|s| s.current).unwrap_or(0)
    }

    pub fn slide_count(&self) -> usize {
        self.with_state(|s| s.slide_count).unwrap_or(0)
    }

    pub fn is_auto_playing(&self) -> bool {
        self.with_state(|s| s.auto_play.is_some()).unwrap_or(false)
    }

    pub fn transition_kind(&self) -> Option<TransitionKind> {
        self.with_state(|s| s.transition.kind())
    }

    /// Shows slide `index`. Out-of-range or current indexes are ignored.
    pub fn go_to_slide(&self, index: usize) {
        self.with_state(|s| s.go_to(index));
    }

    pub fn next_slide(&self) {
        self.with_state(CarouselState::next);
    }

    pub fn previous_slide(&self) {
        self.with_state(CarouselState::previous);
    }

    /// (Re)starts the auto-play timer. Any running timer is cancelled first,
    /// so there is never more than one.
    pub fn start_auto_play(&self) {
        let Some(state) = &self.state else {
            return;
        };
        let weak: Weak<RefCell<CarouselState>> = Rc::downgrade(state);
        let mut s = state.borrow_mut();
        if s.destroyed {
            return;
        }
        s.stop_timer();

        let handle = s.scheduler.schedule_repeating(
            s.config.auto_play_delay_ms,
            Box::new(move || {
                if let Some(state) = weak.upgrade() {
                    state.borrow_mut().next();
                }
            }),
        );
        s.auto_play = Some(handle);
        debug!("Auto-play started ({}ms)", s.config.auto_play_delay_ms);
        s.with_transition(|t, ctx| t.on_auto_play_start(ctx));
    }

    pub fn pause_auto_play(&self) {
        self.with_state(|s| {
            if s.stop_timer() {
                debug!("Auto-play paused");
            }
        });
    }

    pub fn toggle_auto_play(&self) {
        if self.is_auto_playing() {
            self.pause_auto_play();
        } else {
            self.start_auto_play();
        }
    }

    pub fn swipe(&self, direction: SwipeDirection) {
        match direction {
            SwipeDirection::Previous => self.previous_slide(),
            SwipeDirection::Next => self.next_slide(),
        }
    }

    pub fn handle_key(&self, command: KeyCommand) {
        match command {
            KeyCommand::Previous => self.previous_slide(),
            KeyCommand::Next => self.next_slide(),
            KeyCommand::ToggleAutoPlay => self.toggle_auto_play(),
        }
    }

    /// Pauses auto-play while the pointer is over the carousel, remembering
    /// whether it was running.
    pub fn pointer_enter(&self) {
        self.with_state(|s| s.resume_after_hover |= s.auto_play.is_some());
        self.pause_auto_play();
    }

    /// Resumes auto-play if it was running on enter or is configured on.
    pub fn pointer_leave(&self) {
        let resume = self
            .with_state(|s| std::mem::take(&mut s.resume_after_hover) || s.config.auto_play)
            .unwrap_or(false);
        if resume {
            self.start_auto_play();
        }
    }

    /// Stops the timer for good. Later calls on any clone do nothing.
    pub fn destroy(&self) {
        self.with_state(|s| {
            s.stop_timer();
            s.destroyed = true;
        });
        if !self.is_inert() {
            info!("Carousel destroyed");
        }
    }
}
