//! In-memory host for exercising the carousel without a browser.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::host::{ProgressFrame, Scheduler, SlideSurface, TimerHandle};

/// Records every visual change the engine asks for.
pub struct FakeSurface {
    slides: RefCell<Vec<bool>>,
    opacity: RefCell<Vec<Option<f64>>>,
    has_indicator_container: bool,
    indicators: RefCell<Vec<bool>>,
    progress_host: bool,
    progress_mounted: Cell<bool>,
    progress: RefCell<Vec<ProgressFrame>>,
    writes: Cell<usize>,
}

impl FakeSurface {
    pub fn new(slide_count: usize) -> Rc<Self> {
        Rc::new(Self::build(slide_count, true))
    }

    pub fn without_indicators(slide_count: usize) -> Rc<Self> {
        Rc::new(Self::build(slide_count, false))
    }

    fn build(slide_count: usize, has_indicator_container: bool) -> Self {
        Self {
            slides: RefCell::new(vec![false; slide_count]),
            opacity: RefCell::new(vec![None; slide_count]),
            has_indicator_container,
            indicators: RefCell::new(Vec::new()),
            progress_host: true,
            progress_mounted: Cell::new(false),
            progress: RefCell::new(Vec::new()),
            writes: Cell::new(0),
        }
    }

    pub fn active_slides(&self) -> Vec<usize> {
        flagged(&self.slides.borrow())
    }

    pub fn active_indicators(&self) -> Vec<usize> {
        flagged(&self.indicators.borrow())
    }

    pub fn opacity(&self, index: usize) -> Option<f64> {
        self.opacity.borrow()[index]
    }

    pub fn progress_mounted(&self) -> bool {
        self.progress_mounted.get()
    }

    pub fn progress_frames(&self) -> Vec<ProgressFrame> {
        self.progress.borrow().clone()
    }

    pub fn clear_progress_frames(&self) {
        self.progress.borrow_mut().clear();
    }

    /// Number of visual mutations so far.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    fn touch(&self) {
        self.writes.set(self.writes.get() + 1);
    }
}

fn flagged(flags: &[bool]) -> Vec<usize> {
    flags
        .iter()
        .enumerate()
        .filter_map(|(i, on)| on.then_some(i))
        .collect()
}

impl SlideSurface for FakeSurface {
    fn slide_count(&self) -> usize {
        self.slides.borrow().len()
    }

    fn set_slide_active(&self, index: usize, active: bool) {
        self.touch();
        self.slides.borrow_mut()[index] = active;
    }

    fn set_slide_opacity(&self, index: usize, opacity: f64) {
        self.touch();
        self.opacity.borrow_mut()[index] = Some(opacity);
    }

    fn create_indicators(&self, count: usize) {
        if self.has_indicator_container {
            *self.indicators.borrow_mut() = vec![false; count];
        }
    }

    fn indicator_count(&self) -> usize {
        self.indicators.borrow().len()
    }

    fn set_indicator_active(&self, index: usize, active: bool) {
        self.touch();
        self.indicators.borrow_mut()[index] = active;
    }

    fn mount_progress_bar(&self) -> bool {
        self.progress_mounted.set(self.progress_host);
        self.progress_host
    }

    fn set_progress(&self, frame: ProgressFrame) {
        self.touch();
        self.progress.borrow_mut().push(frame);
    }
}

struct Repeating {
    handle: TimerHandle,
    every: u64,
    next_due: u64,
    callback: Rc<RefCell<Box<dyn FnMut()>>>,
}

struct Once {
    due: u64,
    callback: Box<dyn FnOnce()>,
}

/// Virtual-time scheduler: nothing fires until [`ManualClock::advance`].
#[derive(Default)]
pub struct ManualClock {
    now: Cell<u64>,
    next_id: Cell<u64>,
    repeating: RefCell<Vec<Repeating>>,
    once: RefCell<Vec<Once>>,
}

enum Due {
    Once(usize),
    Repeating(usize),
}

impl ManualClock {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Repeating timers currently scheduled.
    pub fn active_timers(&self) -> usize {
        self.repeating.borrow().len()
    }

    pub fn pending_once(&self) -> usize {
        self.once.borrow().len()
    }

    /// Moves time forward, firing everything that comes due in order.
    pub fn advance(&self, ms: u64) {
        let target = self.now.get() + ms;
        while let Some((at, due)) = self.earliest(target) {
            self.now.set(at);
            match due {
                Due::Once(i) => {
                    let once = self.once.borrow_mut().remove(i);
                    (once.callback)();
                }
                Due::Repeating(i) => {
                    let callback = {
                        let mut repeating = self.repeating.borrow_mut();
                        let timer = &mut repeating[i];
                        timer.next_due += timer.every;
                        Rc::clone(&timer.callback)
                    };
                    (&mut *callback.borrow_mut())();
                }
            }
        }
        self.now.set(target);
    }

    // One-shots win ties so a fade settles before the next tick lands.
    fn earliest(&self, limit: u64) -> Option<(u64, Due)> {
        let once = self
            .once
            .borrow()
            .iter()
            .enumerate()
            .min_by_key(|(_, o)| o.due)
            .map(|(i, o)| (o.due, i));
        let repeating = self
            .repeating
            .borrow()
            .iter()
            .enumerate()
            .min_by_key(|(_, r)| r.next_due)
            .map(|(i, r)| (r.next_due, i));

        match (once, repeating) {
            (Some((at, i)), Some((r_at, _))) if at <= r_at && at <= limit => Some((at, Due::Once(i))),
            (Some((at, i)), None) if at <= limit => Some((at, Due::Once(i))),
            (_, Some((at, i))) if at <= limit => Some((at, Due::Repeating(i))),
            _ => None,
        }
    }
}

impl Scheduler for ManualClock {
    fn schedule_repeating(&self, every_ms: u32, callback: Box<dyn FnMut()>) -> TimerHandle {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let every = u64::from(every_ms.max(1));
        let handle = TimerHandle(id);
        self.repeating.borrow_mut().push(Repeating {
            handle,
            every,
            next_due: self.now.get() + every,
            callback: Rc::new(RefCell::new(callback)),
        });
        handle
    }

    fn schedule_once(&self, after_ms: u32, callback: Box<dyn FnOnce()>) {
        self.once.borrow_mut().push(Once {
            due: self.now.get() + u64::from(after_ms),
            callback,
        });
    }

    fn cancel(&self, handle: TimerHandle) {
        self.repeating.borrow_mut().retain(|r| r.handle != handle);
    }
}
