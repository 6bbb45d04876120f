//! Browser host for the carousel.
//!
//! [`DomSurface`] maps slide state onto class lists and inline styles,
//! [`BrowserScheduler`] wraps `gloo-timers`, and [`CarouselHandle`] owns the
//! event listeners of one mounted instance so they can be released with it.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::ops::Deref;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, KeyboardEvent, Node, TouchEvent};

use super::engine::Carousel;
use super::factory::{
    carousel_id, slide_class, CarouselOptions, SlideDescriptor, ACTIVE_CLASS, CAROUSEL_CLASS,
    INDICATORS_CLASS, INDICATOR_CLASS, NEXT_BUTTON_CLASS, PREV_BUTTON_CLASS, PROGRESS_CLASS,
    PROGRESS_FILL_CLASS, SLIDE_CLASS, TRACK_CLASS,
};
use super::host::{ProgressFrame, Scheduler, SlideSurface, TimerHandle};
use super::input::{KeyCommand, SwipeTracker};
use super::transition::TransitionKind;
use crate::config::CarouselConfig;
use crate::error::{create_html, document, UiError};

const CONFIG_ATTR: &str = "data-carousel-config";
const TYPE_ATTR: &str = "data-carousel-type";

fn log_failure(result: Result<(), JsValue>, what: &str) {
    if let Err(e) = result {
        warn!("Carousel: failed to {}: {}", what, UiError::from(e));
    }
}

fn query_html(root: &Element, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn query_all_html(root: &Element, selector: &str) -> Result<Vec<HtmlElement>, UiError> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

pub struct DomSurface {
    root: HtmlElement,
    slides: Vec<HtmlElement>,
    indicator_container: Option<HtmlElement>,
    indicators: RefCell<Vec<HtmlElement>>,
    progress_fill: RefCell<Option<HtmlElement>>,
}

impl DomSurface {
    pub fn from_root(root: HtmlElement) -> Result<Self, UiError> {
        let slides = query_all_html(&root, &format!(".{}", SLIDE_CLASS))?;
        let indicator_container = query_html(&root, &format!(".{}", INDICATORS_CLASS));
        Ok(Self {
            root,
            slides,
            indicator_container,
            indicators: RefCell::new(Vec::new()),
            progress_fill: RefCell::new(None),
        })
    }

    fn indicators(&self) -> Vec<HtmlElement> {
        self.indicators.borrow().clone()
    }

    fn build_progress_bar(&self) -> Result<HtmlElement, UiError> {
        let document = self.root.owner_document().ok_or(UiError::NoDocument)?;
        let bar = create_html(&document, "div", PROGRESS_CLASS)?;
        bar.style().set_css_text(
            "position: absolute; bottom: 0; left: 0; right: 0; height: 4px; \
             background-color: rgba(255, 255, 255, 0.3);",
        );
        let fill = create_html(&document, "div", PROGRESS_FILL_CLASS)?;
        fill.style().set_css_text(
            "height: 100%; background-color: var(--primary-color); width: 0%; transition: none;",
        );
        bar.append_child(&fill)?;
        self.root.style().set_property("position", "relative")?;
        self.root.append_child(&bar)?;
        Ok(fill)
    }
}

impl SlideSurface for DomSurface {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn set_slide_active(&self, index: usize, active: bool) {
        if let Some(slide) = self.slides.get(index) {
            log_failure(
                slide.class_list().toggle_with_force(ACTIVE_CLASS, active).map(|_| ()),
                "toggle slide class",
            );
        }
    }

    fn set_slide_opacity(&self, index: usize, opacity: f64) {
        if let Some(slide) = self.slides.get(index) {
            log_failure(
                slide.style().set_property("opacity", &opacity.to_string()),
                "set slide opacity",
            );
        }
    }

    fn create_indicators(&self, count: usize) {
        let Some(container) = &self.indicator_container else {
            return;
        };
        let Some(document) = container.owner_document() else {
            return;
        };
        container.set_inner_html("");

        let mut indicators = self.indicators.borrow_mut();
        indicators.clear();
        for i in 0..count {
            match create_html(&document, "div", INDICATOR_CLASS) {
                Ok(indicator) => {
                    log_failure(
                        indicator.set_attribute("aria-label", &format!("Go to slide {}", i + 1)),
                        "label indicator",
                    );
                    log_failure(container.append_child(&indicator).map(|_| ()), "append indicator");
                    indicators.push(indicator);
                }
                Err(e) => warn!("Carousel: could not create indicator {}: {}", i, e),
            }
        }
    }

    fn indicator_count(&self) -> usize {
        self.indicators.borrow().len()
    }

    fn set_indicator_active(&self, index: usize, active: bool) {
        if let Some(indicator) = self.indicators.borrow().get(index) {
            log_failure(
                indicator.class_list().toggle_with_force(ACTIVE_CLASS, active).map(|_| ()),
                "toggle indicator class",
            );
        }
    }

    fn mount_progress_bar(&self) -> bool {
        match self.build_progress_bar() {
            Ok(fill) => {
                *self.progress_fill.borrow_mut() = Some(fill);
                true
            }
            Err(e) => {
                warn!("Carousel: progress bar unavailable: {}", e);
                false
            }
        }
    }

    fn set_progress(&self, frame: ProgressFrame) {
        if let Some(fill) = self.progress_fill.borrow().as_ref() {
            let style = fill.style();
            log_failure(style.set_property("transition", &frame.css_transition()), "set progress transition");
            log_failure(style.set_property("width", &frame.css_width()), "set progress width");
        }
    }
}

/// `setInterval`/`setTimeout` through gloo. One scheduler per carousel, so
/// timers never leak between instances.
#[derive(Default)]
pub struct BrowserScheduler {
    next_id: Cell<u64>,
    intervals: RefCell<HashMap<TimerHandle, Interval>>,
}

impl Scheduler for BrowserScheduler {
    fn schedule_repeating(&self, every_ms: u32, mut callback: Box<dyn FnMut()>) -> TimerHandle {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let handle = TimerHandle(id);
        let interval = Interval::new(every_ms, move || callback());
        self.intervals.borrow_mut().insert(handle, interval);
        handle
    }

    fn schedule_once(&self, after_ms: u32, callback: Box<dyn FnOnce()>) {
        Timeout::new(after_ms, callback).forget();
    }

    fn cancel(&self, handle: TimerHandle) {
        // dropping the Interval clears it
        let cancelled = self.intervals.borrow_mut().remove(&handle);
        drop(cancelled);
    }
}

/// An event listener that unregisters itself when dropped.
struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn bind(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, UiError> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), event, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// A carousel mounted on real DOM plus the listeners it registered.
///
/// Derefs to [`Carousel`] for navigation. [`destroy`](Self::destroy) stops the
/// timer and unregisters this instance's listeners only.
#[derive(Clone)]
pub struct CarouselHandle {
    carousel: Carousel,
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl PartialEq for CarouselHandle {
    fn eq(&self, other: &Self) -> bool {
        self.carousel == other.carousel
    }
}

impl Deref for CarouselHandle {
    type Target = Carousel;

    fn deref(&self) -> &Carousel {
        &self.carousel
    }
}

impl CarouselHandle {
    fn inert() -> Self {
        Self { carousel: Carousel::inert(), listeners: Rc::new(RefCell::new(Vec::new())) }
    }

    pub fn destroy(&self) {
        self.carousel.destroy();
        let released = std::mem::take(&mut *self.listeners.borrow_mut());
        debug!("Released {} carousel listeners", released.len());
        drop(released);
    }
}

fn focus_within(root: &Node) -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element())
        .map(|active| {
            let active: &Node = active.as_ref();
            root.contains(Some(active))
        })
        .unwrap_or(false)
}

fn bind_inputs(
    root: &HtmlElement,
    surface: &DomSurface,
    carousel: &Carousel,
    config: &CarouselConfig,
) -> Result<Vec<Listener>, UiError> {
    let mut listeners = Vec::new();

    if let Some(prev) = query_html(root, ".carousel-btn.prev") {
        let carousel = carousel.clone();
        listeners.push(Listener::bind(&prev, "click", move |_| carousel.previous_slide())?);
    }
    if let Some(next) = query_html(root, ".carousel-btn.next") {
        let carousel = carousel.clone();
        listeners.push(Listener::bind(&next, "click", move |_| carousel.next_slide())?);
    }

    for (i, indicator) in surface.indicators().into_iter().enumerate() {
        let carousel = carousel.clone();
        listeners.push(Listener::bind(&indicator, "click", move |_| carousel.go_to_slide(i))?);
    }

    {
        let carousel = carousel.clone();
        listeners.push(Listener::bind(root, "mouseenter", move |_| carousel.pointer_enter())?);
    }
    {
        let carousel = carousel.clone();
        listeners.push(Listener::bind(root, "mouseleave", move |_| carousel.pointer_leave())?);
    }

    let tracker = Rc::new(RefCell::new(SwipeTracker::new(config.swipe_threshold_px)));
    {
        let tracker = Rc::clone(&tracker);
        listeners.push(Listener::bind(root, "touchstart", move |event: Event| {
            if let Some(touch) = event.dyn_ref::<TouchEvent>().and_then(|t| t.touches().item(0)) {
                tracker
                    .borrow_mut()
                    .begin(f64::from(touch.client_x()), f64::from(touch.client_y()));
            }
        })?);
    }
    {
        let carousel = carousel.clone();
        listeners.push(Listener::bind(root, "touchend", move |event: Event| {
            let Some(touch) = event.dyn_ref::<TouchEvent>().and_then(|t| t.changed_touches().item(0)) else {
                return;
            };
            let swipe = tracker
                .borrow_mut()
                .end(f64::from(touch.client_x()), f64::from(touch.client_y()));
            if let Some(direction) = swipe {
                carousel.swipe(direction);
            }
        })?);
    }

    // Scoped to the root: key events only reach it from focused descendants
    {
        let carousel = carousel.clone();
        let root_node: Node = root.clone().into();
        listeners.push(Listener::bind(root, "keydown", move |event: Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if !focus_within(&root_node) {
                return;
            }
            if let Some(command) = KeyCommand::from_key(&event.key()) {
                event.prevent_default();
                carousel.handle_key(command);
            }
        })?);
    }

    Ok(listeners)
}

/// Starts a carousel on existing markup.
pub fn mount_element(root: HtmlElement, options: CarouselOptions) -> CarouselHandle {
    let surface = match DomSurface::from_root(root.clone()) {
        Ok(surface) => Rc::new(surface),
        Err(e) => {
            warn!("Carousel: could not read slides: {}", e);
            return CarouselHandle::inert();
        }
    };
    if !root.has_attribute("tabindex") {
        log_failure(root.set_attribute("tabindex", "0"), "make carousel focusable");
    }

    let config = options.config.normalized();
    let carousel = Carousel::mount(
        surface.clone(),
        Rc::new(BrowserScheduler::default()),
        options.kind.build(),
        config.clone(),
    );
    if carousel.is_inert() {
        return CarouselHandle { carousel, listeners: Rc::new(RefCell::new(Vec::new())) };
    }

    let listeners = match bind_inputs(&root, &surface, &carousel, &config) {
        Ok(listeners) => listeners,
        Err(e) => {
            warn!("Carousel: input handling disabled: {}", e);
            Vec::new()
        }
    };
    CarouselHandle { carousel, listeners: Rc::new(RefCell::new(listeners)) }
}

/// Reads strategy and tuning from the element's data attributes.
fn options_from_attributes(root: &Element) -> CarouselOptions {
    let kind = root
        .get_attribute(TYPE_ATTR)
        .map(|name| TransitionKind::parse(&name))
        .unwrap_or_default();
    let config = root
        .get_attribute(CONFIG_ATTR)
        .map(|raw| CarouselConfig::from_json(&raw))
        .unwrap_or_default();
    CarouselOptions { kind, config }
}

/// Starts a carousel on the element with `carousel_id`. A missing element
/// gives an inert handle.
pub fn mount(carousel_id: &str) -> CarouselHandle {
    let root = document()
        .ok()
        .and_then(|d| d.get_element_by_id(carousel_id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    match root {
        Some(root) => {
            let options = options_from_attributes(&root);
            mount_element(root, options)
        }
        None => {
            debug!("No carousel element #{}", carousel_id);
            CarouselHandle::inert()
        }
    }
}

/// Starts every `.carousel` with an id on the page.
pub fn mount_all() -> Vec<CarouselHandle> {
    let Ok(document) = document() else {
        return Vec::new();
    };
    let Some(body) = document.body() else {
        return Vec::new();
    };
    match query_all_html(&body, &format!(".{}[id]", CAROUSEL_CLASS)) {
        Ok(roots) => {
            info!("Mounting {} carousels", roots.len());
            roots
                .into_iter()
                .map(|root| {
                    let options = options_from_attributes(&root);
                    mount_element(root, options)
                })
                .collect()
        }
        Err(e) => {
            warn!("Carousel lookup failed: {}", e);
            Vec::new()
        }
    }
}

fn append_icon(document: &Document, parent: &Element, class: &str) -> Result<(), UiError> {
    let icon = document.create_element("i")?;
    icon.set_class_name(class);
    parent.append_child(&icon)?;
    Ok(())
}

fn render_slide(document: &Document, index: usize, slide: &SlideDescriptor) -> Result<HtmlElement, UiError> {
    let slide_el = create_html(document, "div", &slide_class(index))?;
    let content = create_html(document, "div", "slide-content")?;

    let image = create_html(document, "div", "slide-image")?;
    append_icon(document, &image, slide.icon_class())?;
    content.append_child(&image)?;

    let text = create_html(document, "div", "slide-text")?;
    let title = document.create_element("h3")?;
    title.set_text_content(Some(&slide.title));
    text.append_child(&title)?;
    let description = document.create_element("p")?;
    description.set_text_content(Some(&slide.description));
    text.append_child(&description)?;
    if let Some((label, link)) = slide.button() {
        let button = document.create_element("a")?;
        button.set_class_name("btn btn-primary");
        button.set_attribute("href", link)?;
        button.set_text_content(Some(label));
        text.append_child(&button)?;
    }
    content.append_child(&text)?;

    slide_el.append_child(&content)?;
    Ok(slide_el)
}

/// Replaces the container's content with carousel markup and returns the
/// new carousel element.
fn render_markup(
    document: &Document,
    container: &Element,
    container_id: &str,
    slides: &[SlideDescriptor],
) -> Result<HtmlElement, UiError> {
    let root = create_html(document, "div", CAROUSEL_CLASS)?;
    root.set_id(&carousel_id(container_id));

    let track = create_html(document, "div", TRACK_CLASS)?;
    for (i, slide) in slides.iter().enumerate() {
        let slide_el = render_slide(document, i, slide)?;
        track.append_child(&slide_el)?;
    }
    root.append_child(&track)?;

    for (class, icon, label) in [
        (PREV_BUTTON_CLASS, "fas fa-chevron-left", "Previous slide"),
        (NEXT_BUTTON_CLASS, "fas fa-chevron-right", "Next slide"),
    ] {
        let button = create_html(document, "button", class)?;
        button.set_attribute("aria-label", label)?;
        append_icon(document, &button, icon)?;
        root.append_child(&button)?;
    }

    let indicators = create_html(document, "div", INDICATORS_CLASS)?;
    root.append_child(&indicators)?;

    container.set_inner_html("");
    container.append_child(&root)?;
    Ok(root)
}

/// Builds a carousel from a slide list inside `container_id`.
///
/// Returns `None` when the container doesn't exist.
pub fn create_carousel(
    container_id: &str,
    slides: &[SlideDescriptor],
    options: CarouselOptions,
) -> Option<CarouselHandle> {
    let document = match document() {
        Ok(document) => document,
        Err(e) => {
            warn!("createCarousel({}): {}", container_id, e);
            return None;
        }
    };
    let container = document.get_element_by_id(container_id)?;

    match render_markup(&document, &container, container_id, slides) {
        Ok(root) => Some(mount_element(root, options)),
        Err(e) => {
            warn!("createCarousel({}): could not build markup: {}", container_id, e);
            None
        }
    }
}
