//! Page-wide scroll behavior: card fade-ins, lazy images and smooth anchors.
//! Images that fail to load are hidden.
//!
//! [`ScrollEffects::install`] wires everything once per page view; dropping
//! the returned value disconnects the observers and listeners again.

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, Event, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use yew::prelude::*;

use crate::error::{document, UiError};

pub const ANIMATED_CARD_SELECTOR: &str = ".feature-card, .ticket-card, .ad-card, .post-card, \
    .service-card, .value-card, .team-card, .category-card, .info-card";
pub const FADE_IN_CLASS: &str = "fade-in";
pub const FADE_IN_THRESHOLD: f64 = 0.1;
pub const FADE_IN_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";

/// Resource `error` events don't bubble, so the page-wide handler listens in
/// the capture phase and only acts on images.
fn hides_on_load_error(tag_name: &str) -> bool {
    tag_name.eq_ignore_ascii_case("img")
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Element id targeted by an in-page link, if `href` is one.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

fn intersecting_targets(entries: &Array) -> Vec<Element> {
    entries
        .iter()
        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
        .filter(|entry| entry.is_intersecting())
        .map(|entry| entry.target())
        .collect()
}

fn observe_all(document: &Document, observer: &IntersectionObserver, selector: &str) -> Result<u32, UiError> {
    let nodes = document.query_selector_all(selector)?;
    for i in 0..nodes.length() {
        if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            observer.observe(&element);
        }
    }
    Ok(nodes.length())
}

pub struct ScrollEffects {
    observers: Vec<(IntersectionObserver, ObserverCallback)>,
    document: Document,
    anchor_click: Option<Closure<dyn FnMut(Event)>>,
    image_error: Option<Closure<dyn FnMut(Event)>>,
}

impl ScrollEffects {
    pub fn install() -> Result<Self, UiError> {
        let document = document()?;
        let mut effects = ScrollEffects {
            observers: Vec::new(),
            document: document.clone(),
            anchor_click: None,
            image_error: None,
        };

        // Cards fade in the first time they scroll into view
        let fade_callback: ObserverCallback = Closure::wrap(Box::new(|entries: Array, _observer: IntersectionObserver| {
            for target in intersecting_targets(&entries) {
                let _ = target.class_list().add_1(FADE_IN_CLASS);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(FADE_IN_THRESHOLD));
        options.set_root_margin(FADE_IN_ROOT_MARGIN);
        let fade_observer =
            IntersectionObserver::new_with_options(fade_callback.as_ref().unchecked_ref(), &options)?;
        let cards = observe_all(&document, &fade_observer, ANIMATED_CARD_SELECTOR)?;
        effects.observers.push((fade_observer, fade_callback));

        // Lazy images swap data-src in once, then stop being watched
        let lazy_callback: ObserverCallback = Closure::wrap(Box::new(|entries: Array, observer: IntersectionObserver| {
            for target in intersecting_targets(&entries) {
                if let Some(image) = target.dyn_ref::<HtmlImageElement>() {
                    if let Some(src) = image.get_attribute("data-src") {
                        image.set_src(&src);
                    }
                    let _ = image.class_list().remove_1("lazy");
                }
                observer.unobserve(&target);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);
        let lazy_observer = IntersectionObserver::new(lazy_callback.as_ref().unchecked_ref())?;
        let images = observe_all(&document, &lazy_observer, LAZY_IMAGE_SELECTOR)?;
        effects.observers.push((lazy_observer, lazy_callback));

        let anchor_click = Closure::wrap(Box::new(|event: Event| {
            scroll_to_anchor(&event);
        }) as Box<dyn FnMut(Event)>);
        document.add_event_listener_with_callback("click", anchor_click.as_ref().unchecked_ref())?;
        effects.anchor_click = Some(anchor_click);

        let image_error = Closure::wrap(Box::new(|event: Event| {
            hide_failed_image(&event);
        }) as Box<dyn FnMut(Event)>);
        document.add_event_listener_with_callback_and_bool(
            "error",
            image_error.as_ref().unchecked_ref(),
            true,
        )?;
        effects.image_error = Some(image_error);

        debug!("Scroll effects watching {} cards and {} lazy images", cards, images);
        Ok(effects)
    }
}

fn scroll_to_anchor(event: &Event) {
    let Some(link) = event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("a[href^='#']").ok().flatten())
    else {
        return;
    };
    let Some(href) = link.get_attribute("href") else {
        return;
    };
    let Some(id) = anchor_target(&href) else {
        return;
    };
    let Some(target) = link.owner_document().and_then(|d| d.get_element_by_id(id)) else {
        warn!("Anchor #{} has no target", id);
        return;
    };
    event.prevent_default();
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

fn hide_failed_image(event: &Event) {
    let Some(element) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return;
    };
    if !hides_on_load_error(&element.tag_name()) {
        return;
    }
    let Some(image) = element.dyn_ref::<HtmlImageElement>() else {
        return;
    };
    warn!("Image failed to load: {}", image.src());
    if let Err(e) = image.style().set_property("display", "none") {
        debug!("Could not hide broken image: {:?}", e);
    }
}

impl Drop for ScrollEffects {
    fn drop(&mut self) {
        for (observer, _) in &self.observers {
            observer.disconnect();
        }
        if let Some(callback) = &self.anchor_click {
            let _ = self
                .document
                .remove_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
        }
        if let Some(callback) = &self.image_error {
            let _ = self.document.remove_event_listener_with_callback_and_bool(
                "error",
                callback.as_ref().unchecked_ref(),
                true,
            );
        }
    }
}

/// Installs [`ScrollEffects`] for the lifetime of the calling page.
#[hook]
pub fn use_scroll_effects() {
    use_effect_with_deps(
        |_| {
            let effects = match ScrollEffects::install() {
                Ok(effects) => Some(effects),
                Err(e) => {
                    warn!("Scroll effects disabled: {}", e);
                    None
                }
            };
            move || drop(effects)
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_non_empty_hash_links_are_anchors() {
        assert_eq!(anchor_target("#events"), Some("events"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/blog#top"), None);
        assert_eq!(anchor_target("events"), None);
    }

    #[test]
    fn load_errors_hide_images_only() {
        assert!(hides_on_load_error("IMG"));
        assert!(hides_on_load_error("img"));
        assert!(!hides_on_load_error("SCRIPT"));
        assert!(!hides_on_load_error("LINK"));
        assert!(!hides_on_load_error("VIDEO"));
    }
}
