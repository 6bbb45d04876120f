//! `new Carousel(id)` / `createCarousel(id, slides, options)` for plain
//! page scripts.

use log::warn;
use wasm_bindgen::prelude::*;

use super::dom::{self, CarouselHandle};
use super::factory::{CarouselOptions, SlideDescriptor};

/// JS numbers that are not whole, non-negative and in `usize` range can't be
/// slide indexes.
pub fn slide_index(raw: f64) -> Option<usize> {
    if raw.is_finite() && raw >= 0.0 && raw.fract() == 0.0 && raw <= usize::MAX as f64 {
        Some(raw as usize)
    } else {
        None
    }
}

#[wasm_bindgen(js_name = Carousel)]
pub struct JsCarousel {
    handle: CarouselHandle,
}

#[wasm_bindgen(js_class = Carousel)]
impl JsCarousel {
    #[wasm_bindgen(constructor)]
    pub fn new(carousel_id: &str) -> JsCarousel {
        JsCarousel { handle: dom::mount(carousel_id) }
    }

    #[wasm_bindgen(js_name = nextSlide)]
    pub fn next_slide(&self) {
        self.handle.next_slide();
    }

    #[wasm_bindgen(js_name = previousSlide)]
    pub fn previous_slide(&self) {
        self.handle.previous_slide();
    }

    #[wasm_bindgen(js_name = goToSlide)]
    pub fn go_to_slide(&self, index: f64) {
        if let Some(index) = slide_index(index) {
            self.handle.go_to_slide(index);
        }
    }

    #[wasm_bindgen(js_name = startAutoPlay)]
    pub fn start_auto_play(&self) {
        self.handle.start_auto_play();
    }

    #[wasm_bindgen(js_name = pauseAutoPlay)]
    pub fn pause_auto_play(&self) {
        self.handle.pause_auto_play();
    }

    #[wasm_bindgen(js_name = toggleAutoPlay)]
    pub fn toggle_auto_play(&self) {
        self.handle.toggle_auto_play();
    }

    #[wasm_bindgen(getter, js_name = currentIndex)]
    pub fn current_index(&self) -> usize {
        self.handle.current_index()
    }

    /// `"default"`, `"fade"` or `"progress"`; undefined for an inert carousel.
    #[wasm_bindgen(getter)]
    pub fn transition(&self) -> Option<String> {
        self.handle.transition_kind().map(|kind| kind.as_str().to_string())
    }

    pub fn destroy(&self) {
        self.handle.destroy();
    }
}

#[wasm_bindgen(js_name = createCarousel)]
pub fn create_carousel(container_id: &str, slides: JsValue, options: JsValue) -> Option<JsCarousel> {
    let slides: Vec<SlideDescriptor> = match serde_wasm_bindgen::from_value(slides) {
        Ok(slides) => slides,
        Err(e) => {
            warn!("createCarousel({}): bad slide list: {}", container_id, e);
            Vec::new()
        }
    };
    let options: CarouselOptions = if options.is_undefined() || options.is_null() {
        CarouselOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options).unwrap_or_else(|e| {
            warn!("createCarousel({}): bad options, using defaults: {}", container_id, e);
            CarouselOptions::default()
        })
    };
    dom::create_carousel(container_id, &slides, options).map(|handle| JsCarousel { handle })
}

#[wasm_bindgen(js_name = mountAllCarousels)]
pub fn mount_all_carousels() -> usize {
    let handles = dom::mount_all();
    let count = handles.len();
    // Page-lifetime carousels: nothing will ever tear them down
    std::mem::forget(handles);
    count
}
