//! Rotating slide widget with auto-play, swipe and keyboard control.
//!
//! The [`engine`] is host-agnostic; [`dom`] binds it to the browser and
//! [`js_api`] exposes it to page scripts.

pub mod dom;
pub mod engine;
pub mod factory;
pub mod host;
pub mod input;
pub mod js_api;
pub mod transition;

#[cfg(test)]
pub(crate) mod testing;

pub use dom::create_carousel;
pub use factory::{CarouselOptions, SlideDescriptor};
pub use transition::TransitionKind;
