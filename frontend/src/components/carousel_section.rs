use log::warn;
use yew::prelude::*;

use crate::carousel::{create_carousel, CarouselOptions, SlideDescriptor, TransitionKind};

#[derive(Properties, PartialEq)]
pub struct CarouselSectionProps {
    /// Id of the mount point; the carousel itself gets `{id}-carousel`.
    pub id: AttrValue,
    pub slides: Vec<SlideDescriptor>,
    #[prop_or_default]
    pub kind: TransitionKind,
}

/// Mount point that builds a carousel after render and destroys it on unmount.
#[function_component(CarouselSection)]
pub fn carousel_section(props: &CarouselSectionProps) -> Html {
    {
        let deps = (props.id.clone(), props.slides.clone(), props.kind);
        use_effect_with_deps(
            move |(id, slides, kind): &(AttrValue, Vec<SlideDescriptor>, TransitionKind)| {
                let handle = create_carousel(id, slides, CarouselOptions::of_kind(*kind));
                if handle.is_none() {
                    warn!("Carousel mount point #{} not in the DOM", id);
                }
                move || {
                    if let Some(handle) = handle {
                        handle.destroy();
                    }
                }
            },
            deps,
        );
    }

    html! {
        <div id={props.id.clone()} class="carousel-container"></div>
    }
}
