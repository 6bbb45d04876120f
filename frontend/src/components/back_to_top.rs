use web_sys::{window, Event, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

pub const BACK_TO_TOP_OFFSET: f64 = 300.0;

pub fn back_to_top_visible(page_offset: f64) -> bool {
    page_offset > BACK_TO_TOP_OFFSET
}

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_event_with_window("scroll", move |_: Event| {
            let offset = window()
                .and_then(|w| w.page_y_offset().ok())
                .unwrap_or(0.0);
            visible.set(back_to_top_visible(offset));
        });
    }

    let onclick = Callback::from(|_: MouseEvent| {
        if let Some(window) = window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    let display = if *visible { "display: block;" } else { "display: none;" };

    html! {
        <button class="back-to-top" aria-label="Back to top" style={display} {onclick}>
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}
