use gloo_timers::callback::Timeout;
use yew::prelude::*;

pub const LOAD_MORE_RESET_MS: u32 = 3000;

pub fn load_more_label(exhausted: bool) -> &'static str {
    if exhausted {
        "No more posts to load"
    } else {
        "Load More Posts"
    }
}

/// Placeholder until posts come from somewhere: says there is nothing more,
/// then re-arms itself.
#[function_component(LoadMoreButton)]
pub fn load_more_button() -> Html {
    let exhausted = use_state_eq(|| false);

    let onclick = {
        let exhausted = exhausted.clone();
        Callback::from(move |_: MouseEvent| {
            exhausted.set(true);
            let setter = exhausted.setter();
            Timeout::new(LOAD_MORE_RESET_MS, move || {
                setter.set(false);
            })
            .forget();
        })
    };

    html! {
        <button class="btn btn-secondary load-more-btn" disabled={*exhausted} {onclick}>
            {load_more_label(*exhausted)}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_follows_state() {
        assert_eq!(load_more_label(false), "Load More Posts");
        assert_eq!(load_more_label(true), "No more posts to load");
    }
}
