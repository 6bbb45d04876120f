use yew::prelude::*;

use crate::components::load_more::LoadMoreButton;
use crate::effects::use_scroll_effects;

const POSTS: &[(&str, &str, &str)] = &[
    ("Surviving your first semester", "/assets/first-semester.jpg", "Registration, timetables and where to find cheap food."),
    ("How the hostel ballot works", "/assets/hostels.jpg", "What the portal does not tell you about picking a room."),
    ("Five places to read that aren't the library", "/assets/reading.jpg", "Quiet corners around campus, ranked."),
];

#[function_component(Blog)]
pub fn blog() -> Html {
    use_scroll_effects();

    html! {
        <div class="blog-page section">
            <h1>{"Gist"}</h1>
            <div class="posts-grid">
                { for POSTS.iter().map(|(title, image, summary)| html! {
                    <article class="post-card">
                        <img class="lazy" data-src={*image} alt={*title} />
                        <h3>{*title}</h3>
                        <p>{*summary}</p>
                    </article>
                }) }
            </div>
            <LoadMoreButton />
        </div>
    }
}
