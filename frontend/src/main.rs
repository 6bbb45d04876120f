use log::info;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Node};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

mod carousel;
mod config;
mod effects;
mod error;
mod theme;
mod whatsapp;

mod components {
    pub mod back_to_top;
    pub mod carousel_section;
    pub mod load_more;
}

mod pages {
    pub mod blog;
    pub mod business;
    pub mod contact;
    pub mod events;
    pub mod home;
}

use components::back_to_top::BackToTop;
use pages::{blog::Blog, business::Business, contact::Contact, events::Events, home::Home};
use theme::ThemeToggle;
use whatsapp::WhatsAppLink;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/events")]
    Events,
    #[at("/business")]
    Business,
    #[at("/blog")]
    Blog,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

const NAV_LINKS: &[(Route, &str)] = &[
    (Route::Home, "Home"),
    (Route::Events, "Events"),
    (Route::Business, "Businesses"),
    (Route::Blog, "Blog"),
    (Route::Contact, "Contact"),
];

// Above this width the menu is always laid out inline
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

fn menu_closes_on_resize(viewport_width: f64) -> bool {
    viewport_width > MOBILE_BREAKPOINT_PX
}

fn is_active_link(current: Option<&Route>, link: &Route) -> bool {
    match current {
        Some(Route::NotFound) | None => *link == Route::Home,
        Some(route) => route == link,
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::NotFound => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Events => {
            info!("Rendering Events page");
            html! { <Events /> }
        }
        Route::Business => {
            info!("Rendering Business page");
            html! { <Business /> }
        }
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state_eq(|| false);
    let current = use_route::<Route>();
    let hamburger_ref = use_node_ref();
    let menu_ref = use_node_ref();

    // Clicking anywhere outside the burger and the menu closes it
    {
        let menu_open = menu_open.clone();
        let hamburger_ref = hamburger_ref.clone();
        let menu_ref = menu_ref.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = |node_ref: &NodeRef| {
                node_ref
                    .get()
                    .map(|node| node.contains(target.as_ref()))
                    .unwrap_or(false)
            };
            if !inside(&hamburger_ref) && !inside(&menu_ref) {
                menu_open.set(false);
            }
        });
    }

    {
        let menu_open = menu_open.clone();
        use_event_with_window("resize", move |_: Event| {
            let width = web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|w| w.as_f64())
                .unwrap_or(0.0);
            if menu_closes_on_resize(width) {
                menu_open.set(false);
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let open = (*menu_open).then(|| "active");

    html! {
        <nav class="navbar">
            <div class="nav-container">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {config::SITE_NAME}
                </Link<Route>>

                <div id="nav-menu" ref={menu_ref} class={classes!("nav-menu", open)}>
                    { for NAV_LINKS.iter().map(|(route, label)| {
                        let active = is_active_link(current.as_ref(), route).then(|| "active");
                        html! {
                            <div onclick={close_menu.clone()}>
                                <Link<Route> to={route.clone()} classes={classes!("nav-link", active)}>
                                    {*label}
                                </Link<Route>>
                            </div>
                        }
                    }) }
                </div>

                <ThemeToggle />

                <button id="hamburger" ref={hamburger_ref} class={classes!("hamburger", open)} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </nav>
    }
}

fn mark_loaded() {
    if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.class_list().add_1("loaded");
    }
}

#[function_component]
fn App() -> Html {
    use_effect_with_deps(
        |_| {
            mark_loaded();
            || ()
        },
        (),
    );

    html! {
        <ContextProvider<WhatsAppLink> context={WhatsAppLink::default()}>
            <BrowserRouter>
                <Nav />
                <main>
                    <Switch<Route> render={switch} />
                </main>
                <BackToTop />
            </BrowserRouter>
        </ContextProvider<WhatsAppLink>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::SITE_NAME);
    yew::Renderer::<App>::new().render();
}
