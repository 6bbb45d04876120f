use yew::prelude::*;
use yew_router::prelude::*;

use crate::carousel::{SlideDescriptor, TransitionKind};
use crate::components::carousel_section::CarouselSection;
use crate::effects::use_scroll_effects;
use crate::whatsapp::WhatsAppLink;
use crate::Route;

pub fn event_slides() -> Vec<SlideDescriptor> {
    vec![
        SlideDescriptor::new("Freshers Night", "Welcome the new set with music, games and food at the SUG arena.")
            .with_icon("fas fa-music")
            .with_button("Get Tickets", "/events"),
        SlideDescriptor::new("Tech Week", "Talks, hackathons and a startup fair across the SEET and SICT buildings.")
            .with_icon("fas fa-laptop-code")
            .with_button("See Schedule", "/events"),
        SlideDescriptor::new("Inter-Faculty Games", "Football, athletics and the annual tug of war. Bring your faculty colours.")
            .with_icon("fas fa-futbol"),
    ]
}

pub fn business_slides() -> Vec<SlideDescriptor> {
    vec![
        SlideDescriptor::new("Campus Kitchens", "Cheap, fast meals delivered to your hostel.")
            .with_icon("fas fa-utensils")
            .with_button("Browse", "/business"),
        SlideDescriptor::new("Print & Bind", "Project binding, photocopies and passport photos near the library.")
            .with_icon("fas fa-print")
            .with_button("Browse", "/business"),
        SlideDescriptor::new("Gadget Repairs", "Screens, batteries and charging ports fixed the same day.")
            .with_icon("fas fa-mobile-alt"),
    ]
}

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_effects();
    let whatsapp = use_context::<WhatsAppLink>().unwrap_or_default();

    let register = Callback::from(move |_: MouseEvent| {
        whatsapp.open_chat(&whatsapp.registration_message());
    });

    html! {
        <div class="home-page">
            <header class="hero">
                <div class="hero-content">
                    <h1>{"Everything happening on campus"}</h1>
                    <p class="hero-subtitle">
                        {"Events, tickets and student businesses in one place. Reach anyone on WhatsApp in a tap."}
                    </p>
                    <div class="hero-cta-group">
                        <Link<Route> to={Route::Events} classes="btn btn-primary">
                            {"Upcoming Events"}
                        </Link<Route>>
                        <a href="#featured" class="btn btn-secondary">{"What's on"}</a>
                    </div>
                </div>
            </header>

            <section id="featured" class="section">
                <h2>{"Featured Events"}</h2>
                <CarouselSection id="events" slides={event_slides()} kind={TransitionKind::Progress} />
            </section>

            <section class="section">
                <h2>{"Student Businesses"}</h2>
                <CarouselSection id="business" slides={business_slides()} kind={TransitionKind::Fade} />
            </section>

            <section class="section features">
                <div class="features-grid">
                    <div class="feature-card">
                        <i class="fas fa-ticket-alt"></i>
                        <h3>{"Buy tickets"}</h3>
                        <p>{"Message the organiser directly and pay the way you already do."}</p>
                    </div>
                    <div class="feature-card">
                        <i class="fas fa-store"></i>
                        <h3>{"Find services"}</h3>
                        <p>{"Food, printing, repairs and more from students who run them."}</p>
                    </div>
                    <div class="feature-card">
                        <i class="fas fa-bullhorn"></i>
                        <h3>{"Advertise"}</h3>
                        <p>{"Get your business in front of the whole campus."}</p>
                    </div>
                </div>
                <button class="btn btn-primary" onclick={register}>
                    <i class="fab fa-whatsapp"></i>{" Register your business"}
                </button>
            </section>
        </div>
    }
}
