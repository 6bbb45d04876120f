use yew::prelude::*;

use crate::effects::use_scroll_effects;
use crate::whatsapp::WhatsAppLink;

const BUSINESSES: &[(&str, &str, &str)] = &[
    ("Mama Put Kitchen", "fas fa-utensils", "Rice, beans and swallow, delivered to Hostel A to E."),
    ("Quick Print", "fas fa-print", "Binding, photocopies and lamination by the library gate."),
    ("FixIt Gadgets", "fas fa-mobile-alt", "Phone and laptop repairs while you wait."),
    ("Campus Cuts", "fas fa-cut", "Barbing and braiding, weekends included."),
];

#[function_component(Business)]
pub fn business() -> Html {
    use_scroll_effects();
    let whatsapp = use_context::<WhatsAppLink>().unwrap_or_default();

    let register = {
        let whatsapp = whatsapp.clone();
        Callback::from(move |_: MouseEvent| {
            whatsapp.open_chat(&whatsapp.registration_message());
        })
    };

    html! {
        <div class="business-page section">
            <h1>{"Student Businesses"}</h1>
            <div class="ads-grid">
                { for BUSINESSES.iter().map(|(name, icon, blurb)| {
                    let whatsapp = whatsapp.clone();
                    let contact = Callback::from(move |_: MouseEvent| {
                        whatsapp.open_chat(&whatsapp.business_message(name));
                    });
                    html! {
                        <div class="ad-card">
                            <i class={*icon}></i>
                            <h3>{*name}</h3>
                            <p>{*blurb}</p>
                            <button class="btn btn-primary" onclick={contact}>{"Contact"}</button>
                        </div>
                    }
                }) }
            </div>
            <div class="info-card">
                <h3>{"Own a business on campus?"}</h3>
                <button class="btn btn-secondary" onclick={register}>{"Advertise with us"}</button>
            </div>
        </div>
    }
}
