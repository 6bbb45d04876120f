use yew::prelude::*;

use crate::config::WHATSAPP_NUMBER;
use crate::effects::use_scroll_effects;
use crate::whatsapp::WhatsAppLink;

#[function_component(Contact)]
pub fn contact() -> Html {
    use_scroll_effects();
    let whatsapp = use_context::<WhatsAppLink>().unwrap_or_default();

    let chat = Callback::from(move |_: MouseEvent| {
        whatsapp.open_chat(&whatsapp.contact_message());
    });

    html! {
        <div class="contact-page section">
            <h1>{"Contact"}</h1>
            <div class="info-card">
                <i class="fab fa-whatsapp"></i>
                <h3>{"WhatsApp"}</h3>
                <p>{WHATSAPP_NUMBER}</p>
                <button class="btn btn-primary" onclick={chat}>{"Chat with us"}</button>
            </div>
            <div class="info-card">
                <i class="fas fa-map-marker-alt"></i>
                <h3>{"Find us"}</h3>
                <p>{"Student Union Building, ground floor."}</p>
            </div>
        </div>
    }
}
