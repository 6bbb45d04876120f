use yew::prelude::*;

use crate::effects::use_scroll_effects;
use crate::whatsapp::WhatsAppLink;

#[derive(Clone, PartialEq)]
struct Ticket {
    name: &'static str,
    date: &'static str,
    venue: &'static str,
    price: &'static str,
}

const TICKETS: &[Ticket] = &[
    Ticket { name: "Freshers Night", date: "Fri, 7pm", venue: "SUG Arena", price: "₦2,000" },
    Ticket { name: "Tech Week Hackathon", date: "Sat, 9am", venue: "SICT Auditorium", price: "Free" },
    Ticket { name: "Comedy Hangout", date: "Sun, 6pm", venue: "Hall of Fame", price: "₦1,500" },
];

#[derive(Properties, PartialEq)]
struct TicketCardProps {
    ticket: Ticket,
}

#[function_component(TicketCard)]
fn ticket_card(props: &TicketCardProps) -> Html {
    let whatsapp = use_context::<WhatsAppLink>().unwrap_or_default();
    let ticket = props.ticket.clone();
    let buy = Callback::from(move |_: MouseEvent| {
        whatsapp.open_chat(&whatsapp.ticket_message(ticket.name));
    });

    html! {
        <div class="ticket-card">
            <h3>{props.ticket.name}</h3>
            <p class="ticket-meta">{format!("{} · {}", props.ticket.date, props.ticket.venue)}</p>
            <p class="ticket-price">{props.ticket.price}</p>
            <button class="btn btn-primary" onclick={buy}>
                <i class="fab fa-whatsapp"></i>{" Buy Ticket"}
            </button>
        </div>
    }
}

#[function_component(Events)]
pub fn events() -> Html {
    use_scroll_effects();

    html! {
        <div class="events-page section">
            <h1>{"Events"}</h1>
            <div class="tickets-grid">
                { for TICKETS.iter().map(|ticket| html! { <TicketCard ticket={ticket.clone()} /> }) }
            </div>
        </div>
    }
}
