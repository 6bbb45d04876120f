use log::{info, warn};
use web_sys::window;

use crate::config::{SITE_NAME, WHATSAPP_NUMBER};

/// Builds `wa.me` deep links for one business number.
///
/// Stateless; pages get it from a Yew context rather than a global.
#[derive(Debug, Clone, PartialEq)]
pub struct WhatsAppLink {
    phone: String,
}

impl Default for WhatsAppLink {
    fn default() -> Self {
        Self::new(WHATSAPP_NUMBER)
    }
}

impl WhatsAppLink {
    pub fn new(phone: impl Into<String>) -> Self {
        Self { phone: phone.into() }
    }

    pub fn chat_url(&self, message: &str) -> String {
        format!("https://wa.me/{}?text={}", self.phone, urlencoding::encode(message))
    }

    /// Opens the chat in a new tab.
    pub fn open_chat(&self, message: &str) {
        let url = self.chat_url(message);
        info!("Opening WhatsApp chat");
        match window().map(|w| w.open_with_url_and_target(&url, "_blank")) {
            Some(Ok(_)) => {}
            _ => warn!("Could not open {}", url),
        }
    }

    pub fn ticket_message(&self, event_name: &str) -> String {
        format!(
            "Hi! I'm interested in buying a ticket for \"{}\". Please provide me with the payment details and ticket information.",
            event_name
        )
    }

    pub fn business_message(&self, business_name: &str) -> String {
        format!(
            "Hi! I found your business \"{}\" on {} and I'm interested in your services. Could you please provide more information?",
            business_name, SITE_NAME
        )
    }

    pub fn registration_message(&self) -> String {
        format!(
            "Hi! I would like to register and advertise my business on {}. Please provide me with the details about pricing and how to get started.",
            SITE_NAME
        )
    }

    pub fn contact_message(&self) -> String {
        format!("Hi! I have a question about {} and would like to get in touch.", SITE_NAME)
    }
}
