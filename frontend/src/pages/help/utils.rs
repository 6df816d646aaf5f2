use crate::{
    api::{ApiError, CreateSupportTicket},
    utils::validate::require,
};

pub const FAQ: [(&str, &str); 4] = [
    (
        "Expert Team",
        "Our support team consists of certified financial professionals and technical experts ready to assist you.",
    ),
    (
        "Quick Response",
        "We aim to respond to all inquiries within 24 hours during business days.",
    ),
    (
        "How do I upgrade to Pro?",
        "Transfer the Pro fee to the account on the payment page and upload the receipt. Your plan changes once an admin approves it.",
    ),
    (
        "Where can I see my requests?",
        "The history page lists every payment and support ticket you have submitted, with its current status.",
    ),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketForm {
    pub subject: String,
    pub message: String,
}

impl TicketForm {
    pub fn to_request(&self) -> Result<CreateSupportTicket, ApiError> {
        require(&self.message, "Message")?;
        let subject = self.subject.trim();
        Ok(CreateSupportTicket {
            subject: (!subject.is_empty()).then(|| subject.to_string()),
            message: self.message.trim().to_string(),
        })
    }
}
