use crate::{
    api::{ApiError, UpdateSupportTicket},
    state::access::Role,
};

pub const ROLE_OPTIONS: [Role; 3] = [Role::Free, Role::Pro, Role::Admin];
pub const PAYMENT_FILTERS: [&str; 4] = ["pending", "approved", "rejected", "all"];
pub const TICKET_FILTERS: [&str; 3] = ["pending", "resolved", "all"];
pub const TICKET_STATUSES: [&str; 2] = ["pending", "resolved"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Users,
    Payments,
    Support,
    Subscription,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] = [
        AdminTab::Users,
        AdminTab::Payments,
        AdminTab::Support,
        AdminTab::Subscription,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Users => "Users",
            Self::Payments => "Payments",
            Self::Support => "Support",
            Self::Subscription => "Subscription duration",
        }
    }
}

/// `"all"` and blank mean no status filter.
pub fn filter_param(filter: &str) -> Option<&str> {
    match filter.trim() {
        "" | "all" => None,
        status => Some(status),
    }
}

pub fn role_badge_class(role: Role) -> &'static str {
    match role {
        Role::Admin => "bg-red-100 text-red-800",
        Role::Pro => "bg-amber-100 text-amber-800",
        Role::Free => "bg-slate-100 text-slate-700",
    }
}

pub fn parse_duration(input: &str) -> Result<u32, ApiError> {
    match input.trim().parse::<u32>() {
        Ok(days) if days >= 1 => Ok(days),
        _ => Err(ApiError::validation(
            "Duration must be a whole number of at least 1 day",
        )),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketReplyForm {
    pub status: String,
    pub response: String,
}

impl Default for TicketReplyForm {
    fn default() -> Self {
        Self {
            status: "resolved".into(),
            response: String::new(),
        }
    }
}

impl TicketReplyForm {
    pub fn to_update(&self) -> Result<UpdateSupportTicket, ApiError> {
        if !TICKET_STATUSES.contains(&self.status.as_str()) {
            return Err(ApiError::validation("Choose a ticket status"));
        }
        let response = self.response.trim();
        Ok(UpdateSupportTicket {
            status: self.status.clone(),
            response: (!response.is_empty()).then(|| response.to_string()),
        })
    }
}
