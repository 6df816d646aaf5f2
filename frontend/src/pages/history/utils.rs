pub const PAGE_SIZE: u32 = 25;
pub const ALL_STATUSES: &str = "all";
pub const PAYMENT_STATUSES: [&str; 4] = [ALL_STATUSES, "pending", "approved", "rejected"];
pub const TICKET_STATUSES: [&str; 3] = [ALL_STATUSES, "pending", "resolved"];

/// Page and status filter for one history list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub status: String,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            status: ALL_STATUSES.into(),
        }
    }
}

impl ListQuery {
    /// The status sent to the API; "all" means no filter.
    pub fn status_param(&self) -> Option<&str> {
        match self.status.trim() {
            "" | ALL_STATUSES => None,
            status => Some(status),
        }
    }

    /// A new filter always starts over at the first page.
    pub fn with_status(&self, status: &str) -> Self {
        Self {
            page: 1,
            status: status.to_string(),
        }
    }

    pub fn next(&self, page_count: u32) -> Self {
        Self {
            page: (self.page + 1).min(page_count.max(1)),
            status: self.status.clone(),
        }
    }

    pub fn prev(&self) -> Self {
        Self {
            page: self.page.saturating_sub(1).max(1),
            status: self.status.clone(),
        }
    }
}

pub fn status_badge_class(status: &str) -> &'static str {
    match status.to_ascii_lowercase().as_str() {
        "approved" | "resolved" => "bg-emerald-100 text-emerald-800",
        "rejected" => "bg-red-100 text-red-800",
        "pending" => "bg-amber-100 text-amber-800",
        _ => "bg-slate-100 text-slate-700",
    }
}

pub fn status_label(status: &str) -> String {
    let mut chars = status.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "-".into(),
    }
}
