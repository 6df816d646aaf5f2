use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::utils::storage::StorageError;

#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum ApiError {
    #[error("{0}")]
    Network(String),
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Session expired, please log in again")]
    SessionExpired,
    #[error("{0}")]
    Decode(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Storage(String),
}

impl From<StorageError> for ApiError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error.to_string())
    }
}

impl ApiError {
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::Network(format!("Request failed: {}", err))
    }

    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode(format!("Failed to parse response: {}", err))
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn code(&self) -> String {
        match self {
            Self::Network(_) => "NETWORK_ERROR".into(),
            Self::Http { status, .. } => format!("HTTP_{}", status),
            Self::SessionExpired => "SESSION_EXPIRED".into(),
            Self::Decode(_) => "DECODE_ERROR".into(),
            Self::Validation(_) => "VALIDATION_ERROR".into(),
            Self::Storage(_) => "STORAGE_ERROR".into(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.to_string()
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.to_string().into_view()
    }
}

/// Error body returned by the API on non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message
            .or(self.error)
            .filter(|m| !m.trim().is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Lists arrive either bare or wrapped in `{ data: [...] }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

impl<T> ListPayload<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Bare(items) | Self::Wrapped { data: items } => items,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default, rename = "totalPages")]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Paginated<T> {
    pub fn page_count(&self) -> u32 {
        self.total_pages.unwrap_or(1).max(1)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginData {
    pub token: String,
}

pub type LoginResponse = Envelope<LoginData>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "phoneNumber", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Document ids arrive as `id`, `_id` or both; `id` wins when both are set.
#[derive(Debug, Default, Deserialize)]
struct RecordId {
    #[serde(default)]
    id: Option<String>,
    #[serde(default, rename = "_id")]
    object_id: Option<String>,
}

impl RecordId {
    fn resolve(self) -> String {
        self.id
            .filter(|id| !id.is_empty())
            .or(self.object_id)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "UserProfileWire")]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: Option<String>,
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_logout: Option<bool>,
}

#[derive(Deserialize)]
struct UserProfileWire {
    #[serde(flatten)]
    id: RecordId,
    #[serde(default)]
    username: String,
    #[serde(default)]
    email: String,
    #[serde(default, rename = "phoneNumber")]
    phone_number: Option<String>,
    #[serde(default, rename = "phone_number")]
    phone_number_snake: Option<String>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    force_logout: Option<bool>,
}

impl From<UserProfileWire> for UserProfile {
    fn from(wire: UserProfileWire) -> Self {
        Self {
            id: wire.id.resolve(),
            username: wire.username,
            email: wire.email,
            phone_number: wire.phone_number.or(wire.phone_number_snake),
            role: wire.role,
            force_logout: wire.force_logout,
        }
    }
}

impl UserProfile {
    pub fn is_force_logout(&self) -> bool {
        self.force_logout == Some(true)
    }

    pub fn display_name(&self) -> &str {
        if self.username.trim().is_empty() {
            &self.email
        } else {
            &self.username
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default, rename = "endDate", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRoleRequest {
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TransactionWire")]
pub struct Transaction {
    pub id: String,
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub date: String,
}

#[derive(Deserialize)]
struct TransactionWire {
    #[serde(flatten)]
    id: RecordId,
    amount: f64,
    #[serde(default)]
    category: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    date: String,
}

impl From<TransactionWire> for Transaction {
    fn from(wire: TransactionWire) -> Self {
        Self {
            id: wire.id.resolve(),
            amount: wire.amount,
            category: wire.category,
            description: wire.description,
            date: wire.date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionInput {
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CategoryName {
    Plain(String),
    Named { name: String },
}

impl CategoryName {
    pub fn into_string(self) -> String {
        match self {
            Self::Plain(name) | Self::Named { name } => name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    Daily,
    Monthly,
    Yearly,
    #[serde(rename = "last6months")]
    LastSixMonths,
}

impl ReportPeriod {
    pub const ALL: [ReportPeriod; 4] = [
        ReportPeriod::Daily,
        ReportPeriod::Monthly,
        ReportPeriod::Yearly,
        ReportPeriod::LastSixMonths,
    ];

    pub fn as_path(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::LastSixMonths => "last6months",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
            Self::LastSixMonths => "Last 6 months",
        }
    }

    pub fn from_path(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_path() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ReportRowWire")]
pub struct ReportRow {
    pub label: Value,
    pub total: f64,
    pub category: Option<String>,
}

/// Aggregation rows name their key and sum differently per endpoint.
#[derive(Deserialize)]
struct ReportRowWire {
    #[serde(default)]
    label: Option<Value>,
    #[serde(default)]
    period: Option<Value>,
    #[serde(default, rename = "_id")]
    group: Option<Value>,
    #[serde(default)]
    total: Option<f64>,
    #[serde(default, rename = "totalAmount")]
    total_amount: Option<f64>,
    #[serde(default)]
    amount: Option<f64>,
    #[serde(default)]
    category: Option<String>,
}

impl From<ReportRowWire> for ReportRow {
    fn from(wire: ReportRowWire) -> Self {
        let label = [wire.label, wire.period, wire.group]
            .into_iter()
            .flatten()
            .find(|value| !value.is_null())
            .unwrap_or(Value::Null);
        Self {
            label,
            total: wire
                .total
                .or(wire.total_amount)
                .or(wire.amount)
                .unwrap_or_default(),
            category: wire.category,
        }
    }
}

impl ReportRow {
    pub fn label_text(&self) -> String {
        let base = match &self.label {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            // grouped ids such as { year, month, day }
            Value::Object(map) => ["year", "month", "day"]
                .iter()
                .filter_map(|key| map.get(*key))
                .map(|v| match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join("-"),
            other => other.to_string(),
        };
        match (&self.category, base.is_empty()) {
            (Some(category), true) => category.clone(),
            _ => base,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PaymentWire")]
pub struct Payment {
    pub id: String,
    pub amount: Option<f64>,
    pub notes: Option<String>,
    pub status: String,
    #[serde(rename = "paymentDate")]
    pub payment_date: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(rename = "proofImageUrl")]
    pub proof_image_url: Option<String>,
    pub user: Option<Value>,
}

#[derive(Deserialize)]
struct PaymentWire {
    #[serde(flatten)]
    id: RecordId,
    #[serde(default)]
    amount: Option<f64>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    status: String,
    #[serde(default, rename = "paymentDate")]
    payment_date: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default, rename = "createdAt")]
    created_at: Option<String>,
    #[serde(default, rename = "proofImageUrl")]
    proof_image_url: Option<String>,
    #[serde(default, rename = "proofUrl")]
    proof_url: Option<String>,
    #[serde(default)]
    user: Option<Value>,
}

impl From<PaymentWire> for Payment {
    fn from(wire: PaymentWire) -> Self {
        Self {
            id: wire.id.resolve(),
            amount: wire.amount,
            notes: wire.notes,
            status: wire.status,
            payment_date: wire.payment_date.or(wire.date),
            created_at: wire.created_at,
            proof_image_url: wire.proof_image_url.or(wire.proof_url),
            user: wire.user,
        }
    }
}

impl Payment {
    /// Payment date, or the record's creation time when none was given.
    pub fn shown_date(&self) -> Option<&str> {
        self.payment_date
            .as_deref()
            .or(self.created_at.as_deref())
    }

    pub fn is_pending(&self) -> bool {
        self.status.eq_ignore_ascii_case("pending")
    }

    pub fn payer_label(&self) -> String {
        match &self.user {
            Some(Value::Object(map)) => map
                .get("username")
                .or_else(|| map.get("email"))
                .and_then(|v| v.as_str())
                .unwrap_or("-")
                .to_string(),
            Some(Value::String(id)) => id.clone(),
            _ => "-".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentDecision {
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyPaymentRequest {
    #[serde(rename = "paymentId")]
    pub payment_id: String,
    pub status: PaymentDecision,
}

fn default_ticket_status() -> String {
    "pending".into()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SupportTicketWire")]
pub struct SupportTicket {
    pub id: String,
    pub subject: Option<String>,
    pub message: String,
    pub status: String,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    pub response: Option<String>,
    pub user: Option<Value>,
}

#[derive(Deserialize)]
struct SupportTicketWire {
    #[serde(flatten)]
    id: RecordId,
    #[serde(default)]
    subject: Option<String>,
    #[serde(default)]
    message: String,
    #[serde(default = "default_ticket_status")]
    status: String,
    #[serde(default, rename = "createdAt")]
    created_at: Option<String>,
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    user: Option<Value>,
}

impl From<SupportTicketWire> for SupportTicket {
    fn from(wire: SupportTicketWire) -> Self {
        Self {
            id: wire.id.resolve(),
            subject: wire.subject,
            message: wire.message,
            status: wire.status,
            created_at: wire.created_at,
            response: wire.response,
            user: wire.user,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSupportTicket {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateSupportTicket {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionDuration {
    pub value: u32,
}
