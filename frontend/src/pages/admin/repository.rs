use crate::{
    api::{
        ApiClient, ApiError, Payment, PaymentDecision, SupportTicket, UpdateSupportTicket,
        UserProfile,
    },
    state::access::Role,
};
use log::info;

pub async fn fetch_users(api: &ApiClient) -> Result<Vec<UserProfile>, ApiError> {
    api.list_users().await
}

pub async fn change_role(api: &ApiClient, user_id: &str, role: Role) -> Result<(), ApiError> {
    api.update_user_role(user_id, role.as_str()).await?;
    info!("role of {} changed to {}", user_id, role.as_str());
    Ok(())
}

pub async fn fetch_payments(api: &ApiClient, status: Option<&str>) -> Result<Vec<Payment>, ApiError> {
    api.list_all_payments(status).await
}

pub async fn decide_payment(
    api: &ApiClient,
    payment_id: &str,
    decision: PaymentDecision,
) -> Result<(), ApiError> {
    api.verify_payment(payment_id, decision).await?;
    info!("payment {} marked {:?}", payment_id, decision);
    Ok(())
}

pub async fn fetch_tickets(api: &ApiClient, status: Option<&str>) -> Result<Vec<SupportTicket>, ApiError> {
    api.list_support_tickets(status).await
}

pub async fn update_ticket(
    api: &ApiClient,
    ticket_id: &str,
    update: UpdateSupportTicket,
) -> Result<(), ApiError> {
    api.update_support_ticket(ticket_id, &update).await
}

pub async fn fetch_duration(api: &ApiClient) -> Result<u32, ApiError> {
    api.subscription_duration().await.map(|d| d.value)
}

pub async fn save_duration(api: &ApiClient, days: u32) -> Result<u32, ApiError> {
    api.set_subscription_duration(days).await?;
    Ok(days)
}
