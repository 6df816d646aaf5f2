use reqwest::Method;

use super::{
    client::{encode_segment, with_query, ApiClient},
    types::{
        ApiError, ListPayload, Payment, PaymentDecision, SubscriptionDuration, SupportTicket,
        UpdateRoleRequest, UpdateSupportTicket, UserProfile, VerifyPaymentRequest,
    },
};

impl ApiClient {
    pub async fn list_users(&self) -> Result<Vec<UserProfile>, ApiError> {
        let payload: ListPayload<UserProfile> = self.get_json("/auth/users").await?;
        Ok(payload.into_vec())
    }

    pub async fn update_user_role(&self, user_id: &str, role: &str) -> Result<(), ApiError> {
        let path = format!("/auth/users/{}/role", encode_segment(user_id));
        let body = serde_json::to_value(UpdateRoleRequest {
            role: role.to_string(),
        })
        .map_err(ApiError::decode)?;
        self.send_ignoring_body(Method::PATCH, &path, Some(body))
            .await
    }

    pub async fn list_all_payments(&self, status: Option<&str>) -> Result<Vec<Payment>, ApiError> {
        let path = with_query("/payments/all", &[("status", status.map(str::to_string))]);
        let payload: ListPayload<Payment> = self.get_json(&path).await?;
        Ok(payload.into_vec())
    }

    pub async fn verify_payment(
        &self,
        payment_id: &str,
        decision: PaymentDecision,
    ) -> Result<(), ApiError> {
        let body = serde_json::to_value(VerifyPaymentRequest {
            payment_id: payment_id.to_string(),
            status: decision,
        })
        .map_err(ApiError::decode)?;
        self.send_ignoring_body(Method::POST, "/payments/verify", Some(body))
            .await
    }

    pub async fn list_support_tickets(
        &self,
        status: Option<&str>,
    ) -> Result<Vec<SupportTicket>, ApiError> {
        let path = with_query("/support", &[("status", status.map(str::to_string))]);
        let payload: ListPayload<SupportTicket> = self.get_json(&path).await?;
        Ok(payload.into_vec())
    }

    pub async fn update_support_ticket(
        &self,
        ticket_id: &str,
        update: &UpdateSupportTicket,
    ) -> Result<(), ApiError> {
        let path = format!("/support/{}", encode_segment(ticket_id));
        let body = serde_json::to_value(update).map_err(ApiError::decode)?;
        self.send_ignoring_body(Method::PATCH, &path, Some(body))
            .await
    }

    pub async fn subscription_duration(&self) -> Result<SubscriptionDuration, ApiError> {
        self.get_json("/settings/subscription-duration").await
    }

    pub async fn set_subscription_duration(&self, days: u32) -> Result<(), ApiError> {
        if days < 1 {
            return Err(ApiError::validation("Duration must be at least 1 day"));
        }
        let body = serde_json::to_value(SubscriptionDuration { value: days })
            .map_err(ApiError::decode)?;
        self.send_ignoring_body(Method::PATCH, "/settings/subscription-duration", Some(body))
            .await
    }
}
