use reqwest::multipart::{Form, Part};

use super::{
    client::{with_query, ApiClient},
    types::{ApiError, ListPayload, Paginated, Payment},
};

pub const PENDING: &str = "pending";

/// Multipart body for `POST /payments/upload`.
pub fn payment_proof_form(
    notes: &str,
    file_name: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Form, ApiError> {
    let part = Part::bytes(bytes)
        .file_name(file_name.to_string())
        .mime_str(mime)
        .map_err(|e| ApiError::validation(format!("Unsupported file type: {}", e)))?;
    let mut form = Form::new().part("proof", part);
    if !notes.trim().is_empty() {
        form = form.text("notes", notes.trim().to_string());
    }
    Ok(form)
}

impl ApiClient {
    pub async fn upload_payment_proof(&self, form: Form) -> Result<(), ApiError> {
        self.upload::<serde::de::IgnoredAny>("/payments/upload", form)
            .await
            .map(|_| ())
    }

    pub async fn list_my_payments(
        &self,
        page: u32,
        limit: u32,
        status: Option<&str>,
    ) -> Result<Paginated<Payment>, ApiError> {
        let path = with_query(
            "/payments",
            &[
                ("page", Some(page.to_string())),
                ("limit", Some(limit.to_string())),
                ("status", status.map(str::to_string)),
            ],
        );
        self.get_json(&path).await
    }

    pub async fn pending_payments(&self) -> Result<Vec<Payment>, ApiError> {
        let path = with_query("/payments", &[("status", Some(PENDING.to_string()))]);
        let payload: ListPayload<Payment> = self.get_json(&path).await?;
        Ok(payload.into_vec())
    }
}
