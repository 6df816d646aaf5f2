use crate::{
    api::{payments::payment_proof_form, ApiClient, ApiError, Payment},
    utils::file::SelectedFile,
};
use log::info;

pub async fn fetch_pending(api: &ApiClient) -> Result<Vec<Payment>, ApiError> {
    api.pending_payments().await
}

pub async fn submit_proof(api: &ApiClient, notes: String, proof: SelectedFile) -> Result<(), ApiError> {
    let form = payment_proof_form(&notes, &proof.name, &proof.mime, proof.bytes)?;
    api.upload_payment_proof(form).await?;
    info!("payment proof {} uploaded", proof.name);
    Ok(())
}
