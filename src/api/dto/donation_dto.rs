//! Donation request DTOs and amount parsing.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::DonationStatus;
use crate::error::ApiError;

/// `POST /donations` request body.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDonationRequest {
    /// Donor display name. Required.
    pub donor_name: Option<String>,
    /// Donor contact email. Required.
    pub donor_email: Option<String>,
    /// Optional donor phone number.
    pub donor_phone: Option<String>,
    /// Donated amount as a JSON number or numeric string. Required.
    #[schema(value_type = Object)]
    pub amount: Option<serde_json::Value>,
    /// ISO currency code; defaults to the configured currency.
    pub currency: Option<String>,
    /// Optional message from the donor.
    pub message: Option<String>,
    /// Receipt reference: file path or inline data URI. Required.
    pub receipt_url: Option<String>,
}

/// `PUT /donations` request body: target id plus the review decision.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDonationRequest {
    /// Target record id. Required.
    pub id: Option<String>,
    /// New review status. Required.
    pub status: Option<DonationStatus>,
    /// Reviewer attribution.
    pub verified_by: Option<String>,
}

/// Parses a donation amount that clients send as either a JSON number
/// or a numeric string.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for missing, non-numeric,
/// non-finite, or non-positive amounts. A parse that would yield `NaN`
/// is rejected here instead of being stored.
pub fn parse_amount(value: Option<&serde_json::Value>) -> Result<f64, ApiError> {
    let value = value.ok_or_else(|| ApiError::Validation("missing amount".to_string()))?;

    let amount = match value {
        serde_json::Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| ApiError::Validation(format!("invalid amount: {n}"))),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| ApiError::Validation(format!("invalid amount: {s}"))),
        other => Err(ApiError::Validation(format!("invalid amount: {other}"))),
    }?;

    if !amount.is_finite() || amount <= 0.0 {
        return Err(ApiError::Validation(format!(
            "amount must be positive: {amount}"
        )));
    }
    Ok(amount)
}
