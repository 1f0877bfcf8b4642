//! Donation handlers: list, submit, review.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{CreateDonationRequest, Envelope, ReviewDonationRequest, parse_amount};
use crate::app_state::AppState;
use crate::domain::{DonationPatch, NewDonation};
use crate::error::{ApiError, ErrorEnvelope};

use super::require_field;

/// `GET /donations` — List all donation records.
///
/// A fresh environment returns a legitimately empty list; "no donations
/// yet" is a real state, not an occasion for demo data.
///
/// # Errors
///
/// Returns [`ApiError::Storage`] if the collection cannot be read.
#[utoipa::path(
    get,
    path = "/api/v1/donations",
    tag = "Donations",
    summary = "List donations",
    responses(
        (status = 200, description = "Enveloped donation list", body = serde_json::Value),
        (status = 500, description = "Storage failure", body = ErrorEnvelope),
    )
)]
pub async fn list_donations(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let donations = state.donation_store.list().await?;
    Ok(Json(Envelope::ok(donations)))
}

/// `POST /donations` — Submit a donation receipt.
///
/// Amount is accepted as a JSON number or numeric string and must be
/// positive. The created record always starts in `pending`.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] on missing fields or an invalid
/// amount.
#[utoipa::path(
    post,
    path = "/api/v1/donations",
    tag = "Donations",
    summary = "Submit a donation",
    request_body = CreateDonationRequest,
    responses(
        (status = 200, description = "Enveloped created donation, status pending", body = serde_json::Value),
        (status = 400, description = "Missing field or invalid amount", body = ErrorEnvelope),
    )
)]
pub async fn submit_donation(
    State(state): State<AppState>,
    Json(req): Json<CreateDonationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let donor_name = require_field(req.donor_name, "donorName")?;
    let donor_email = require_field(req.donor_email, "donorEmail")?;
    let receipt_url = require_field(req.receipt_url, "receiptUrl")?;
    let amount = parse_amount(req.amount.as_ref())?;
    let currency = req
        .currency
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| state.default_currency.clone());

    let donation = state
        .donation_store
        .insert(NewDonation {
            donor_name,
            donor_email,
            donor_phone: req.donor_phone,
            amount,
            currency,
            message: req.message,
            receipt_url,
        })
        .await?;

    Ok(Json(Envelope::with_message(
        donation,
        "Donation submitted successfully",
    )))
}

/// `PUT /donations` — Review a donation (verify or reject).
///
/// Both outcomes are terminal transitions; rejected donations are
/// retained, never deleted.
///
/// # Errors
///
/// Returns [`ApiError::DonationNotFound`] for an unknown id or
/// [`ApiError::InvalidTransition`] when leaving a terminal status.
#[utoipa::path(
    put,
    path = "/api/v1/donations",
    tag = "Donations",
    summary = "Review a donation",
    request_body = ReviewDonationRequest,
    responses(
        (status = 200, description = "Enveloped updated donation", body = serde_json::Value),
        (status = 400, description = "Missing id or status", body = ErrorEnvelope),
        (status = 404, description = "Unknown id", body = ErrorEnvelope),
        (status = 409, description = "Terminal-state transition", body = ErrorEnvelope),
    )
)]
pub async fn review_donation(
    State(state): State<AppState>,
    Json(req): Json<ReviewDonationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = require_field(req.id, "id")?;
    let status = req
        .status
        .ok_or_else(|| ApiError::Validation("missing required field: status".to_string()))?;

    let donation = state
        .donation_store
        .update(
            &id,
            DonationPatch {
                status: Some(status),
                verified_by: req.verified_by,
            },
        )
        .await?;

    Ok(Json(Envelope::ok(donation)))
}

/// Donation workflow routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/donations",
        get(list_donations).post(submit_donation).put(review_donation),
    )
}
