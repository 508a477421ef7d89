//! Request payloads for the backend endpoints.

use serde::{Deserialize, Serialize};

/// Credentials for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email address.
    pub email: String,
    /// Plain-text password; only ever sent over the wire, never stored.
    pub password: String,
}

/// Profile for `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Email address.
    pub email: String,
    /// Plain-text password.
    pub password: String,
    /// Full display name.
    pub full_name: String,
}

/// Payload for `POST /loans`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoanRequest {
    /// Requested amount.
    pub amount: f64,
    /// Repayment term in months.
    pub term_months: u32,
}

/// Payload for `PATCH /loans/{id}/reject`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RejectLoanRequest {
    /// Optional rejection reason shown to the requester.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
