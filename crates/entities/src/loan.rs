//! Loan entity and its status lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of a loan request.
///
/// A loan is created `Pending` and transitions exactly once, to `Approved`
/// or `Rejected`. The backend enforces the single transition; the client
/// renders the result and must survive a rejected second decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoanStatus {
    /// Awaiting an administrator's decision.
    Pending,
    /// Approved by an administrator.
    Approved,
    /// Rejected by an administrator.
    Rejected,
}

impl LoanStatus {
    /// Badge color classes for this status.
    pub fn color_class(self) -> &'static str {
        match self {
            Self::Pending => "bg-yellow-100 text-yellow-800",
            Self::Approved => "bg-green-100 text-green-800",
            Self::Rejected => "bg-red-100 text-red-800",
        }
    }

    /// User-facing label for this status.
    pub fn display_text(self) -> &'static str {
        match self {
            Self::Pending => "Pendiente",
            Self::Approved => "Aprobado",
            Self::Rejected => "Rechazado",
        }
    }
}

/// A monetary request record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    /// Server-assigned identifier.
    pub id: String,
    /// Owner of the request.
    pub user_id: String,
    /// Requested amount.
    pub amount: f64,
    /// Repayment term in months.
    pub term_months: u32,
    /// Current lifecycle status.
    pub status: LoanStatus,
    /// When the request was submitted.
    pub requested_at: DateTime<Utc>,
    /// When the decision was made. Set iff the loan has been decided.
    pub decision_at: Option<DateTime<Utc>>,
    /// Deciding administrator. Set iff the loan has been decided.
    pub decision_by: Option<String>,
    /// Only meaningful when the loan is rejected.
    pub rejection_reason: Option<String>,
}

impl Loan {
    /// True once the loan has left `Pending`.
    pub fn is_decided(&self) -> bool {
        self.status != LoanStatus::Pending
    }

    /// Checks the decision invariant: `decision_at` and `decision_by` are
    /// present iff the loan has been decided.
    pub fn decision_fields_consistent(&self) -> bool {
        if self.is_decided() {
            self.decision_at.is_some() && self.decision_by.is_some()
        } else {
            self.decision_at.is_none() && self.decision_by.is_none()
        }
    }
}
