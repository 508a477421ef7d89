//! User dashboard: the own-loan list and the request-loan form.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use api_client::{CreateLoanRequest, LendingApi};
use entities::Loan;
use tokio::sync::RwLock;
use validation::{parse_amount, parse_term_months, ValidationError};

/// Fallback message when a create-loan failure carries no detail.
const CREATE_LOAN_FALLBACK: &str = "Error al solicitar préstamo";

/// Field-scoped and form-level errors for the request-loan form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoanFormErrors {
    /// Amount field error.
    pub amount: Option<ValidationError>,
    /// Term field error.
    pub term_months: Option<ValidationError>,
    /// Form-level message for backend failures.
    pub general: Option<String>,
}

/// View controller for the user dashboard.
///
/// Owns its in-memory list copy, replaced wholesale on every refresh; no
/// incremental patching.
pub struct DashboardController {
    api: Arc<dyn LendingApi>,
    loans: RwLock<Vec<Loan>>,
    /// Bumped on every refresh; results from a superseded epoch are
    /// dropped instead of clobbering newer state.
    epoch: AtomicU64,
}

impl DashboardController {
    /// Creates a controller with an empty list.
    pub fn new(api: Arc<dyn LendingApi>) -> Self {
        Self {
            api,
            loans: RwLock::new(Vec::new()),
            epoch: AtomicU64::new(0),
        }
    }

    /// Current list snapshot.
    pub async fn loans(&self) -> Vec<Loan> {
        self.loans.read().await.clone()
    }

    /// Re-fetches the caller's loans, replacing the list wholesale.
    ///
    /// A fetch failure keeps the previous list and is only logged, like
    /// the rest of the list views.
    pub async fn refresh(&self) {
        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        match self.api.my_loans().await {
            Ok(loans) => self.apply(epoch, loans).await,
            Err(e) => tracing::error!("Failed to load loans: {}", e),
        }
    }

    /// Validates and submits the request-loan form.
    ///
    /// Validation failures block submission without any network call. A
    /// backend failure surfaces as the form-level message. On success the
    /// write is awaited to completion before the dependent list re-fetch.
    pub async fn submit_loan_request(
        &self,
        amount: &str,
        term_months: &str,
    ) -> Result<(), LoanFormErrors> {
        let amount = parse_amount(amount);
        let term_months = parse_term_months(term_months);
        let (amount, term_months) = match (amount, term_months) {
            (Ok(amount), Ok(term_months)) => (amount, term_months),
            (amount, term_months) => {
                return Err(LoanFormErrors {
                    amount: amount.err(),
                    term_months: term_months.err(),
                    general: None,
                });
            }
        };

        let request = CreateLoanRequest {
            amount,
            term_months,
        };
        if let Err(e) = self.api.create_loan(&request).await {
            return Err(LoanFormErrors {
                general: Some(e.user_message(CREATE_LOAN_FALLBACK)),
                ..Default::default()
            });
        }

        self.refresh().await;
        Ok(())
    }

    async fn apply(&self, epoch: u64, loans: Vec<Loan>) {
        if self.epoch.load(Ordering::SeqCst) != epoch {
            tracing::warn!("Ignoring stale loan list response");
            return;
        }
        *self.loans.write().await = loans;
    }
}
