//! Admin view: every loan, a status filter, and the decision actions.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use api_client::{LendingApi, RejectLoanRequest};
use entities::{Loan, LoanStatus};
use tokio::sync::RwLock;

/// Fallback message when an approve failure carries no detail.
const APPROVE_FALLBACK: &str = "Error al aprobar préstamo";

/// Fallback message when a reject failure carries no detail.
const REJECT_FALLBACK: &str = "Error al rechazar préstamo";

/// Status filter for the admin list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Show every loan.
    #[default]
    All,
    /// Only pending loans.
    Pending,
    /// Only approved loans.
    Approved,
    /// Only rejected loans.
    Rejected,
}

impl StatusFilter {
    fn matches(self, loan: &Loan) -> bool {
        match self {
            Self::All => true,
            Self::Pending => loan.status == LoanStatus::Pending,
            Self::Approved => loan.status == LoanStatus::Approved,
            Self::Rejected => loan.status == LoanStatus::Rejected,
        }
    }
}

/// View controller for the admin loan list.
pub struct AdminController {
    api: Arc<dyn LendingApi>,
    loans: RwLock<Vec<Loan>>,
    filter: RwLock<StatusFilter>,
    /// See `DashboardController`: results from a superseded epoch are
    /// dropped.
    epoch: AtomicU64,
}

impl AdminController {
    /// Creates a controller with an empty list and no filter.
    pub fn new(api: Arc<dyn LendingApi>) -> Self {
        Self {
            api,
            loans: RwLock::new(Vec::new()),
            filter: RwLock::new(StatusFilter::default()),
            epoch: AtomicU64::new(0),
        }
    }

    /// Current unfiltered list snapshot.
    pub async fn loans(&self) -> Vec<Loan> {
        self.loans.read().await.clone()
    }

    /// Current filter selection.
    pub async fn filter(&self) -> StatusFilter {
        *self.filter.read().await
    }

    /// Selects a filter.
    pub async fn set_filter(&self, filter: StatusFilter) {
        *self.filter.write().await = filter;
    }

    /// Loans passing the current filter.
    pub async fn filtered(&self) -> Vec<Loan> {
        let filter = self.filter().await;
        self.loans
            .read()
            .await
            .iter()
            .filter(|loan| filter.matches(loan))
            .cloned()
            .collect()
    }

    /// Re-fetches every loan, replacing the list wholesale.
    pub async fn refresh(&self) {
        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        match self.api.all_loans().await {
            Ok(loans) => self.apply(epoch, loans).await,
            Err(e) => tracing::error!("Failed to load loans: {}", e),
        }
    }

    /// Approves a pending loan, then re-fetches the authoritative list.
    ///
    /// Failures — including a second decision on an already-decided loan —
    /// resolve to a user message; the previous list state is kept.
    pub async fn approve(&self, id: &str) -> Result<(), String> {
        if let Err(e) = self.api.approve_loan(id).await {
            return Err(e.user_message(APPROVE_FALLBACK));
        }
        self.refresh().await;
        Ok(())
    }

    /// Rejects a pending loan with an optional reason, then re-fetches.
    pub async fn reject(&self, id: &str, reason: Option<String>) -> Result<(), String> {
        let request = RejectLoanRequest { reason };
        if let Err(e) = self.api.reject_loan(id, &request).await {
            return Err(e.user_message(REJECT_FALLBACK));
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
