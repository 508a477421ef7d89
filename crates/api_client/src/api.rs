//! The loan lifecycle operations exposed by the backend.

use async_trait::async_trait;
use entities::{Loan, Session, User};

use crate::{
    ClientResult, CreateLoanRequest, LoginRequest, RegisterRequest, RejectLoanRequest,
};

/// Operations of the lending backend.
///
/// [`crate::HttpLendingApi`] is the production implementation; tests
/// substitute an in-memory fake. Implementations retain the token of a
/// successful `login`/`register` for subsequent requests; `set_token`
/// exists for session restore and logout.
#[async_trait]
pub trait LendingApi: Send + Sync {
    /// Replaces the bearer token attached to subsequent requests.
    async fn set_token(&self, token: Option<String>);

    /// Authenticates with email and password.
    async fn login(&self, request: &LoginRequest) -> ClientResult<Session>;

    /// Creates an account and authenticates it.
    async fn register(&self, request: &RegisterRequest) -> ClientResult<Session>;

    /// Submits a loan request for the current user.
    async fn create_loan(&self, request: &CreateLoanRequest) -> ClientResult<Loan>;

    /// Lists the current user's loans.
    async fn my_loans(&self) -> ClientResult<Vec<Loan>>;

    /// Lists every loan (admin only).
    async fn all_loans(&self) -> ClientResult<Vec<Loan>>;

    /// Approves a pending loan (admin only).
    async fn approve_loan(&self, id: &str) -> ClientResult<Loan>;

    /// Rejects a pending loan with an optional reason (admin only).
    async fn reject_loan(&self, id: &str, request: &RejectLoanRequest) -> ClientResult<Loan>;

    /// Lists every registered user (admin only).
    async fn list_users(&self) -> ClientResult<Vec<User>>;

    /// Fetches a single user by id (admin only).
    async fn get_user(&self, id: &str) -> ClientResult<User>;
}
