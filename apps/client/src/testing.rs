//! Test doubles: an in-memory backend and a recording navigator.
//!
//! `FakeLendingApi` stands in for the backend behind the `LendingApi`
//! seam. It enforces the single-transition loan lifecycle the way the
//! real service does (a second decision yields a 409 problem), which is
//! what makes the end-to-end tests meaningful.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use api_client::{
    ApiProblem, ClientError, ClientResult, CreateLoanRequest, LendingApi, LoginRequest,
    RegisterRequest, RejectLoanRequest,
};
use chrono::Utc;
use entities::{Loan, LoanStatus, Role, Session, User};
use tempfile::TempDir;
use tokio::sync::Mutex;

use crate::navigation::{Navigator, Route};
use crate::services::SessionManager;
use crate::storage::SessionStorage;

/// Builds a pending loan for seeding test state.
pub fn pending_loan(id: &str, user_id: &str, amount: f64, term_months: u32) -> Loan {
    Loan {
        id: id.to_string(),
        user_id: user_id.to_string(),
        amount,
        term_months,
        status: LoanStatus::Pending,
        requested_at: Utc::now(),
        decision_at: None,
        decision_by: None,
        rejection_reason: None,
    }
}

/// Builds a session manager over a fresh temp-dir storage and recording
/// navigator. The `TempDir` guard must be kept alive by the caller.
pub fn manager_with(
    fake: FakeLendingApi,
) -> (
    SessionManager,
    Arc<FakeLendingApi>,
    Arc<RecordingNavigator>,
    TempDir,
) {
    let dir = tempfile::tempdir().unwrap();
    let storage = SessionStorage::with_dir(dir.path()).unwrap();
    let fake = Arc::new(fake);
    let navigator = Arc::new(RecordingNavigator::default());
    let manager = SessionManager::new(fake.clone(), storage, navigator.clone());
    (manager, fake, navigator, dir)
}

/// Records every navigation request.
#[derive(Default)]
pub struct RecordingNavigator {
    routes: std::sync::Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    /// Every route navigated to, in order.
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }

    /// The most recent route, if any.
    pub fn last(&self) -> Option<Route> {
        self.routes.lock().unwrap().last().copied()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

struct SeededUser {
    user: User,
    password: String,
}

/// In-memory backend fake.
pub struct FakeLendingApi {
    users: Mutex<Vec<SeededUser>>,
    loans: Mutex<Vec<Loan>>,
    current: Mutex<Option<User>>,
    token: Mutex<Option<String>>,
    next_create_failure: Mutex<Option<String>>,
    fail_next_my_loans: Mutex<bool>,
    omit_detail: Mutex<bool>,
    login_calls: AtomicUsize,
    register_calls: AtomicUsize,
    create_loan_calls: AtomicUsize,
    my_loans_calls: AtomicUsize,
    all_loans_calls: AtomicUsize,
}

impl FakeLendingApi {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            loans: Mutex::new(Vec::new()),
            current: Mutex::new(None),
            token: Mutex::new(None),
            next_create_failure: Mutex::new(None),
            fail_next_my_loans: Mutex::new(false),
            omit_detail: Mutex::new(false),
            login_calls: AtomicUsize::new(0),
            register_calls: AtomicUsize::new(0),
            create_loan_calls: AtomicUsize::new(0),
            my_loans_calls: AtomicUsize::new(0),
            all_loans_calls: AtomicUsize::new(0),
        }
    }

    /// Seeds an account.
    pub fn with_user(self, email: &str, password: &str, role: Role, full_name: &str) -> Self {
        // Construction-time only; the mutex is uncontended.
        self.users.try_lock().unwrap().push(SeededUser {
            user: User {
                id: format!("u-{}", uuid::Uuid::new_v4()),
                email: email.to_string(),
                full_name: full_name.to_string(),
                role,
                created_at: Utc::now(),
            },
            password: password.to_string(),
        });
        self
    }

    /// Seeds the loan list.
    pub fn with_loans(self, loans: Vec<Loan>) -> Self {
        *self.loans.try_lock().unwrap() = loans;
        self
    }

    /// Makes the next `create_loan` fail with the given problem detail.
    pub async fn fail_next_create(&self, detail: &str) {
        *self.next_create_failure.lock().await = Some(detail.to_string());
    }

    /// Makes the next `my_loans` fail.
    pub async fn fail_next_my_loans(&self) {
        *self.fail_next_my_loans.lock().await = true;
    }

    /// Strips `detail` from every problem from now on, to exercise the
    /// fallback-message path.
    pub async fn omit_problem_detail(&self) {
        *self.omit_detail.lock().await = true;
    }

    /// The bearer token the client last installed.
    pub async fn token(&self) -> Option<String> {
        self.token.lock().await.clone()
    }

    pub fn login_calls(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
    }

    pub fn register_calls(&self) -> usize {
        self.register_calls.load(Ordering::SeqCst)
    }

    pub fn create_loan_calls(&self) -> usize {
        self.create_loan_calls.load(Ordering::SeqCst)
    }

    pub fn my_loans_calls(&self) -> usize {
        self.my_loans_calls.load(Ordering::SeqCst)
    }

    pub fn all_loans_calls(&self) -> usize {
        self.all_loans_calls.load(Ordering::SeqCst)
    }

    async fn problem(&self, status: u16, title: &str, detail: &str) -> ClientError {
        let detail = if *self.omit_detail.lock().await {
            None
        } else {
            Some(detail.to_string())
        };
        ClientError::Api(ApiProblem {
            title: title.to_string(),
            status,
            detail,
            instance: None,
        })
    }

    async fn establish(&self, user: User) -> Session {
        let session = Session {
            token: format!("tok-{}", uuid::Uuid::new_v4()),
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            role: user.role,
        };
        *self.token.lock().await = Some(session.token.clone());
        *self.current.lock().await = Some(user);
        session
    }

    async fn decide(&self, id: &str, decide: impl FnOnce(&mut Loan)) -> ClientResult<Loan> {
        let decision_by = self
            .current
            .lock()
            .await
            .as_ref()
            .map(|user| user.id.clone())
            .unwrap_or_else(|| "admin".to_string());
        let not_found = self
            .problem(404, "Not Found", "Préstamo no encontrado")
            .await;
        let conflict = self
            .problem(409, "Conflict", "El préstamo ya fue decidido")
            .await;

        let mut loans = self.loans.lock().await;
        let Some(loan) = loans.iter_mut().find(|loan| loan.id == id) else {
            return Err(not_found);
        };
        if loan.is_decided() {
            return Err(conflict);
        }
        loan.decision_at = Some(Utc::now());
        loan.decision_by = Some(decision_by);
        decide(loan);
        Ok(loan.clone())
    }
}

#[async_trait]
impl LendingApi for FakeLendingApi {
    async fn set_token(&self, token: Option<String>) {
        *self.token.lock().await = token;
    }

    async fn login(&self, request: &LoginRequest) -> ClientResult<Session> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        let user = self
            .users
            .lock()
            .await
            .iter()
            .find(|seeded| {
                seeded.user.email == request.email && seeded.password == request.password
            })
            .map(|seeded| seeded.user.clone());
        match user {
            Some(user) => Ok(self.establish(user).await),
            None => Err(self
                .problem(401, "Unauthorized", "Credenciales inválidas")
                .await),
        }
    }

    async fn register(&self, request: &RegisterRequest) -> ClientResult<Session> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        let user = User {
            id: format!("u-{}", uuid::Uuid::new_v4()),
            email: request.email.clone(),
            full_name: request.full_name.clone(),
            role: Role::User,
            created_at: Utc::now(),
        };
        self.users.lock().await.push(SeededUser {
            user: user.clone(),
            password: request.password.clone(),
        });
        Ok(self.establish(user).await)
    }

    async fn create_loan(&self, request: &CreateLoanRequest) -> ClientResult<Loan> {
        self.create_loan_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(detail) = self.next_create_failure.lock().await.take() {
            return Err(self.problem(422, "Unprocessable Entity", &detail).await);
        }
        let user_id = self
            .current
            .lock()
            .await
            .as_ref()
            .map(|user| user.id.clone())
            .unwrap_or_else(|| "u-anon".to_string());
        let loan = Loan {
            id: format!("L-{}", uuid::Uuid::new_v4()),
            user_id,
            amount: request.amount,
            term_months: request.term_months,
            status: LoanStatus::Pending,
            requested_at: Utc::now(),
            decision_at: None,
            decision_by: None,
            rejection_reason: None,
        };
        self.loans.lock().await.push(loan.clone());
        Ok(loan)
    }

    async fn my_loans(&self) -> ClientResult<Vec<Loan>> {
        self.my_loans_calls.fetch_add(1, Ordering::SeqCst);
        if std::mem::take(&mut *self.fail_next_my_loans.lock().await) {
            return Err(self
                .problem(500, "Internal Server Error", "Error interno")
                .await);
        }
        let current = self.current.lock().await.clone();
        let loans = self.loans.lock().await;
        Ok(match current {
            Some(user) => loans
                .iter()
                .filter(|loan| loan.user_id == user.id)
                .cloned()
                .collect(),
            None => loans.clone(),
        })
    }

    async fn all_loans(&self) -> ClientResult<Vec<Loan>> {
        self.all_loans_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.loans.lock().await.clone())
    }

    async fn approve_loan(&self, id: &str) -> ClientResult<Loan> {
        self.decide(id, |loan| loan.status = LoanStatus::Approved).await
    }

    async fn reject_loan(&self, id: &str, request: &RejectLoanRequest) -> ClientResult<Loan> {
        let reason = request.reason.clone();
        self.decide(id, |loan| {
            loan.status = LoanStatus::Rejected;
            loan.rejection_reason = reason;
        })
        .await
    }

    async fn list_users(&self) -> ClientResult<Vec<User>> {
        Ok(self
            .users
            .lock()
            .await
            .iter()
            .map(|seeded| seeded.user.clone())
            .collect())
    }

    async fn get_user(&self, id: &str) -> ClientResult<User> {
        let user = self
            .users
            .lock()
            .await
            .iter()
            .find(|seeded| seeded.user.id == id)
            .map(|seeded| seeded.user.clone());
        match user {
            Some(user) => Ok(user),
            None => Err(self
                .problem(404, "Not Found", "Usuario no encontrado")
                .await),
        }
    }
}
