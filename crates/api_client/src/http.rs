//! reqwest-backed implementation of [`LendingApi`].

use async_trait::async_trait;
use entities::{Loan, Session, User};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;

use crate::{
    ApiProblem, ClientError, ClientResult, CreateLoanRequest, LendingApi, LoginRequest,
    RegisterRequest, RejectLoanRequest,
};

/// HTTP client for the lending backend.
pub struct HttpLendingApi {
    /// Backend base URL, without trailing slash.
    base_url: String,
    /// Shared HTTP client.
    http: Client,
    /// Bearer token attached to requests once a session exists.
    token: RwLock<Option<String>>,
}

impl HttpLendingApi {
    /// Creates a client against the given base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
            token: RwLock::new(None),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!(%method, path, "dispatching request");
        let mut builder = self.http.request(method, self.url(path));
        if let Some(token) = self.token.read().await.as_ref() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ClientResult<T> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ClientError::Deserialization(e.to_string()))
        } else {
            Err(Self::error_from_response(status, response).await)
        }
    }

    async fn error_from_response(status: StatusCode, response: reqwest::Response) -> ClientError {
        match response.json::<ApiProblem>().await {
            Ok(problem) => ClientError::Api(problem),
            Err(_) => ClientError::Status(status.as_u16()),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let builder = self.request(Method::GET, path).await;
        self.send(builder).await
    }

    async fn post<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let builder = self.request(Method::POST, path).await.json(body);
        self.send(builder).await
    }

    async fn patch<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let builder = self.request(Method::PATCH, path).await;
        self.send(builder).await
    }

    async fn patch_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let builder = self.request(Method::PATCH, path).await.json(body);
        self.send(builder).await
    }
}

#[async_trait]
impl LendingApi for HttpLendingApi {
    async fn set_token(&self, token: Option<String>) {
        *self.token.write().await = token;
    }

    async fn login(&self, request: &LoginRequest) -> ClientResult<Session> {
        let session: Session = self.post("/auth/login", request).await?;
        self.set_token(Some(session.token.clone())).await;
        Ok(session)
    }

    async fn register(&self, request: &RegisterRequest) -> ClientResult<Session> {
        let session: Session = self.post("/auth/register", request).await?;
        self.set_token(Some(session.token.clone())).await;
        Ok(session)
    }

    async fn create_loan(&self, request: &CreateLoanRequest) -> ClientResult<Loan> {
        self.post("/loans", request).await
    }

    async fn my_loans(&self) -> ClientResult<Vec<Loan>> {
        self.get("/loans/me").await
    }

    async fn all_loans(&self) -> ClientResult<Vec<Loan>> {
        self.get("/loans").await
    }

    async fn approve_loan(&self, id: &str) -> ClientResult<Loan> {
        self.patch(&format!("/loans/{}/approve", id)).await
    }

    async fn reject_loan(&self, id: &str, request: &RejectLoanRequest) -> ClientResult<Loan> {
        self.patch_json(&format!("/loans/{}/reject", id), request).await
    }

    async fn list_users(&self) -> ClientResult<Vec<User>> {
        self.get("/users").await
    }

    async fn get_user(&self, id: &str) -> ClientResult<User> {
        self.get(&format!("/users/{}", id)).await
    }
}
