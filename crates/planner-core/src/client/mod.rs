//! REST Client
//!
//! Typed wrappers over the backend's `/api` endpoints. Every call except
//! login and register carries `Authorization: Bearer <token>`.

mod error;
mod transport;

pub use error::{ApiError, ApiResult};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, ReqwestTransport};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::aggregate::DashboardAnalytics;
use crate::domain::{AuthToken, Draft, LoginRequest, RegisterRequest, Resource, User};

/// Payload type sent for a resource's create and update calls
pub type PayloadOf<R> = <<R as Resource>::Draft as Draft>::Payload;

/// Client for one session: a transport plus the bearer token, if any
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
    token: Option<String>,
}

impl<T: HttpTransport> ApiClient<T> {
    /// Anonymous client, for login and register
    pub fn new(transport: T) -> Self {
        Self { transport, token: None }
    }

    pub fn authorized(transport: T, token: impl Into<String>) -> Self {
        Self {
            transport,
            token: Some(token.into()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    // ========================
    // Session
    // ========================

    pub async fn login(&self, credentials: &LoginRequest) -> ApiResult<AuthToken> {
        self.call(Method::Post, "/login".to_string(), Some(credentials), false).await
    }

    pub async fn register(&self, registration: &RegisterRequest) -> ApiResult<AuthToken> {
        self.call(Method::Post, "/register".to_string(), Some(registration), false).await
    }

    pub async fn me(&self) -> ApiResult<User> {
        self.call(Method::Get, "/me".to_string(), None::<&()>, true).await
    }

    // ========================
    // Resources
    // ========================

    pub async fn list<R: Resource>(&self) -> ApiResult<Vec<R>> {
        self.call(Method::Get, format!("/{}", R::COLLECTION), None::<&()>, true).await
    }

    /// Returns the record as stored by the server
    pub async fn create<R: Resource>(&self, payload: &PayloadOf<R>) -> ApiResult<R> {
        self.call(Method::Post, format!("/{}", R::COLLECTION), Some(payload), true).await
    }

    /// The backend acknowledges updates without echoing the record, so
    /// callers re-fetch the list.
    pub async fn update<R: Resource>(&self, id: &str, payload: &PayloadOf<R>) -> ApiResult<()> {
        let path = format!("/{}/{}", R::COLLECTION, id);
        self.execute(Method::Put, path, Some(payload), true).await.map(|_| ())
    }

    pub async fn dashboard(&self) -> ApiResult<DashboardAnalytics> {
        self.call(Method::Get, "/analytics/dashboard".to_string(), None::<&()>, true).await
    }

    // ========================
    // Plumbing
    // ========================

    async fn call<B, R>(&self, method: Method, path: String, body: Option<&B>, auth: bool) -> ApiResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let text = self.execute(method, path, body, auth).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn execute<B>(&self, method: Method, path: String, body: Option<&B>, auth: bool) -> ApiResult<String>
    where
        B: Serialize + ?Sized,
    {
        let bearer = if auth {
            // Fail closed: never hit a protected endpoint anonymously.
            let token = self
                .token
                .clone()
                .ok_or_else(|| ApiError::Unauthorized("no session token".to_string()))?;
            Some(token)
        } else {
            None
        };
        let body = body
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| ApiError::Encode(e.to_string()))?;

        debug!(?method, %path, "api request");
        let response = self
            .transport
            .send(ApiRequest { method, path, bearer, body })
            .await?;

        if response.is_success() {
            Ok(response.body)
        } else {
            Err(ApiError::from_status(response.status, &response.body))
        }
    }
}
