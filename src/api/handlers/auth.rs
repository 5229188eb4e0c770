//! `/api/auth/*` endpoints.
//!
//! Flow Overview:
//! 1) Parse the JSON body (register/login) or the `Authorization` header (me/logout).
//! 2) Call the shared [`AuthStore`].
//! 3) Map the outcome, or the [`AuthError`], to a JSON response.

use axum::{
    Json,
    extract::{Extension, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error};
use utoipa::ToSchema;

use super::Detail;
use crate::auth::{AuthError, AuthStore, IdentityView};

#[derive(Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub access: String,
    pub user: IdentityView,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::DuplicateUser => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::NotAuthenticated | Self::InvalidToken => {
                StatusCode::UNAUTHORIZED
            }
            Self::TokenGeneration(err) => {
                error!("Failed to generate session token: {err}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(Detail::new(self.detail()))).into_response()
    }
}

/// Malformed bodies keep the extractor's status but answer in the `detail` shape.
fn rejection_response(rejection: &JsonRejection) -> Response {
    debug!("Rejected request body: {}", rejection.body_text());
    (
        rejection.status(),
        Json(Detail::new(rejection.body_text())),
    )
        .into_response()
}

fn authorization(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
}

#[utoipa::path(
    post,
    path = "/api/auth/register/",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Identity created", body = IdentityView),
        (status = 400, description = "Email already registered", body = Detail),
    ),
    tag = "auth"
)]
pub async fn register(
    store: Extension<Arc<AuthStore>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(&rejection),
    };

    match store
        .register(
            request.email,
            SecretString::from(request.password),
            request.full_name,
        )
        .await
    {
        Ok(view) => (StatusCode::CREATED, Json(view)).into_response(),
        Err(err) => err.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/login/",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session opened", body = LoginResponse),
        (status = 401, description = "Unknown email or wrong password", body = Detail),
    ),
    tag = "auth"
)]
pub async fn login(
    store: Extension<Arc<AuthStore>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(&rejection),
    };

    let password = SecretString::from(request.password);
    match store.login(&request.email, &password).await {
        Ok(outcome) => Json(LoginResponse {
            access: outcome.access_token,
            user: outcome.user,
        })
        .into_response(),
        Err(err) => err.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/auth/me/",
    responses(
        (status = 200, description = "Identity behind the bearer token", body = IdentityView),
        (status = 401, description = "Missing bearer header or unknown token", body = Detail),
    ),
    tag = "auth"
)]
pub async fn me(headers: HeaderMap, store: Extension<Arc<AuthStore>>) -> Response {
    match store.whoami(authorization(&headers)).await {
        Ok(view) => Json(view).into_response(),
        Err(err) => err.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/logout/",
    responses(
        (status = 200, description = "Always succeeds", body = Detail),
    ),
    tag = "auth"
)]
pub async fn logout(headers: HeaderMap, store: Extension<Arc<AuthStore>>) -> Json<Detail> {
    store.logout(authorization(&headers)).await;
    Json(Detail::new("ok"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, header::CONTENT_TYPE},
        routing::{get, post},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app(store: Arc<AuthStore>) -> Router {
        Router::new()
            .route("/api/auth/register/", post(register))
            .route("/api/auth/login/", post(login))
            .route("/api/auth/me/", get(me))
            .route("/api/auth/logout/", post(logout))
            .layer(Extension(store))
    }

    async fn send(app: &Router, request: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
        let response = app.clone().oneshot(request).await?;
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await?;
        Ok((status, serde_json::from_slice(&body)?))
    }

    fn post_json(uri: &str, body: &Value) -> anyhow::Result<Request<Body>> {
        Ok(Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))?)
    }

    #[tokio::test]
    async fn register_returns_created_view() -> anyhow::Result<()> {
        let app = app(Arc::new(AuthStore::new()));

        let (status, body) = send(
            &app,
            post_json(
                "/api/auth/register/",
                &json!({"email": "a@x.com", "password": "p1"}),
            )?,
        )
        .await?;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            json!({"id": "1", "email": "a@x.com", "full_name": "User"})
        );
        assert!(body.get("password").is_none());
        Ok(())
    }

    #[tokio::test]
    async fn register_accepts_null_full_name() -> anyhow::Result<()> {
        let app = app(Arc::new(AuthStore::new()));

        let (status, body) = send(
            &app,
            post_json(
                "/api/auth/register/",
                &json!({"email": "a@x.com", "password": "p1", "full_name": null}),
            )?,
        )
        .await?;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["full_name"], "User");
        Ok(())
    }

    #[tokio::test]
    async fn missing_field_is_rejected_with_detail() -> anyhow::Result<()> {
        let app = app(Arc::new(AuthStore::new()));

        let (status, body) = send(
            &app,
            post_json("/api/auth/login/", &json!({"email": "a@x.com"}))?,
        )
        .await?;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].as_str().is_some_and(|d| d.contains("password")));
        Ok(())
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() -> anyhow::Result<()> {
        let app = app(Arc::new(AuthStore::new()));

        let request = Request::builder()
            .method("POST")
            .uri("/api/auth/register/")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))?;
        let (status, body) = send(&app, request).await?;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].is_string());
        Ok(())
    }

    #[tokio::test]
    async fn me_distinguishes_missing_and_unknown_tokens() -> anyhow::Result<()> {
        let app = app(Arc::new(AuthStore::new()));

        let (status, body) = send(
            &app,
            Request::builder().uri("/api/auth/me/").body(Body::empty())?,
        )
        .await?;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({"detail": "Not authenticated"}));

        let (status, body) = send(
            &app,
            Request::builder()
                .uri("/api/auth/me/")
                .header(AUTHORIZATION, "Token abc")
                .body(Body::empty())?,
        )
        .await?;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({"detail": "Not authenticated"}));

        let (status, body) = send(
            &app,
            Request::builder()
                .uri("/api/auth/me/")
                .header(AUTHORIZATION, "Bearer nope")
                .body(Body::empty())?,
        )
        .await?;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({"detail": "Invalid token"}));
        Ok(())
    }

    #[tokio::test]
    async fn logout_without_header_is_ok() -> anyhow::Result<()> {
        let app = app(Arc::new(AuthStore::new()));

        let (status, body) = send(
            &app,
            Request::builder()
                .method("POST")
                .uri("/api/auth/logout/")
                .body(Body::empty())?,
        )
        .await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"detail": "ok"}));
        Ok(())
    }

    #[tokio::test]
    async fn demo_user_can_log_in() -> anyhow::Result<()> {
        let app = app(Arc::new(AuthStore::with_demo_user()));

        let (status, body) = send(
            &app,
            post_json(
                "/api/auth/login/",
                &json!({"email": "9876543210@demo.com", "password": "demo123"}),
            )?,
        )
        .await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["user"],
            json!({"id": "demo-user-1", "email": "9876543210@demo.com", "full_name": "Demo User"})
        );
        assert!(body["access"].as_str().is_some_and(|t| !t.is_empty()));
        Ok(())
    }

    #[test]
    fn token_generation_maps_to_internal_error() {
        let err = AuthError::TokenGeneration(rand::Error::new(std::io::Error::other("boom")));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
