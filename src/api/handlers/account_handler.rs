//! Account handlers: login, registration and profile.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentAccount;
use crate::api::AppState;
use crate::services::LoginResponse;
use common::AppResult;
use domain::{AccountResponse, CreateAccountResponse, Preferences, UpdateProfileResponse};

/// Login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// Account email address
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "user@example.com")]
    pub username: String,
    /// Account password
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// Account registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// Email address, used as the login name
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "SecurePass123!")]
    pub password: String,
    /// Free-form dashboard preferences
    #[serde(default)]
    #[schema(value_type = Object, example = json!({"theme": "dark"}))]
    pub preferences: Preferences,
}

/// Partial profile update; absent fields are left untouched
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
    pub id: Uuid,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: Option<String>,
}

/// Create account routes that need no session
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
        .route("/update", put(update_profile))
}

/// Create account routes that require a bearer token
pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_current_account))
}

/// Login and get a session token
#[utoipa::path(
    post,
    path = "/user/login",
    tag = "Accounts",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let token = state
        .auth_service
        .login(payload.username, payload.password)
        .await?;

    Ok(Json(token))
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/user/register",
    tag = "Accounts",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = CreateAccountResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Account already exists")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<CreateAccountResponse>)> {
    let account = state
        .auth_service
        .register(payload.email, payload.password, payload.preferences)
        .await?;

    Ok((StatusCode::CREATED, Json(CreateAccountResponse::from(account))))
}

/// Update profile fields
#[utoipa::path(
    put,
    path = "/user/update",
    tag = "Accounts",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = UpdateProfileResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Account not found"),
        (status = 409, description = "Email already in use")
    )
)]
pub async fn update_profile(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateProfileRequest>,
) -> AppResult<Json<UpdateProfileResponse>> {
    let response = state
        .account_service
        .update_profile(payload.id, payload.email, payload.name, payload.password)
        .await?;

    Ok(Json(response))
}

/// Get the profile of the authenticated account
#[utoipa::path(
    get,
    path = "/user/me",
    tag = "Accounts",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current account", body = AccountResponse),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn get_current_account(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAccount>,
) -> AppResult<Json<AccountResponse>> {
    let account = state.account_service.get_by_email(&current.email).await?;
    Ok(Json(AccountResponse::from(account)))
}
