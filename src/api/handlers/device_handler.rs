//! Device handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use common::{AppError, AppResult};
use domain::{
    DeviceConfig, DeviceConfigurationResponse, DiscoverDevicesResponse, RegisterDeviceResponse,
};

/// Device registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDeviceRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Living room lamp")]
    pub name: String,
    #[validate(length(min = 1, message = "Device type is required"))]
    #[schema(example = "light")]
    pub device_type: String,
    #[serde(default)]
    #[schema(value_type = Object, example = json!({"brightness": "80"}))]
    pub initial_config: DeviceConfig,
}

/// New configuration for a device, stored as given
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ConfigureDeviceRequest {
    #[schema(value_type = Object, example = json!({"brightness": 40, "color": "warm"}))]
    pub configuration: DeviceConfig,
}

/// Create device routes
pub fn device_routes() -> Router<AppState> {
    Router::new()
        .route("/discover", get(discover_devices))
        .route("/register", post(register_device))
        .route("/:id/configure", put(configure_device))
}

/// List devices visible on the network
#[utoipa::path(
    get,
    path = "/devices/discover",
    tag = "Devices",
    responses(
        (status = 200, description = "Discoverable devices", body = DiscoverDevicesResponse)
    )
)]
pub async fn discover_devices(State(state): State<AppState>) -> Json<DiscoverDevicesResponse> {
    Json(DiscoverDevicesResponse {
        devices: state.device_service.discover(),
    })
}

/// Register a new device
#[utoipa::path(
    post,
    path = "/devices/register",
    tag = "Devices",
    request_body = RegisterDeviceRequest,
    responses(
        (status = 201, description = "Device registered", body = RegisterDeviceResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn register_device(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterDeviceRequest>,
) -> AppResult<(StatusCode, Json<RegisterDeviceResponse>)> {
    let device = state
        .device_service
        .register(payload.name, payload.device_type, payload.initial_config)
        .await?;

    Ok((StatusCode::CREATED, Json(RegisterDeviceResponse::from(device))))
}

/// Store a new configuration for a device
#[utoipa::path(
    put,
    path = "/devices/{id}/configure",
    tag = "Devices",
    params(("id" = String, Path, description = "Device ID")),
    request_body = ConfigureDeviceRequest,
    responses(
        (status = 200, description = "Configuration stored", body = DeviceConfigurationResponse),
        (status = 400, description = "Malformed device ID"),
        (status = 404, description = "Device not found")
    )
)]
pub async fn configure_device(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<ConfigureDeviceRequest>,
) -> AppResult<Json<DeviceConfigurationResponse>> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| AppError::validation(format!("Invalid device ID: {}", id)))?;

    let response = state
        .device_service
        .configure(id, payload.configuration)
        .await?;

    Ok(Json(response))
}
