//! OpenAPI documentation configuration.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{account_handler, device_handler};
use crate::services::LoginResponse;
use domain::{
    AccountResponse, AccountRole, CreateAccountResponse, DeviceConfigurationResponse,
    DiscoverDevicesResponse, DiscoveredDevice, RegisterDeviceResponse, UpdateProfileResponse,
};

/// OpenAPI documentation for the HomeSphere API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "HomeSphere API",
        version = "0.1.0",
        description = "Home-automation dashboard backend: accounts, sessions and device registry",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        account_handler::login,
        account_handler::register,
        account_handler::update_profile,
        account_handler::get_current_account,
        device_handler::discover_devices,
        device_handler::register_device,
        device_handler::configure_device,
    ),
    components(
        schemas(
            AccountRole,
            AccountResponse,
            CreateAccountResponse,
            UpdateProfileResponse,
            LoginResponse,
            account_handler::LoginRequest,
            account_handler::RegisterRequest,
            account_handler::UpdateProfileRequest,
            DiscoveredDevice,
            DiscoverDevicesResponse,
            RegisterDeviceResponse,
            DeviceConfigurationResponse,
            device_handler::RegisterDeviceRequest,
            device_handler::ConfigureDeviceRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Accounts", description = "Registration, login and profile"),
        (name = "Devices", description = "Device discovery, registration and configuration")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token obtained from /user/login"))
                        .build(),
                ),
            );
        }
    }
}
