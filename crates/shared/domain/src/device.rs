//! Device registry types.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{DEVICE_REGISTRATION_SUCCESS, MSG_DEVICE_CONFIGURED};

/// Opaque device configuration, stored verbatim and never interpreted.
pub type DeviceConfig = BTreeMap<String, serde_json::Value>;

/// Command recorded alongside a stored configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceCommand {
    /// Configuration supplied when the device was registered
    InitialConfiguration,
    /// Configuration pushed through the configure endpoint
    UpdateConfiguration,
}

impl DeviceCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceCommand::InitialConfiguration => "InitialConfiguration",
            DeviceCommand::UpdateConfiguration => "UpdateConfiguration",
        }
    }
}

impl std::fmt::Display for DeviceCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registered device
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub id: Uuid,
    pub name: String,
    pub device_type: String,
    pub is_online: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A device visible on the network but not necessarily registered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DiscoveredDevice {
    pub name: String,
    pub device_type: String,
    pub is_online: bool,
    pub unique_identifier: String,
}

impl DiscoveredDevice {
    pub fn new(name: &str, device_type: &str, is_online: bool, unique_identifier: &str) -> Self {
        Self {
            name: name.to_string(),
            device_type: device_type.to_string(),
            is_online,
            unique_identifier: unique_identifier.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DiscoverDevicesResponse {
    pub devices: Vec<DiscoveredDevice>,
}

/// Confirmation returned after a device is registered
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RegisterDeviceResponse {
    pub device_id: Uuid,
    pub name: String,
    pub device_type: String,
    pub registration_status: String,
}

impl From<Device> for RegisterDeviceResponse {
    fn from(device: Device) -> Self {
        Self {
            device_id: device.id,
            name: device.name,
            device_type: device.device_type,
            registration_status: DEVICE_REGISTRATION_SUCCESS.to_string(),
        }
    }
}

/// Confirmation returned after a configuration is stored
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DeviceConfigurationResponse {
    pub success: bool,
    pub device_id: Uuid,
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub new_configuration: DeviceConfig,
    pub message: String,
}

impl DeviceConfigurationResponse {
    /// Successful update of `device_id` to `configuration`
    pub fn updated(device_id: Uuid, configuration: DeviceConfig) -> Self {
        Self {
            success: true,
            device_id,
            new_configuration: configuration,
            message: MSG_DEVICE_CONFIGURED.to_string(),
        }
    }
}
