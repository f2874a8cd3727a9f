//! Device service - discovery, registration and configuration.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::DISCOVERABLE_DEVICES;
use crate::infra::DeviceRepository;
use common::{AppResult, OptionExt};
use domain::{Device, DeviceCommand, DeviceConfig, DeviceConfigurationResponse, DiscoveredDevice};

/// Device service trait for dependency injection.
#[async_trait]
pub trait DeviceService: Send + Sync {
    /// Devices visible on the network
    fn discover(&self) -> Vec<DiscoveredDevice>;

    /// Register a new device, recording its initial configuration
    async fn register(
        &self,
        name: String,
        device_type: String,
        initial_config: DeviceConfig,
    ) -> AppResult<Device>;

    /// Store a new configuration for an existing device
    async fn configure(
        &self,
        id: Uuid,
        configuration: DeviceConfig,
    ) -> AppResult<DeviceConfigurationResponse>;
}

/// Concrete implementation of DeviceService.
pub struct DeviceManager {
    devices: Arc<dyn DeviceRepository>,
}

impl DeviceManager {
    pub fn new(devices: Arc<dyn DeviceRepository>) -> Self {
        Self { devices }
    }
}

#[async_trait]
impl DeviceService for DeviceManager {
    fn discover(&self) -> Vec<DiscoveredDevice> {
        DISCOVERABLE_DEVICES
            .iter()
            .map(|(name, device_type, online, identifier)| {
                DiscoveredDevice::new(name, device_type, *online, identifier)
            })
            .collect()
    }

    async fn register(
        &self,
        name: String,
        device_type: String,
        initial_config: DeviceConfig,
    ) -> AppResult<Device> {
        let device = self.devices.create(name, device_type, initial_config).await?;

        tracing::info!(device_id = %device.id, device_type = %device.device_type, "Device registered");
        Ok(device)
    }

    async fn configure(
        &self,
        id: Uuid,
        configuration: DeviceConfig,
    ) -> AppResult<DeviceConfigurationResponse> {
        let device = self.devices.find_by_id(id).await?.ok_or_not_found()?;

        self.devices
            .record_configuration(
                device.id,
                DeviceCommand::UpdateConfiguration,
                configuration.clone(),
            )
            .await?;

        tracing::info!(device_id = %device.id, "Device configuration stored");
        Ok(DeviceConfigurationResponse::updated(device.id, configuration))
    }
}
