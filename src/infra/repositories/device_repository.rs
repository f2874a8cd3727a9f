//! Device repository: registered devices and their configuration records.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};
use uuid::Uuid;

use super::entities::device::{ActiveModel, Entity as DeviceEntity};
use super::entities::device_control::ActiveModel as ControlActiveModel;
use common::{AppError, AppResult};
use domain::{Device, DeviceCommand, DeviceConfig};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Device repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DeviceRepository: Send + Sync {
    /// Find device by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Device>>;

    /// Register an offline device. A non-empty initial configuration is
    /// recorded in the same transaction.
    async fn create(
        &self,
        name: String,
        device_type: String,
        initial_config: DeviceConfig,
    ) -> AppResult<Device>;

    /// Append a configuration record for an existing device
    async fn record_configuration(
        &self,
        device_id: Uuid,
        command: DeviceCommand,
        configuration: DeviceConfig,
    ) -> AppResult<()>;
}

/// Concrete implementation of DeviceRepository
pub struct DeviceStore {
    db: DatabaseConnection,
}

impl DeviceStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn control_row(
    device_id: Uuid,
    command: DeviceCommand,
    configuration: &DeviceConfig,
) -> AppResult<ControlActiveModel> {
    let value =
        serde_json::to_value(configuration).map_err(|e| AppError::internal(e.to_string()))?;

    Ok(ControlActiveModel {
        id: Set(Uuid::new_v4()),
        device_id: Set(device_id),
        command: Set(command.as_str().to_string()),
        value: Set(value),
        created_at: Set(chrono::Utc::now()),
    })
}

#[async_trait]
impl DeviceRepository for DeviceStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Device>> {
        let result = DeviceEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Device::from))
    }

    async fn create(
        &self,
        name: String,
        device_type: String,
        initial_config: DeviceConfig,
    ) -> AppResult<Device> {
        let now = chrono::Utc::now();
        let txn = self.db.begin().await?;

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            device_type: Set(device_type),
            is_online: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        if !initial_config.is_empty() {
            control_row(model.id, DeviceCommand::InitialConfiguration, &initial_config)?
                .insert(&txn)
                .await?;
        }

        txn.commit().await?;
        Ok(Device::from(model))
    }

    async fn record_configuration(
        &self,
        device_id: Uuid,
        command: DeviceCommand,
        configuration: DeviceConfig,
    ) -> AppResult<()> {
        control_row(device_id, command, &configuration)?
            .insert(&self.db)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::entities::device_control::{self, Entity as ControlEntity};
    use crate::infra::Database;
    use common::DatabaseConfig;
    use sea_orm::{ColumnTrait, PaginatorTrait, QueryFilter};

    async fn store() -> DeviceStore {
        let db = Database::connect(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
        })
        .await
        .unwrap();
        DeviceStore::new(db.get_connection())
    }

    fn config(key: &str, value: serde_json::Value) -> DeviceConfig {
        let mut config = DeviceConfig::new();
        config.insert(key.to_string(), value);
        config
    }

    #[tokio::test]
    async fn test_create_registers_offline_device() {
        let store = store().await;

        let device = store
            .create("Lamp".into(), "light".into(), DeviceConfig::new())
            .await
            .unwrap();

        assert!(!device.is_online);
        let found = store.find_by_id(device.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Lamp");
        assert_eq!(ControlEntity::find().count(&store.db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_initial_config_is_recorded() {
        let store = store().await;

        let device = store
            .create(
                "Lamp".into(),
                "light".into(),
                config("brightness", serde_json::json!("80")),
            )
            .await
            .unwrap();

        let rows = ControlEntity::find()
            .filter(device_control::Column::DeviceId.eq(device.id))
            .all(&store.db)
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].command, "InitialConfiguration");
        assert_eq!(rows[0].value, serde_json::json!({"brightness": "80"}));
    }

    #[tokio::test]
    async fn test_record_configuration_appends_history() {
        let store = store().await;
        let device = store
            .create("Lamp".into(), "light".into(), config("on", serde_json::json!(false)))
            .await
            .unwrap();

        store
            .record_configuration(
                device.id,
                DeviceCommand::UpdateConfiguration,
                config("on", serde_json::json!(true)),
            )
            .await
            .unwrap();

        let updates = ControlEntity::find()
            .filter(device_control::Column::Command.eq("UpdateConfiguration"))
            .all(&store.db)
            .await
            .unwrap();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].value, serde_json::json!({"on": true}));
    }

    #[tokio::test]
    async fn test_find_unknown_device() {
        let store = store().await;
        assert!(store.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }
}
