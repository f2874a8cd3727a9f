//! Device database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Device;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "devices")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub device_type: String,
    pub is_online: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Device {
    fn from(model: Model) -> Self {
        Device {
            id: model.id,
            name: model.name,
            device_type: model.device_type,
            is_online: model.is_online,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
