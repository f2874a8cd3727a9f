//! Device endpoints driven through the real router.

mod support;

use axum::http::StatusCode;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde_json::json;
use uuid::Uuid;

use homesphere::infra::repositories::entities::device_control::{self, Entity as ControlEntity};

use support::spawn_app;

#[tokio::test]
async fn test_discover_returns_two_static_devices() {
    let app = spawn_app().await;

    let (status, body) = app.get("/devices/discover").await;

    assert_eq!(status, StatusCode::OK);
    let devices = body["devices"].as_array().unwrap();
    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0]["name"], "Smart Light");
    assert_eq!(devices[0]["is_online"], true);
    assert_eq!(devices[1]["device_type"], "temperature_control");
    assert_eq!(devices[1]["unique_identifier"], "66:77:88:99:AA:BB");
}

#[tokio::test]
async fn test_register_device() {
    let app = spawn_app().await;

    let (status, body) = app
        .post(
            "/devices/register",
            json!({"name": "Lamp", "deviceType": "light", "initialConfig": {"brightness": "80"}}),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Lamp");
    assert_eq!(body["deviceType"], "light");
    assert_eq!(body["registrationStatus"], "success");

    let device_id: Uuid = serde_json::from_value(body["deviceId"].clone()).unwrap();
    let controls = ControlEntity::find()
        .filter(device_control::Column::DeviceId.eq(device_id))
        .all(app.database.connection())
        .await
        .unwrap();
    assert_eq!(controls.len(), 1);
    assert_eq!(controls[0].command, "InitialConfiguration");
}

#[tokio::test]
async fn test_register_device_requires_name() {
    let app = spawn_app().await;

    let (status, body) = app
        .post("/devices/register", json!({"name": "", "deviceType": "light"}))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_configure_device() {
    let app = spawn_app().await;
    let (_, registered) = app
        .post("/devices/register", json!({"name": "Lamp", "deviceType": "light"}))
        .await;
    let id = registered["deviceId"].as_str().unwrap().to_string();

    let configuration = json!({"brightness": 40, "schedule": {"on": "07:00"}});
    let (status, body) = app
        .put(
            &format!("/devices/{}/configure", id),
            json!({"configuration": configuration}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["device_id"], id.as_str());
    assert_eq!(body["new_configuration"], configuration);
    assert_eq!(body["message"], "Device configuration updated successfully.");

    let updates = ControlEntity::find()
        .filter(device_control::Column::Command.eq("UpdateConfiguration"))
        .all(app.database.connection())
        .await
        .unwrap();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].value, configuration);
}

#[tokio::test]
async fn test_configure_unknown_device_is_not_found() {
    let app = spawn_app().await;

    let (status, body) = app
        .put(
            &format!("/devices/{}/configure", Uuid::new_v4()),
            json!({"configuration": {"on": true}}),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_configure_malformed_id_is_bad_request() {
    let app = spawn_app().await;

    let (status, _) = app
        .put("/devices/lamp-1/configure", json!({"configuration": {}}))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
