//! JSON endpoints.

use axum::http::StatusCode;
use conference_portal::config::PortalConfig;
use serde_json::Value;

mod common;

#[tokio::test]
async fn health_reports_version() {
    let portal = common::start_default_portal().await;

    let res = portal.get("/health").await;
    assert_eq!(res.status(), StatusCode::OK);
    let json: Value = res.json().await.unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn create_returns_command() {
    let portal = common::start_default_portal().await;

    let res = portal
        .post_form(
            "/api/create",
            &[
                ("conference_name", "Summit"),
                ("user_count", "3"),
                ("force_password_change", "true"),
                ("password", "it's"),
            ],
        )
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let json: Value = res.json().await.unwrap();
    assert_eq!(json["operation"], "create");
    assert_eq!(
        json["command"],
        ".\\New-ConferenceUsers.ps1 -ConferenceName 'Summit' -UserCount 3 -Password 'it''s'"
    );
}

#[tokio::test]
async fn create_reports_every_field_error() {
    let portal = common::start_default_portal().await;

    let res = portal
        .post_form(
            "/api/create",
            &[
                ("conference_name", ""),
                ("user_count", "1001"),
                ("domain", "bad"),
                ("location", "Moon Base"),
            ],
        )
        .await;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json: Value = res.json().await.unwrap();
    let fields: Vec<&str> = json["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, ["conference_name", "user_count", "domain", "location"]);
    assert_eq!(json["errors"][1]["message"], "User Count must be between 1 and 1000");
}

#[tokio::test]
async fn remove_uses_configured_script() {
    let mut config = PortalConfig::default();
    config.scripts.remove_script = "Remove-EventUsers.ps1".into();
    let portal = common::start_portal(config).await;

    let res = portal
        .post_form(
            "/api/remove",
            &[
                ("conference_name", "Summit"),
                ("remove_groups", "true"),
                ("remove_resource_groups", "true"),
                ("dry_run", "true"),
            ],
        )
        .await;

    let json: Value = res.json().await.unwrap();
    assert_eq!(
        json["command"],
        ".\\Remove-EventUsers.ps1 -ConferenceName 'Summit' -RemoveResourceGroups $true -DryRun"
    );
}

#[tokio::test]
async fn restricted_location_list_is_enforced() {
    let mut config = PortalConfig::default();
    config.form.locations = vec!["West Europe".into()];
    let portal = common::start_portal(config).await;

    let res = portal
        .post_form(
            "/api/create",
            &[("conference_name", "Summit"), ("location", "East US")],
        )
        .await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
