//! Catalog rendering driven by a YAML config file.

use problem_errors::{CatalogConfig, ErrDef};
use serde_json::json;
use std::io::Write;

mod errors {
    use problem_errors::ErrDef;

    pub const USER_NOT_FOUND: ErrDef =
        ErrDef::new(404, "User Not Found", "users.user.not_found.v1");
    pub const EMAIL_CONFLICT: ErrDef =
        ErrDef::new(409, "Email Already Exists", "users.user.email_conflict.v1");
    pub const VALIDATION: ErrDef =
        ErrDef::new(422, "Validation Failed", "users.user.validation.v1")
            .with_type("https://docs.example.com/problems/validation");
    pub const INTERNAL_DATABASE: ErrDef =
        ErrDef::new(500, "Internal Error", "users.internal.database.v1");

    pub const ALL: [ErrDef; 4] = [USER_NOT_FOUND, EMAIL_CONFLICT, VALIDATION, INTERNAL_DATABASE];
}

fn write_config(yaml: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("create temp config");
    file.write_all(yaml.as_bytes()).expect("write temp config");
    file
}

#[test]
fn catalog_uses_configured_base_url() {
    let file = write_config(
        r#"
type_base_url: "https://errors.example.com/"
default_headers:
  Cache-Control: "no-store"
"#,
    );
    let config = CatalogConfig::load_layered(file.path()).unwrap();

    let resp = errors::USER_NOT_FOUND.to_response_with(
        &config,
        "User 42 was not found",
        "/users/42",
        Some("req-9".to_string()),
    );

    assert_eq!(resp.status, 404);
    assert_eq!(
        serde_json::Value::Object(resp.body.clone()),
        json!({
            "type": "https://errors.example.com/users.user.not_found.v1",
            "title": "User Not Found",
            "detail": "User 42 was not found",
            "status": 404,
            "instance": "/users/42",
            "code": "users.user.not_found.v1",
            "traceId": "req-9"
        })
    );
    assert_eq!(resp.headers.as_ref().unwrap()["Cache-Control"], "no-store");
}

#[test]
fn explicit_type_beats_configured_base() {
    let file = write_config("type_base_url: \"https://errors.example.com\"\n");
    let config = CatalogConfig::load_layered(file.path()).unwrap();

    let resp = errors::VALIDATION.to_response_with(&config, "email is required", "", None);
    assert_eq!(
        resp.body["type"],
        json!("https://docs.example.com/problems/validation")
    );
}

#[test]
fn every_catalog_entry_renders() {
    let config = CatalogConfig::load_or_default(None::<&str>).unwrap();
    for def in errors::ALL {
        let resp = def.to_response("detail");
        assert_eq!(resp.status, i32::from(def.status));
        assert_eq!(resp.body["code"], json!(def.code));
        assert!(resp.to_http().is_ok(), "{} should render", def.code);
        assert_eq!(def.to_response_with(&config, "detail", "", None), resp);
    }
}

#[test]
fn config_round_trips_through_yaml() {
    let mut config = CatalogConfig {
        type_base_url: Some("https://errors.example.com/".to_string()),
        ..CatalogConfig::default()
    };
    config
        .default_headers
        .insert("Cache-Control".to_string(), "no-store".to_string());

    let file = write_config(&config.to_yaml().unwrap());
    let loaded = CatalogConfig::load_layered(file.path()).unwrap();
    assert_eq!(loaded.type_base_url, config.type_base_url);
    assert_eq!(loaded.default_headers, config.default_headers);
}

#[test]
fn err_def_is_copy_and_const() {
    let def: ErrDef = errors::EMAIL_CONFLICT;
    let copy = def;
    assert_eq!(def, copy);
    assert_eq!(copy.type_url, None);
}
