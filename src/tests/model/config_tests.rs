use std::path::Path;

use super::*;

fn full() -> AscConfig {
    AscConfig {
        issuer_id: Some("issuer".to_string()),
        key_id: Some("KEY123".to_string()),
        app_id: Some("6758553766".to_string()),
        ..AscConfig::default()
    }
}

#[test]
fn missing_file_loads_empty_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = AscConfig::load(&dir.path().join("config.json")).expect("load");
    assert_eq!(cfg, AscConfig::default());
}

#[test]
fn load_reads_partial_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"issuer_id": "iss", "locale": "en-US"}"#).expect("write");
    let cfg = AscConfig::load(&path).expect("load");
    assert_eq!(cfg.issuer_id.as_deref(), Some("iss"));
    assert_eq!(cfg.locale.as_deref(), Some("en-US"));
    assert!(cfg.app_id.is_none());
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{not json").expect("write");
    assert!(AscConfig::load(&path).is_err());
}

#[test]
fn overrides_win_over_file_values() {
    let merged = full().merge(AscConfig {
        app_id: Some("other".to_string()),
        ..AscConfig::default()
    });
    assert_eq!(merged.app_id.as_deref(), Some("other"));
    assert_eq!(merged.issuer_id.as_deref(), Some("issuer"));
}

#[test]
fn resolve_applies_defaults() {
    let root = Path::new("/project");
    let settings = full().resolve(root).expect("resolve");
    assert_eq!(settings.locale, DEFAULT_LOCALE);
    assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(
        settings.credentials.private_key_path,
        root.join(".appstoreconnect/private_keys/AuthKey_KEY123.p8")
    );
}

#[test]
fn relative_key_path_resolves_against_project_root() {
    let root = Path::new("/project");
    let mut cfg = full();
    cfg.private_key_path = Some("keys/k.p8".into());
    let settings = cfg.resolve(root).expect("resolve");
    assert_eq!(settings.credentials.private_key_path, root.join("keys/k.p8"));
}

#[test]
fn resolve_requires_identity_fields() {
    let mut cfg = full();
    cfg.key_id = None;
    let err = cfg.resolve(Path::new("/project")).unwrap_err();
    assert!(err.to_string().contains("key id"), "{}", err);
}
