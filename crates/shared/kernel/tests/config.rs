use ark_kernel::config::{ConfigError, load_config_with_env};
use ark_kernel::domain::config::ArkConfig;
use std::fs;
use tempfile::tempdir;

fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

#[test]
fn defaults_apply_without_sources() {
    let cfg: ArkConfig = load_config_with_env(None, Vec::new()).expect("load");

    assert!(cfg.vault.master_secret.is_none());
    assert_eq!(cfg.logging.level, "warn");
}

#[test]
fn environment_overrides_nested_keys() {
    let cfg: ArkConfig = load_config_with_env(
        None,
        env(&[("ARK__VAULT__MASTER_SECRET", "00ff"), ("ARK__LOGGING__LEVEL", "debug")]),
    )
    .expect("load");

    assert_eq!(cfg.vault.master_secret_hex(), Some("00ff"));
    assert_eq!(cfg.logging.level, "debug");
}

#[test]
fn file_is_layered_under_environment() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("ark.toml");
    fs::write(
        &path,
        "[vault]\nmaster_secret = \"aa\"\n\n[logging]\nlevel = \"info\"\njson = true\n",
    )
    .expect("write config");

    let cfg: ArkConfig =
        load_config_with_env(Some(path.as_path()), env(&[("ARK__VAULT__MASTER_SECRET", "bb")]))
            .expect("load");

    assert_eq!(cfg.vault.master_secret_hex(), Some("bb"));
    assert_eq!(cfg.logging.level, "info");
    assert!(cfg.logging.json);
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("absent.toml");

    let err = load_config_with_env::<ArkConfig, _>(Some(path.as_path()), Vec::new()).unwrap_err();
    assert!(matches!(err, ConfigError::Config { .. }));
    assert_eq!(err.kind(), "config");
}
