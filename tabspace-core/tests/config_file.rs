use pretty_assertions::assert_eq;
use std::path::PathBuf;
use tabspace_core::config::{ConfigLoader, OrphanedTabPolicy};
use tabspace_core::error::{ConfigError, CoreError};
use tabspace_core::utils::paths::workspace_store_path;
use tempfile::tempdir;

#[test]
fn full_config_file_drives_the_store_location() {
    let dir = tempdir().unwrap();
    let profile = dir.path().join("profile");
    let log_file = dir.path().join("logs").join("tabspace.log");
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        format!(
            r#"
[logging]
level = "DEBUG"
format = "Json"
file_path = "{}"

[workspaces]
enabled = true
profile_dir = "{}"
store_dir = "zen-workspaces"
orphaned_tabs = "reassign_to_default"
repair_missing_default = false
"#,
            log_file.display(),
            profile.display()
        ),
    )
    .unwrap();

    let config = ConfigLoader::load_from_path(&config_path).unwrap();
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.logging.file_path, Some(log_file.clone()));
    assert!(log_file.parent().unwrap().is_dir());

    let ws = &config.workspaces;
    assert!(ws.enabled);
    assert_eq!(ws.orphaned_tabs, OrphanedTabPolicy::ReassignToDefault);
    assert!(!ws.repair_missing_default);
    assert_eq!(ws.default_workspace_name, "Default Workspace");
    assert_eq!(
        workspace_store_path(ws).unwrap(),
        PathBuf::from(&profile).join("zen-workspaces").join("Workspaces.json")
    );
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(&config_path, "[workspaces]\nenabeld = true\n").unwrap();

    match ConfigLoader::load_from_path(&config_path) {
        Err(CoreError::Config(ConfigError::ParseError(e))) => {
            assert!(e.to_string().contains("enabeld"));
        }
        other => panic!("Expected a parse error, got {:?}", other),
    }
}

#[test]
fn nested_store_file_is_rejected() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(&config_path, "[workspaces]\nstore_file = \"../escape.json\"\n").unwrap();

    assert!(matches!(
        ConfigLoader::load_from_path(&config_path),
        Err(CoreError::Config(ConfigError::ValidationError(_)))
    ));
}
