use std::path::PathBuf;

use tempfile::TempDir;
use wgsl_dump::{load_config, CaptureConfig, CaptureError};

#[test]
fn defaults_match_capture_layout() {
    let config = CaptureConfig::default();
    assert_eq!(config.root, PathBuf::from("wgsl_dump_output"));
    assert_eq!(config.prefix, "webgpu:shader,");
    assert_eq!(config.shader_extension, ".wgsl");
}

#[test]
fn load_full_config_file() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("wgsl_dump.toml");
    std::fs::write(
        &file,
        r#"
            root = "captures"
            prefix = "webgpu:"
            shader_extension = ".shader.wgsl"
        "#,
    )
    .unwrap();

    let config = load_config(&file).unwrap();
    assert_eq!(config.root, PathBuf::from("captures"));
    assert_eq!(config.prefix, "webgpu:");
    assert_eq!(config.shader_extension, ".shader.wgsl");
}

#[test]
fn missing_and_invalid_files_fail() {
    let tmp = TempDir::new().unwrap();
    assert!(matches!(
        load_config(tmp.path().join("absent.toml")),
        Err(CaptureError::ConfigRead { .. })
    ));

    let file = tmp.path().join("bad.toml");
    std::fs::write(&file, "root = [").unwrap();
    assert!(matches!(
        load_config(&file),
        Err(CaptureError::ConfigParse { .. })
    ));
}
