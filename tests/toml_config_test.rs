use qsm_dispatch::utils::validation::Validate;
use qsm_dispatch::{ConfigProvider, MatlabStiBackend, QsmDispatcher, ReconRequest, TomlConfig};
use std::path::Path;
use tempfile::TempDir;

fn write_config(dir: &Path, output_dir: &Path, echo_times: &str) -> String {
    let content = format!(
        r#"
[study]
name = "t2star_qsm"
description = "T2* QSM reconstruction"

[paths]
input_dir = "/data/swi_coils"
mask_file = "/data/mask.nii.gz"
output_dir = "{}"

[acquisition]
echo_times = {}
coil_count = 4

[matlab]
dry_run = true
"#,
        output_dir.display(),
        echo_times
    );

    let path = dir.join("qsm-config.toml");
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_toml_driven_dual_echo_dispatch() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("qsm_out");

    let config_path = write_config(temp_dir.path(), &output_dir, "[4.5, 9.0]");
    let config = TomlConfig::from_file(&config_path).unwrap();
    config.validate().unwrap();

    assert_eq!(config.echo_times(), &[4.5, 9.0]);
    assert_eq!(config.coil_count(), 4);
    assert!(config.dry_run());

    let request = ReconRequest::from_config(&config);
    let backend = MatlabStiBackend::new(config.matlab_executable(), config.dry_run());
    let dispatcher = QsmDispatcher::new(backend);

    dispatcher.run(&request).unwrap();

    let script = std::fs::read_to_string(output_dir.join("qsm_recon.m")).unwrap();
    assert!(script.contains("QSM_DualEchoV3"));
}

#[test]
fn test_toml_single_echo_selects_single_echo_routine() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("qsm_out");

    let config_path = write_config(temp_dir.path(), &output_dir, "[20.0]");
    let config = TomlConfig::from_file(&config_path).unwrap();

    let request = ReconRequest::from_config(&config);
    let dispatcher = QsmDispatcher::new(MatlabStiBackend::new(
        config.matlab_executable(),
        config.dry_run(),
    ));

    dispatcher.run(&request).unwrap();

    let script = std::fs::read_to_string(output_dir.join("qsm_recon.m")).unwrap();
    assert!(script.contains("QSM_SingleEchoV1"));
}

#[test]
fn test_missing_config_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("does-not-exist.toml");

    let result = TomlConfig::from_file(missing.to_str().unwrap());
    assert!(result.is_err());
}
