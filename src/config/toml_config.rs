use crate::config::DEFAULT_COIL_COUNT;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub study: StudyConfig,
    pub paths: PathsConfig,
    pub acquisition: AcquisitionConfig,
    pub matlab: Option<MatlabConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    pub input_dir: PathBuf,
    pub mask_file: PathBuf,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcquisitionConfig {
    /// Echo times in ms, acquisition order
    pub echo_times: Vec<f64>,
    pub coil_count: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatlabConfig {
    pub executable: Option<PathBuf>,
    pub dry_run: Option<bool>,
}

impl TomlConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn matlab_executable(&self) -> PathBuf {
        self.matlab
            .as_ref()
            .and_then(|m| m.executable.clone())
            .unwrap_or_else(|| PathBuf::from("matlab"))
    }

    pub fn dry_run(&self) -> bool {
        self.matlab
            .as_ref()
            .and_then(|m| m.dry_run)
            .unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn input_dir(&self) -> &Path {
        &self.paths.input_dir
    }

    fn mask_file(&self) -> &Path {
        &self.paths.mask_file
    }

    fn output_dir(&self) -> &Path {
        &self.paths.output_dir
    }

    fn echo_times(&self) -> &[f64] {
        &self.acquisition.echo_times
    }

    fn coil_count(&self) -> u32 {
        self.acquisition.coil_count.unwrap_or(DEFAULT_COIL_COUNT)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("paths.input_dir", &self.paths.input_dir)?;
        validate_path("paths.mask_file", &self.paths.mask_file)?;
        validate_path("paths.output_dir", &self.paths.output_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[study]
name = "t2star_qsm"
description = "Dual-echo T2* QSM reconstruction"

[paths]
input_dir = "/data/swi_coils"
mask_file = "/data/mask.nii.gz"
output_dir = "/data/qsm_out"

[acquisition]
echo_times = [4.5, 9.0]
coil_count = 4

[matlab]
executable = "/usr/local/bin/matlab"
dry_run = true
"#;

    #[test]
    fn test_parse_full_config() {
        let config: TomlConfig = toml::from_str(SAMPLE).unwrap();

        assert_eq!(config.study.name, "t2star_qsm");
        assert_eq!(config.echo_times(), &[4.5, 9.0]);
        assert_eq!(config.coil_count(), 4);
        assert_eq!(
            config.matlab_executable(),
            PathBuf::from("/usr/local/bin/matlab")
        );
        assert!(config.dry_run());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_without_matlab_section() {
        let minimal = r#"
[study]
name = "single_echo"

[paths]
input_dir = "in"
mask_file = "mask.nii.gz"
output_dir = "out"

[acquisition]
echo_times = [20.0]
"#;
        let config: TomlConfig = toml::from_str(minimal).unwrap();

        assert_eq!(config.coil_count(), DEFAULT_COIL_COUNT);
        assert_eq!(config.matlab_executable(), PathBuf::from("matlab"));
        assert!(!config.dry_run());
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let result: std::result::Result<TomlConfig, _> = toml::from_str("not valid toml [");
        assert!(result.is_err());
    }
}
