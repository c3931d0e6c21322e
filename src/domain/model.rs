use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The five parameters every QSM reconstruction call receives.
///
/// The dispatcher inspects nothing here except the length of `echo_times`;
/// the rest is forwarded to the backend untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconRequest {
    /// Directory holding the per-coil k-space/phase data
    pub input_dir: PathBuf,
    /// Brain mask file (NIfTI)
    pub mask_file: PathBuf,
    /// Directory the reconstruction writes into
    pub output_dir: PathBuf,
    /// Echo times in ms, acquisition order
    pub echo_times: Vec<f64>,
    /// Number of receiver coils, passed through unexamined
    pub coil_count: u32,
}

impl ReconRequest {
    /// Reconstruction mode implied by the echo-time count, if valid.
    pub fn mode_label(&self) -> Option<&'static str> {
        match self.echo_times.len() {
            1 => Some("single-echo"),
            2 => Some("dual-echo"),
            _ => None,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self {
            input_dir: config.input_dir().to_path_buf(),
            mask_file: config.mask_file().to_path_buf(),
            output_dir: config.output_dir().to_path_buf(),
            echo_times: config.echo_times().to_vec(),
            coil_count: config.coil_count(),
        }
    }
}

/// Artifacts a reconstruction run produces under the output directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconOutput {
    pub qsm: PathBuf,
    pub tissue_phase: PathBuf,
    pub tissue_mask: PathBuf,
}

impl ReconOutput {
    /// Conventional artifact names used by the STI routines.
    pub fn in_dir(output_dir: &Path) -> Self {
        Self {
            qsm: output_dir.join("qsm.nii.gz"),
            tissue_phase: output_dir.join("tissue_phase.nii.gz"),
            tissue_mask: output_dir.join("tissue_mask.nii.gz"),
        }
    }
}

/// Provenance record written next to the reconstruction outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub finished_at: DateTime<Utc>,
    pub mode: String,
    pub request: ReconRequest,
    pub output: ReconOutput,
}

impl RunManifest {
    pub fn new(mode: &str, request: ReconRequest, output: ReconOutput) -> Self {
        Self {
            finished_at: Utc::now(),
            mode: mode.to_string(),
            request,
            output,
        }
    }

    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join("qsm_recon.json");
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_label() {
        let mut request = ReconRequest {
            input_dir: PathBuf::from("in"),
            mask_file: PathBuf::from("mask.nii.gz"),
            output_dir: PathBuf::from("out"),
            echo_times: vec![20.0],
            coil_count: 4,
        };
        assert_eq!(request.mode_label(), Some("single-echo"));

        request.echo_times = vec![4.5, 9.0];
        assert_eq!(request.mode_label(), Some("dual-echo"));

        request.echo_times.clear();
        assert_eq!(request.mode_label(), None);
    }

    #[test]
    fn test_recon_output_paths() {
        let output = ReconOutput::in_dir(Path::new("/out"));
        assert_eq!(output.qsm, PathBuf::from("/out/qsm.nii.gz"));
        assert_eq!(output.tissue_phase, PathBuf::from("/out/tissue_phase.nii.gz"));
        assert_eq!(output.tissue_mask, PathBuf::from("/out/tissue_mask.nii.gz"));
    }

    #[test]
    fn test_manifest_round_trip() {
        let request = ReconRequest {
            input_dir: PathBuf::from("/data/swi_coils"),
            mask_file: PathBuf::from("/data/mask.nii.gz"),
            output_dir: PathBuf::from("/out"),
            echo_times: vec![4.5, 9.0],
            coil_count: 32,
        };
        let output = ReconOutput::in_dir(Path::new("/out"));
        let manifest = RunManifest::new("dual-echo", request.clone(), output);

        let json = serde_json::to_string(&manifest).unwrap();
        let parsed: RunManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.mode, "dual-echo");
        assert_eq!(parsed.request, request);
    }
}
