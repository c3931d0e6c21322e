use crate::domain::model::{ReconOutput, ReconRequest};
use crate::domain::ports::ReconBackend;
use crate::utils::error::{QsmError, Result};
use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// STI-Suite entry point for dual-echo reconstruction
const DUAL_ECHO_ROUTINE: &str = "QSM_DualEchoV3";
/// STI-Suite entry point for single-echo reconstruction
const SINGLE_ECHO_ROUTINE: &str = "QSM_SingleEchoV1";

/// Drives the STI-Suite QSM routines through a generated MATLAB script.
///
/// The backend writes the call into the output directory and launches the
/// MATLAB executable on it. In dry-run mode the script is written and the
/// command logged, but nothing is launched.
pub struct MatlabStiBackend {
    executable: PathBuf,
    dry_run: bool,
}

impl MatlabStiBackend {
    pub fn new(executable: PathBuf, dry_run: bool) -> Self {
        Self {
            executable,
            dry_run,
        }
    }

    /// MATLAB vector literal for the echo times, e.g. `[4.5 9]`.
    fn echo_times_literal(echo_times: &[f64]) -> String {
        let values: Vec<String> = echo_times.iter().map(|te| te.to_string()).collect();
        format!("[{}]", values.join(" "))
    }

    fn render_script(routine: &str, request: &ReconRequest) -> String {
        format!(
            "{}('{}', '{}', '{}', {}, {});\nexit;\n",
            routine,
            request.input_dir.display(),
            request.mask_file.display(),
            request.output_dir.display(),
            Self::echo_times_literal(&request.echo_times),
            request.coil_count
        )
    }

    fn run_routine(&self, routine: &str, request: &ReconRequest) -> Result<ReconOutput> {
        fs::create_dir_all(&request.output_dir)?;

        let script_path = request.output_dir.join("qsm_recon.m");
        fs::write(&script_path, Self::render_script(routine, request))?;
        tracing::debug!("Wrote MATLAB script to {}", script_path.display());

        let mut cmd = Command::new(&self.executable);
        cmd.arg("-nosplash")
            .arg("-nodesktop")
            .arg("-nodisplay")
            .arg("-r")
            .arg(format!("run('{}');", script_path.display()));

        if self.dry_run {
            tracing::info!("Dry run, skipping: {:?}", cmd);
            return Ok(ReconOutput::in_dir(&request.output_dir));
        }

        tracing::debug!("Launching: {:?}", cmd);
        let status = cmd.status().map_err(|e| QsmError::BackendError {
            message: format!("failed to launch '{}': {}", self.executable.display(), e),
        })?;

        if !status.success() {
            return Err(QsmError::BackendError {
                message: format!("{} failed: matlab exited with {}", routine, status),
            });
        }

        Ok(ReconOutput::in_dir(&request.output_dir))
    }
}

impl ReconBackend for MatlabStiBackend {
    fn dual_echo(&self, request: &ReconRequest) -> Result<ReconOutput> {
        self.run_routine(DUAL_ECHO_ROUTINE, request)
    }

    fn single_echo(&self, request: &ReconRequest) -> Result<ReconOutput> {
        self.run_routine(SINGLE_ECHO_ROUTINE, request)
    }
}
