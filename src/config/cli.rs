use crate::config::DEFAULT_COIL_COUNT;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "qsm-dispatch")]
#[command(about = "Dispatch single- or dual-echo QSM reconstruction")]
pub struct CliConfig {
    /// Directory holding the per-coil k-space/phase data
    #[arg(long)]
    pub input_dir: PathBuf,

    /// Brain mask file (NIfTI)
    #[arg(long)]
    pub mask_file: PathBuf,

    #[arg(long, default_value = "./qsm_out")]
    pub output_dir: PathBuf,

    /// Echo times in ms, comma separated (1 = single-echo, 2 = dual-echo)
    #[arg(long, value_delimiter = ',')]
    pub echo_times: Vec<f64>,

    /// Number of receiver coils
    #[arg(long, default_value_t = DEFAULT_COIL_COUNT)]
    pub coils: u32,

    /// MATLAB executable used to run the STI routines
    #[arg(long, default_value = "matlab")]
    pub matlab: PathBuf,

    /// Write the MATLAB script without launching MATLAB
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    fn mask_file(&self) -> &Path {
        &self.mask_file
    }

    fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn echo_times(&self) -> &[f64] {
        &self.echo_times
    }

    fn coil_count(&self) -> u32 {
        self.coils
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_dir", &self.input_dir)?;
        validate_path("mask_file", &self.mask_file)?;
        validate_path("output_dir", &self.output_dir)?;
        validate_non_empty_string("matlab", &self.matlab.to_string_lossy())?;
        // Echo-time arity is the dispatcher's call, not the config layer's.
        Ok(())
    }
}
