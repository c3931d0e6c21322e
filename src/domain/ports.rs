use crate::domain::model::{ReconOutput, ReconRequest};
use crate::utils::error::Result;
use std::path::Path;

/// The two external reconstruction routines the dispatcher forwards to.
///
/// Implementations own everything past the dispatch decision: phase
/// unwrapping, field-map estimation, dipole inversion. Errors they return
/// propagate through the dispatcher unchanged.
pub trait ReconBackend: Send + Sync {
    fn dual_echo(&self, request: &ReconRequest) -> Result<ReconOutput>;
    fn single_echo(&self, request: &ReconRequest) -> Result<ReconOutput>;
}

pub trait ConfigProvider: Send + Sync {
    fn input_dir(&self) -> &Path;
    fn mask_file(&self) -> &Path;
    fn output_dir(&self) -> &Path;
    fn echo_times(&self) -> &[f64];
    fn coil_count(&self) -> u32;
}
