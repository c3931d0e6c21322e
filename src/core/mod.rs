pub mod dispatch;

pub use crate::domain::model::{ReconOutput, ReconRequest, RunManifest};
pub use crate::domain::ports::{ConfigProvider, ReconBackend};
pub use crate::utils::error::Result;
