pub mod backends;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use backends::matlab::MatlabStiBackend;
pub use core::dispatch::QsmDispatcher;
pub use domain::model::{ReconOutput, ReconRequest, RunManifest};
pub use domain::ports::{ConfigProvider, ReconBackend};
pub use utils::error::{QsmError, Result};
