#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

/// Coil count assumed when a config source does not specify one.
pub const DEFAULT_COIL_COUNT: u32 = 32;
