use clap::Parser;
use qsm_dispatch::config::toml_config::TomlConfig;
use qsm_dispatch::utils::{logger, validation::Validate};
use qsm_dispatch::{MatlabStiBackend, QsmDispatcher, ReconRequest, RunManifest};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "qsm-toml")]
#[command(about = "QSM reconstruction dispatch with TOML configuration support")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "qsm-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override MATLAB executable from config
    #[arg(long)]
    matlab: Option<PathBuf>,

    /// Write the MATLAB script without launching MATLAB
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based QSM dispatch");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    tracing::info!("🧲 Study: {}", config.study.name);
    if let Some(description) = &config.study.description {
        tracing::info!("📝 {}", description);
    }

    let dry_run = args.dry_run || config.dry_run();
    let executable = args.matlab.unwrap_or_else(|| config.matlab_executable());
    if dry_run {
        tracing::info!("🔧 Dry run enabled, MATLAB will not be launched");
    }

    let request = ReconRequest::from_config(&config);
    let backend = MatlabStiBackend::new(executable, dry_run);
    let dispatcher = QsmDispatcher::new(backend);

    match dispatcher.run(&request) {
        Ok(output) => {
            if !dry_run {
                let mode = request.mode_label().unwrap_or("unknown");
                let manifest = RunManifest::new(mode, request.clone(), output);
                if let Err(e) = manifest.write_to(&request.output_dir) {
                    tracing::warn!("Could not write run manifest: {}", e);
                }
            }

            println!("✅ QSM reconstruction completed successfully!");
            println!("📁 Outputs under: {}", request.output_dir.display());
        }
        Err(e) => {
            tracing::error!("❌ QSM reconstruction failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                qsm_dispatch::utils::error::ErrorSeverity::Low => 0,
                qsm_dispatch::utils::error::ErrorSeverity::Medium => 2,
                qsm_dispatch::utils::error::ErrorSeverity::High => 1,
                qsm_dispatch::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
