use clap::Parser;
use qsm_dispatch::utils::{logger, validation::Validate};
use qsm_dispatch::{
    CliConfig, MatlabStiBackend, QsmDispatcher, ReconRequest, RunManifest,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting qsm-dispatch");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let request = ReconRequest::from_config(&config);
    let backend = MatlabStiBackend::new(config.matlab.clone(), config.dry_run);
    let dispatcher = QsmDispatcher::new(backend);

    match dispatcher.run(&request) {
        Ok(output) => {
            if !config.dry_run {
                let mode = request.mode_label().unwrap_or("unknown");
                let manifest = RunManifest::new(mode, request.clone(), output);
                match manifest.write_to(&request.output_dir) {
                    Ok(path) => tracing::debug!("Run manifest written to {}", path.display()),
                    Err(e) => tracing::warn!("Could not write run manifest: {}", e),
                }
            }

            tracing::info!("✅ QSM reconstruction completed successfully!");
            tracing::info!("📁 Outputs under: {}", request.output_dir.display());
            println!("✅ QSM reconstruction completed successfully!");
            println!("📁 Outputs under: {}", request.output_dir.display());
        }
        Err(e) => {
            tracing::error!(
                "❌ QSM reconstruction failed: {} (Severity: {:?})",
                e,
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

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
