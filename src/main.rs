use anyhow::Context;
use clap::Parser;
use vet_clinic::domain::ports::AuditSink;
use vet_clinic::utils::{logger, validation::Validate};
use vet_clinic::{run_menu, CliConfig, Clinic, ConsoleIo, FileAuditLog, TracingAudit};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting vet-clinic");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let audit: Box<dyn AuditSink> = if config.audit.enabled {
        match FileAuditLog::open(&config.audit.path, config.audit.format) {
            Ok(log) => {
                tracing::debug!("Audit log at {}", log.path().display());
                Box::new(log)
            }
            Err(e) => {
                tracing::warn!(
                    "Could not open audit log {}: {}. Continuing without it.",
                    config.audit.path,
                    e
                );
                Box::new(TracingAudit)
            }
        }
    } else {
        Box::new(TracingAudit)
    };

    let mut clinic = Clinic::with_settings(audit, config.settings());
    let mut console = ConsoleIo::stdio();

    run_menu(&mut clinic, &mut console).context("menu loop failed")?;

    Ok(())
}
