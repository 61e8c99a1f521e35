use anyhow::Context;
use article_catalogue::utils::error::{CatalogueError, ErrorSeverity};
use article_catalogue::utils::logger;
use article_catalogue::{CatalogueApp, CliConfig, Command};
use clap::Parser;

fn run(app: &CatalogueApp, command: Command) -> anyhow::Result<String> {
    let name = command.name();
    app.run(command)
        .with_context(|| format!("'{}' failed on {}", name, app.settings().catalogue_file.display()))
}

fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn report(e: &CatalogueError) -> i32 {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("{}", e.user_friendly_message());
    exit_code(e.severity())
}

fn main() {
    let config = CliConfig::parse();

    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(
        settings.verbose,
        settings.log_level.as_deref(),
        settings.log_format,
    );
    tracing::debug!("Settings: {:?}", settings);

    let app = CatalogueApp::new(settings);

    match run(&app, config.command.into()) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            let code = match e.downcast_ref::<CatalogueError>() {
                Some(catalogue_error) => report(catalogue_error),
                None => {
                    tracing::error!("❌ {:#}", e);
                    eprintln!("Error: {}", e);
                    1
                }
            };
            tracing::debug!("{:#}", e);
            std::process::exit(code);
        }
    }
}
