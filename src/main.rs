// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info};
use std::io::Write;

use crate::app_config::Config;
use crate::language_service::LanguageService;
use crate::server::ApiServer;
use crate::validation::TextValidator;

mod app_config;
mod artifacts;
mod dataset;
mod errors;
mod language_service;
mod language_utils;
mod pipeline;
mod providers;
mod server;
mod validation;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

impl From<app_config::LogLevel> for LevelFilter {
    fn from(level: app_config::LogLevel) -> Self {
        match level {
            app_config::LogLevel::Error => LevelFilter::Error,
            app_config::LogLevel::Warn => LevelFilter::Warn,
            app_config::LogLevel::Info => LevelFilter::Info,
            app_config::LogLevel::Debug => LevelFilter::Debug,
            app_config::LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the detection/translation HTTP server (default command)
    Serve(ServeArgs),

    /// Generate shell completions for lingogate
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ServeArgs {
    /// Address to bind the server to (overrides config)
    #[arg(short, long)]
    bind: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// lingogate - language detection and translation gateway
///
/// Serves language identification and translation-to-English over HTTP,
/// either for a single text or for every row of an uploaded spreadsheet.
#[derive(Parser, Debug)]
#[command(name = "lingogate")]
#[command(version = "1.0.0")]
#[command(about = "Language detection and translation HTTP service")]
#[command(long_about = "lingogate serves language detection and translation-to-English over HTTP.

EXAMPLES:
    lingogate                                  # Serve using conf.json
    lingogate -p 9000                          # Listen on a different port
    lingogate -c custom.json --log-level debug # Custom config with debug logging
    lingogate completions bash > lingogate.bash # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, a default one will be created automatically.

ENDPOINTS:
    POST /detect_language  - detect the language of a form-posted text
    POST /translate        - translate a form-posted text to English
    POST /process_batch    - process every row of an uploaded spreadsheet
    GET  /health           - liveness probe")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    serve: ServeArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "lingogate", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Serve(args)) => run_serve(args).await,
        None => run_serve(cli.serve).await,
    }
}

/// Load config, bootstrap model artifacts, assemble the service and serve
async fn run_serve(args: ServeArgs) -> Result<()> {
    let mut config = Config::load_or_create(&args.config_path)?;

    // CLI flags override the config file
    if let Some(bind) = args.bind {
        config.server.bind_addr = bind;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(level) = args.log_level {
        config.log_level = level.into();
    }

    log::set_max_level(config.log_level.clone().into());

    // One-time bootstrap: model artifacts must be on disk before we accept
    // any request
    artifacts::ensure_all(&config.detection.artifacts).await?;

    let detector = providers::detector_from_config(&config.detection);
    let translator = providers::translator_from_config(&config.translation)?;
    let validator = TextValidator::with_rule(config.validation.clone());

    info!(
        "Starting with detector '{}' and translator '{}'",
        config.detection.kind, config.translation.kind
    );

    let service = LanguageService::new(validator, detector, translator);
    let server = ApiServer::new(config.server.clone(), service);
    server.start().await
}
