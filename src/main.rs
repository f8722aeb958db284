//! modal-alert - show an alert in the terminal and print the chosen action

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use modal_alert::{AlertAction, AlertController, App, Config, ControllerStyle, paths};
use std::path::PathBuf;
use std::process::ExitCode;

mod tui;

/// Show a modal alert in the terminal and print the chosen action
#[derive(Parser, Debug)]
#[command(name = "modal-alert")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Alert title
    #[arg(short, long)]
    title: Option<String>,

    /// Alert message
    #[arg(short, long)]
    message: Option<String>,

    /// Button as LABEL[:STYLE[:disabled]], STYLE being default, cancel or destructive.
    /// Repeat for more buttons; defaults to a single "OK".
    #[arg(short, long = "action", value_name = "ACTION")]
    actions: Vec<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    init_config: bool,
}

impl Cli {
    fn parsed_actions(&self) -> Result<Vec<AlertAction>> {
        if self.actions.is_empty() {
            return Ok(vec![AlertAction::new("OK", modal_alert::ActionStyle::Default)]);
        }
        self.actions
            .iter()
            .map(|arg| arg.parse::<AlertAction>().map_err(anyhow::Error::msg))
            .collect()
    }

    fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) if self.init_config && !path.exists() => Ok(Config::default()),
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }

    fn write_config(&self, config: &Config) -> Result<PathBuf> {
        match &self.config {
            Some(path) => {
                config.save_to(path)?;
                Ok(path.clone())
            }
            None => {
                config.save()?;
                Ok(Config::default_path())
            }
        }
    }
}

fn init_logging() {
    let log_path = paths::log_path();

    // Clear the log file on startup
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let dir = log_path
            .parent()
            .map_or_else(std::env::temp_dir, PathBuf::from);
        let file_appender = tracing_appender::rolling::never(dir, "modal-alert.log");
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }
}

fn main() -> Result<ExitCode> {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            eprintln!("error: {e}\n");
            Cli::command().print_help()?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let config = cli.load_config()?;
    if cli.init_config {
        let path = cli.write_config(&config)?;
        println!("{}", path.display());
        return Ok(ExitCode::SUCCESS);
    }
    let actions = cli.parsed_actions()?;

    let mut alert = AlertController::new(
        cli.title.as_deref(),
        cli.message.as_deref(),
        ControllerStyle::Alert,
    )
    .with_style(config.style.clone());
    for action in actions {
        alert
            .add_action(action)
            .context("Failed to add action")?;
    }

    let app = tui::run(App::new(alert, &config), config.tick_rate_ms)?;

    match app.chosen_title() {
        Some(title) => {
            println!("{title}");
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::FAILURE),
    }
}
