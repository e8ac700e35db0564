//! termfolio CLI
//!
//! Browse a personal portfolio from the terminal.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use termfolio::config::Config;
use termfolio::links::{self, Link, LinkError};
use termfolio::logging;
use termfolio::portfolio;
use termfolio::prompt::{Host, PromptSession};
use termfolio::report::{DEFAULT_COLUMNS, Section, format_section};
use termfolio::tui::{self, TabController};
use termfolio::types::{OutputFormat, Portfolio};

#[derive(Parser)]
#[command(name = "termfolio")]
#[command(about = "Browse a personal portfolio from the terminal")]
#[command(version)]
struct Cli {
    /// Portfolio JSON file (default: bundled portfolio)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Config file (default: ~/.config/termfolio/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to the configured log directory
    #[arg(long, global = true)]
    log_file: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu and command prompt (default)
    Menu,

    /// Full-screen tabbed viewer
    View,

    /// Print one section and exit
    Show {
        #[arg(value_enum)]
        section: Section,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Open a contact link with the system opener
    Open {
        #[arg(value_enum)]
        link: Link,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref()).context("loading config")?;
    if cli.log_file {
        config.logging.file_enabled = true;
    }
    let _log_guard = logging::init(&config.logging);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "termfolio starting");

    let tabs = config.tab_controller().context("loading config")?;
    let data_path = cli.data.or(config.data_path);
    let portfolio = portfolio::load(data_path.as_deref()).context("loading portfolio")?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => cmd_menu(&portfolio, tabs),
        Commands::View => cmd_view(&portfolio, tabs),
        Commands::Show { section, format } => cmd_show(&portfolio, section, format.into()),
        Commands::Open { link } => cmd_open(&portfolio, link),
    }
}

// ============================================================================
// PROGRESS HELPERS
// ============================================================================

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Open a link behind a spinner.
fn open_with_spinner(link: Link, target: &str) -> Result<(), LinkError> {
    let sp = spinner(&format!("Opening {}...", link.label()));
    match links::open(target) {
        Ok(()) => {
            sp.finish_with_message(format!("✔ Opened {}", link.label()));
            Ok(())
        }
        Err(e) => {
            sp.finish_and_clear();
            Err(e)
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

/// Prompt-mode effects backed by the real terminal and system opener.
struct TerminalHost {
    tabs: TabController,
}

impl Host for TerminalHost {
    fn view_resume(&mut self, portfolio: &Portfolio) -> io::Result<()> {
        tui::run(portfolio, self.tabs.clone())
    }

    fn open_link(&mut self, link: Link, target: &str) -> Result<(), LinkError> {
        open_with_spinner(link, target)
    }
}

/// Current terminal width, or the default when stdout is not a terminal.
fn terminal_columns() -> u16 {
    crossterm::terminal::size()
        .map(|(columns, _)| columns)
        .unwrap_or(DEFAULT_COLUMNS)
}

fn cmd_menu(portfolio: &Portfolio, tabs: TabController) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    // The stdin lock stays held while the viewer runs; crossterm reads
    // key events from the tty directly, not through `Stdin`.
    let mut session =
        PromptSession::new(portfolio, stdin.lock(), stdout.lock(), TerminalHost { tabs })
            .with_columns(terminal_columns());
    session.run().context("prompt session")?;
    Ok(())
}

fn cmd_view(portfolio: &Portfolio, tabs: TabController) -> Result<()> {
    tui::run(portfolio, tabs).context("running viewer")?;
    Ok(())
}

fn cmd_show(portfolio: &Portfolio, section: Section, format: OutputFormat) -> Result<()> {
    println!(
        "{}",
        format_section(portfolio, section, format, terminal_columns())
    );
    Ok(())
}

fn cmd_open(portfolio: &Portfolio, link: Link) -> Result<()> {
    let target = link.target(&portfolio.contact)?;
    open_with_spinner(link, &target).with_context(|| format!("opening {}", link))?;
    Ok(())
}
