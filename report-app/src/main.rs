use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;

use report_app::app::{self, BuildRequest, PrefsChange};
use report_app::logging;
use report_app::preferences::{Module, PreferencesStore, Shell, Theme};
use report_core::export::{ExportConfig, PageSize};
use report_core::models::{RentalEstimateForm, TurnoverForm};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Builds MoveZen rental estimates and move-out turnover reports.
///
/// Form files are TOML; any field left out keeps its default. Exported
/// reports land in the download directory unless `--out-dir` is given.
#[derive(Debug, Parser)]
#[command(name = "report-builder", version)]
struct Cli {
    /// Preferences file (theme, sidebar, active module).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `info,report_core=trace`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Export format.
    #[arg(long, global = true, default_value = "pdf")]
    format: String,

    /// Page size for exported documents.
    #[arg(long, global = true, default_value = "a4", value_parser = parse_page_size)]
    page_size: PageSize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Args)]
struct BuilderArgs {
    /// Form file to load over the defaults.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Directory the report is written to.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Print every wizard step instead of exporting.
    #[arg(long, conflicts_with = "step")]
    preview: bool,

    /// Print one wizard step (1-based) instead of exporting.
    #[arg(long)]
    step: Option<usize>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build a rental estimate (CMA) report.
    Rental(BuilderArgs),

    /// Build a move-out turnover report.
    Turnover(BuilderArgs),

    /// Look up county property record sites for a city.
    County {
        /// City name, exactly as listed.
        #[arg(required_unless_present = "suggest")]
        city: Option<String>,

        /// List cities containing this text instead.
        #[arg(long)]
        suggest: Option<String>,
    },

    /// Show or change dashboard preferences.
    Prefs {
        #[command(subcommand)]
        action: Option<PrefsAction>,
    },
}

#[derive(Debug, Subcommand)]
enum PrefsAction {
    Show,
    Theme {
        #[arg(value_parser = parse_theme)]
        theme: Theme,
    },
    ToggleTheme,
    Sidebar {
        #[arg(action = clap::ArgAction::Set)]
        collapsed: bool,
    },
    Module {
        #[arg(value_parser = parse_module)]
        module: Module,
    },
}

fn parse_page_size(s: &str) -> Result<PageSize, String> {
    PageSize::parse(s).ok_or_else(|| format!("unknown page size '{s}'; use a4 or letter"))
}

fn parse_theme(s: &str) -> Result<Theme, String> {
    Theme::parse(s).map_err(|e| e.to_string())
}

fn parse_module(s: &str) -> Result<Module, String> {
    Module::parse(s).map_err(|e| e.to_string())
}

impl BuilderArgs {
    fn request(
        self,
        export: ExportConfig,
    ) -> BuildRequest {
        BuildRequest {
            input: self.input,
            out_dir: self.out_dir,
            preview: self.preview,
            step: self.step,
            export,
        }
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();

    if let Some(level) = &cli.log_level {
        logging::set_log_level(level)?;
    }
    if let Some(path) = &cli.log_file {
        app::ensure_parent(path)?;
        logging::enable_file_logging(path)?;
    }

    let store = PreferencesStore::new(cli.config.unwrap_or_else(PreferencesStore::default_path));
    debug!(path = %store.path().display(), "loading preferences");
    let mut shell = Shell::load(store).context("loading preferences")?;

    let export = ExportConfig {
        format: cli.format,
        page_size: cli.page_size,
    };

    let output = match cli.command {
        Command::Rental(args) => {
            app::remember_module(&mut shell, Module::RentalEstimate)?;
            let registry = app::build_registry();
            app::run_builder(RentalEstimateForm::default(), &args.request(export), &registry)
                .await?
        }
        Command::Turnover(args) => {
            app::remember_module(&mut shell, Module::TurnoverBuilder)?;
            let registry = app::build_registry();
            app::run_builder(TurnoverForm::default(), &args.request(export), &registry).await?
        }
        Command::County { city, suggest } => {
            app::remember_module(&mut shell, Module::CountySearch)?;
            match (suggest, city) {
                (Some(text), _) => app::county_suggestions(&text),
                (None, Some(city)) => app::county_lookup(&city),
                (None, None) => anyhow::bail!("a city or --suggest is required"),
            }
        }
        Command::Prefs { action } => {
            let change = match action.unwrap_or(PrefsAction::Show) {
                PrefsAction::Show => PrefsChange::Show,
                PrefsAction::Theme { theme } => PrefsChange::Theme(theme),
                PrefsAction::ToggleTheme => PrefsChange::ToggleTheme,
                PrefsAction::Sidebar { collapsed } => PrefsChange::Sidebar(collapsed),
                PrefsAction::Module { module } => PrefsChange::Module(module),
            };
            app::apply_prefs(&mut shell, change)?
        }
    };

    println!("{}", output.trim_end());
    Ok(())
}
