use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use csgo_explorer::config::app_config::AppConfig;
use csgo_explorer::data_processing::data_processor::process_payloads_in_parallel;
use csgo_explorer::explorer::explorer_service::Explorer;
use csgo_explorer::explorer::reshaping::StatsPage;
use csgo_explorer::logging::init_logging;
use csgo_explorer::report_creation::report_creator::create_json_report;
use csgo_explorer::session::session_store::{FileSessionStore, SessionStore};
use csgo_explorer::steam_api::gateway_client::GatewayClient;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "csgo-explorer")]
#[command(about = "Reshape CS:GO player stats into table and chart data", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Reshape a directory of saved stats payloads into a JSON report
    Reshape {
        /// Directory holding `*.json` stats payloads
        #[arg(short, long)]
        input: PathBuf,

        /// Number of worker threads (defaults to the configured value)
        #[arg(short, long)]
        threads: Option<usize>,

        /// Report file to write
        #[arg(short, long)]
        output: PathBuf,

        #[arg(long, value_enum, default_value = "weapons")]
        view: TableView,
    },
    /// Fetch a player's data from the API gateway and print it as JSON
    Fetch {
        /// Steam ID to look up (defaults to the one stored in the session)
        #[arg(short, long)]
        steam_id: Option<String>,

        #[arg(long, value_enum, default_value = "weapons")]
        view: FetchView,

        /// Override the API gateway base URL
        #[arg(long)]
        api_url: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TableView {
    Weapons,
    Maps,
}

impl From<TableView> for StatsPage {
    fn from(view: TableView) -> Self {
        match view {
            TableView::Weapons => StatsPage::Weapons,
            TableView::Maps => StatsPage::Maps,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FetchView {
    Weapons,
    Maps,
    General,
    Friends,
    Profile,
}

impl FetchView {
    fn menu_item(self) -> &'static str {
        match self {
            FetchView::Weapons => "Weapons Stats",
            FetchView::Maps => "Maps Stats",
            FetchView::General => "General Stats",
            FetchView::Friends => "Friends",
            FetchView::Profile => "Profile",
        }
    }
}

/// Resolves the configuration from defaults, the optional file and the environment.
fn load_config(path: Option<&PathBuf>) -> Result<AppConfig> {
    let mut config = match path {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    config.merge_env_vars();
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn reshape(
    config: &AppConfig,
    input: PathBuf,
    threads: Option<usize>,
    output: PathBuf,
    view: TableView,
) -> Result<()> {
    let threads = threads.unwrap_or(config.threads);
    if threads == 0 {
        return Err(anyhow!("Number of threads must be greater than zero."));
    }

    let summaries = process_payloads_in_parallel(&input, threads, view.into());
    create_json_report(&output, &summaries)
        .with_context(|| format!("Failed to create report {}", output.display()))?;
    println!("Report created successfully.");
    Ok(())
}

async fn fetch(
    config: &AppConfig,
    steam_id: Option<String>,
    view: FetchView,
    api_url: Option<String>,
) -> Result<()> {
    let store = FileSessionStore::new(&config.session_path);
    let session = store.load()?;

    let steam_id = steam_id
        .or_else(|| session.steam_id.clone())
        .ok_or_else(|| anyhow!("No Steam ID given and none stored in the session."))?;

    store.save(
        &session
            .with_steam_id(steam_id.clone())
            .with_menu_item(view.menu_item()),
    )?;

    let base_url = api_url.unwrap_or_else(|| config.api_base_url.clone());
    info!("Using API gateway at {}", base_url);
    let explorer = Explorer::new(GatewayClient::new(base_url));

    match view {
        FetchView::Weapons => print_json(&explorer.weapon_stats(&steam_id).await?),
        FetchView::Maps => print_json(&explorer.map_stats(&steam_id).await?),
        FetchView::General => print_json(&explorer.general_stats(&steam_id).await?),
        FetchView::Friends => print_json(&explorer.friends(&steam_id).await?),
        FetchView::Profile => print_json(&explorer.profile(&steam_id).await?),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    init_logging(cli.verbose, &config.log_level);

    match cli.command {
        Command::Reshape {
            input,
            threads,
            output,
            view,
        } => reshape(&config, input, threads, output, view),
        Command::Fetch {
            steam_id,
            view,
            api_url,
        } => fetch(&config, steam_id, view, api_url).await,
    }
}
