mod commands;
mod error;
mod tables;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "lorebook", version, about = "Game-lore catalog manager")]
struct Cli {
    /// Path to the catalog database file
    #[arg(long, global = true, default_value = "lorebook.db")]
    database: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, ValueEnum)]
pub(crate) enum EntityKind {
    Champions,
    Regions,
    Abilities,
}

#[derive(Subcommand)]
pub(crate) enum KeyTarget {
    /// A champion, by numeric id
    Champion { id: i64 },
    /// A region, by numeric id
    Region { id: i64 },
    /// An ability, by name
    Ability { name: String },
}

#[derive(Subcommand)]
pub(crate) enum UpdateTarget {
    /// Update a champion's editable fields
    Champion {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        nickname: Option<String>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        difficulty: Option<String>,
    },
    /// Update a region's editable fields
    Region {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        stories: Option<i64>,
    },
    /// Update an ability's editable fields
    Ability {
        name: String,
        #[arg(long)]
        rename: Option<String>,
        #[arg(long)]
        passive: Option<bool>,
        #[arg(long)]
        hotkey: Option<char>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        link: Option<String>,
    },
}

#[derive(Subcommand)]
pub(crate) enum PurgeFilter {
    /// Remove every champion whose cinematic-appearance text matches
    /// exactly, along with their abilities and region links
    Cinematic { value: String },
    /// Remove every ability bound to the given hotkey
    Hotkey { key: char },
}

#[derive(Subcommand)]
pub(crate) enum SchemaAction {
    /// Create the catalog tables if they do not exist
    Create,
    /// Drop all catalog tables
    Drop,
    /// Drop and recreate the catalog tables
    Reset,
}

#[derive(Subcommand)]
enum ImportSource {
    /// Load champions from a CSV file
    Champions { path: PathBuf },
    /// Load regions (and their champion links) from a CSV file
    Regions { path: PathBuf },
    /// Load abilities from a CSV file
    Abilities { path: PathBuf },
    /// Load all three files in dependency order
    All {
        #[arg(long)]
        champions: PathBuf,
        #[arg(long)]
        regions: PathBuf,
        #[arg(long)]
        abilities: PathBuf,
    },
}

#[derive(Subcommand)]
enum Commands {
    /// List every record of one kind
    List { kind: EntityKind },
    /// Search records of one kind by a text fragment
    Search { kind: EntityKind, text: String },
    /// List champions with the given role
    Role { role: String },
    /// List regions with strictly more than the given number of stories
    Stories { min: i64 },
    /// List the abilities of one champion
    Abilities { champion_id: i64 },
    /// Show one record by key
    Get {
        #[command(subcommand)]
        target: KeyTarget,
    },
    /// Change some fields of one record; omitted flags keep current values
    Update {
        #[command(subcommand)]
        target: UpdateTarget,
    },
    /// Remove one record by key
    Delete {
        #[command(subcommand)]
        target: KeyTarget,
    },
    /// Remove every record matching a filter
    Purge {
        #[command(subcommand)]
        filter: PurgeFilter,
    },
    /// Manage the catalog tables
    Schema {
        #[command(subcommand)]
        action: SchemaAction,
    },
    /// Load records from CSV files
    Import {
        #[command(subcommand)]
        source: ImportSource,
    },
    /// Show record counts
    Stats,
}

fn run(cli: Cli) -> Result<(), CliError> {
    let conn = lorebook_db::open_database(&cli.database)?;

    match cli.command {
        Commands::List { kind } => commands::run_list(&conn, kind),
        Commands::Search { kind, text } => commands::run_search(&conn, kind, &text),
        Commands::Role { role } => commands::run_role(&conn, &role),
        Commands::Stories { min } => commands::run_stories(&conn, min),
        Commands::Abilities { champion_id } => commands::run_abilities(&conn, champion_id),
        Commands::Get { target } => commands::run_get(&conn, target),
        Commands::Update { target } => commands::run_update(&conn, target),
        Commands::Delete { target } => commands::run_delete(&conn, target),
        Commands::Purge { filter } => commands::run_purge(&conn, filter),
        Commands::Schema { action } => commands::run_schema(&conn, action),
        Commands::Import { source } => match source {
            ImportSource::Champions { path } => commands::run_import_champions(&conn, &path),
            ImportSource::Regions { path } => commands::run_import_regions(&conn, &path),
            ImportSource::Abilities { path } => commands::run_import_abilities(&conn, &path),
            ImportSource::All {
                champions,
                regions,
                abilities,
            } => commands::run_import_all(&conn, &champions, &regions, &abilities),
        },
        Commands::Stats => commands::run_stats(&conn),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
