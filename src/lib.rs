//! cpunch library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use clap::error::ErrorKind;
use cli::parser::{Cli, Commands, normalize_args};
use config::Config;
use crate::core::worktypes::WorkTypeLogic;
use errors::AppResult;
use store::Storage;
use ui::messages::warning;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        None => cli::commands::listtypes::handle(cfg, true),
        Some(cmd @ Commands::Start { .. }) => cli::commands::start::handle(cmd, cfg),
        Some(Commands::Stop) => cli::commands::stop::handle(cfg),
        Some(cmd @ Commands::AddType { .. }) => cli::commands::addtype::handle(cmd, cfg),
        Some(Commands::ListTypes) => cli::commands::listtypes::handle(cfg, false),
        Some(Commands::Report) => cli::commands::report::handle(cfg),
        Some(Commands::Init) => cli::commands::init::handle(cfg),
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, cfg),
        Some(cmd @ Commands::Log { .. }) => cli::commands::log::handle(cmd, cfg),
        Some(cmd @ Commands::Export { .. }) => cli::commands::export::handle(cmd, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI (command word is case-insensitive); an unknown command is reported, not fatal
    let cli = match Cli::try_parse_from(normalize_args(std::env::args_os())) {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::InvalidSubcommand => {
            warning("Unknown command. Use 'cpunch --help' to see available commands.");
            return Ok(());
        }
        Err(e) => e.exit(),
    };

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ apply --data-dir override
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }

    // 4️⃣ first run: seed the default work types (init/config handle this themselves)
    if cfg.seed_defaults && !matches!(cli.command, Some(Commands::Init | Commands::Config { .. }))
    {
        WorkTypeLogic::seed_defaults(&Storage::new(&cfg.data_path()))?;
    }

    // 5️⃣ dispatch
    dispatch(&cli, &cfg)
}
