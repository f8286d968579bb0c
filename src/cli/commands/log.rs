use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::store::Storage;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let storage = Storage::new(&cfg.data_path());
        LogLogic::print_log(&storage)?;
    }

    Ok(())
}
