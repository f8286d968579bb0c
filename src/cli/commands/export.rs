use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;
use crate::store::Storage;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        closed,
        force,
    } = cmd
    {
        let storage = Storage::new(&cfg.data_path());
        ExportLogic::export(&storage, *format, file, *closed, *force)?;
    }
    Ok(())
}
