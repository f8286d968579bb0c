use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::worktypes::{WorkTypeLogic, parse_rate};
use crate::errors::AppResult;
use crate::store::Storage;
use crate::ui::messages::{ask, success};
use crate::utils::format_rate;

/// Handle the `addtype` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::AddType { name, rate } = cmd {
        let name = match name {
            Some(n) => n.clone(),
            None => ask("Enter work type name: ")?,
        };

        let rate_input = match rate {
            Some(r) => r.clone(),
            None => ask("Enter hourly rate: ")?,
        };
        let rate = parse_rate(&rate_input)?;

        let storage = Storage::new(&cfg.data_path());
        let work_type = WorkTypeLogic::add(&storage, &name, rate)?;

        success(format!(
            "Work type '{}' ({}) added successfully.",
            work_type.name,
            format_rate(&cfg.currency, work_type.hourly_rate)
        ));
    }

    Ok(())
}
