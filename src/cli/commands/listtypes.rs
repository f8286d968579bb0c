use crate::config::Config;
use crate::core::worktypes::WorkTypeLogic;
use crate::errors::AppResult;
use crate::store::Storage;
use crate::ui::messages::{header, info};
use crate::utils::format_rate;

/// Handle `listtypes` (and the bare `cpunch` invocation when `with_hint`).
pub fn handle(cfg: &Config, with_hint: bool) -> AppResult<()> {
    let storage = Storage::new(&cfg.data_path());
    let work_types = WorkTypeLogic::list(&storage)?;

    if work_types.is_empty() {
        info("No work types available. Use 'cpunch addtype' to add one.");
        return Ok(());
    }

    header("Available Work Types:");
    for (i, wt) in work_types.iter().enumerate() {
        println!(
            "{} - {} - {}",
            i + 1,
            wt.name,
            format_rate(&cfg.currency, wt.hourly_rate)
        );
    }

    if with_hint {
        println!("Use 'cpunch start <number>' to punch in with a specific work type.");
    }

    Ok(())
}
