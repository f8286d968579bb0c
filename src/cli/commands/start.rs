use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::errors::{AppError, AppResult};
use crate::store::Storage;
use crate::ui::messages::success;
use crate::utils::time::display_timestamp;
use chrono::Local;

/// Handle the `start` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start { number, .. } = cmd {
        let raw = number.as_deref().unwrap_or("");
        let n: i64 = raw
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidNumber(raw.to_string()))?;

        let storage = Storage::new(&cfg.data_path());
        let record = PunchLogic::punch_in(&storage, n, Local::now())?;

        success(format!(
            "Punched in for {} at {}",
            record.work_type_name,
            display_timestamp(&record.punch_in_time)
        ));
    }

    Ok(())
}
