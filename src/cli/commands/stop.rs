use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::errors::AppResult;
use crate::store::Storage;
use crate::ui::messages::success;
use crate::utils::colors::colorize_amount;
use crate::utils::time::display_timestamp;
use crate::utils::{format_amount, format_hours};
use chrono::Local;

/// Handle the `stop` command
pub fn handle(cfg: &Config) -> AppResult<()> {
    let storage = Storage::new(&cfg.data_path());
    let outcome = PunchLogic::punch_out(&storage, Local::now())?;

    if let Some(out) = &outcome.record.punch_out_time {
        success(format!(
            "Punched out of {} at {}",
            outcome.record.work_type_name,
            display_timestamp(out)
        ));
    }

    println!("Total time: {} hours", format_hours(outcome.hours));
    println!(
        "Amount: {}",
        colorize_amount(
            outcome.amount,
            &format_amount(&cfg.currency, outcome.amount)
        )
    );

    Ok(())
}
