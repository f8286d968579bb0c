use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::models::report::Report;
use crate::store::Storage;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_amount;
use crate::utils::table::{Column, Table};
use crate::utils::{format_amount, format_hours};

/// Handle the `report` command
pub fn handle(cfg: &Config) -> AppResult<()> {
    let storage = Storage::new(&cfg.data_path());

    let Some(report) = ReportLogic::build(&storage)? else {
        info("No punch records found.");
        return Ok(());
    };

    print_report(&report, &cfg.currency);
    Ok(())
}

fn print_report(report: &Report, currency: &str) {
    header("Report:");

    if report.is_empty() {
        info("No completed punches yet.");
    } else {
        let mut table = Table::new(vec![
            Column::left("Work type"),
            Column::right("Hours"),
            Column::right("Amount"),
        ]);

        for row in &report.rows {
            table.add_row(vec![
                row.work_type_name.clone(),
                format_hours(row.total_hours),
                format_amount(currency, row.total_amount),
            ]);
        }

        print!("{}", table.render());
        println!(
            "Total: {} hours, {}",
            format_hours(report.total_hours),
            colorize_amount(
                report.total_amount,
                &format_amount(currency, report.total_amount)
            )
        );
    }

    if let Some(name) = &report.ongoing {
        info(format!("Punch for '{}' is still ongoing (not included).", name));
    }
}
