use crate::errors::AppResult;
use crate::models::punch_record::PunchRecord;
use crate::models::report::{Report, ReportRow};
use crate::models::work_type::{WorkType, find_rate};
use crate::store::Storage;
use std::collections::HashMap;

/// Group closed punches by work type name and total hours and amounts.
///
/// Rows keep the order in which each work type first appears. Open punches
/// are ignored. A work type missing from `work_types` is priced at 0.
pub fn aggregate(records: &[PunchRecord], work_types: &[WorkType]) -> Vec<ReportRow> {
    let mut rows: Vec<ReportRow> = Vec::new();
    let mut by_name: HashMap<&str, usize> = HashMap::new();

    for (record, hours) in records
        .iter()
        .filter_map(|r| r.hours().map(|h| (r, h)))
    {
        let idx = *by_name
            .entry(record.work_type_name.as_str())
            .or_insert_with(|| {
                rows.push(ReportRow {
                    work_type_name: record.work_type_name.clone(),
                    total_hours: 0.0,
                    total_amount: 0.0,
                });
                rows.len() - 1
            });
        rows[idx].total_hours += hours;
    }

    for row in &mut rows {
        let rate = find_rate(work_types, &row.work_type_name).unwrap_or(0.0);
        row.total_amount = row.total_hours * rate;
    }

    rows
}

pub struct ReportLogic;

impl ReportLogic {
    /// Build the full report from the stores. `None` when there are no
    /// punch records at all.
    pub fn build(storage: &Storage) -> AppResult<Option<Report>> {
        let punches = storage.punches.load_all()?;
        if punches.is_empty() {
            return Ok(None);
        }

        let work_types = storage.work_types.load_all()?;
        let mut report = Report::from_rows(aggregate(&punches, &work_types));
        report.ongoing = punches
            .iter()
            .find(|p| p.is_open())
            .map(|p| p.work_type_name.clone());

        Ok(Some(report))
    }
}
