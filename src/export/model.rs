// src/export/model.rs

use crate::models::punch_record::PunchRecord;
use crate::models::work_type::{WorkType, find_rate};
use serde::Serialize;

/// Flat row for punch exports (one per punch record).
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PunchExport {
    pub work_type: String,
    pub punch_in: String,
    /// Empty while the punch is still open.
    pub punch_out: String,
    pub hours: f64,
    pub amount: f64,
}

impl PunchExport {
    pub fn from_record(record: &PunchRecord, work_types: &[WorkType]) -> Self {
        let hours = record.hours().unwrap_or(0.0);
        let rate = find_rate(work_types, &record.work_type_name).unwrap_or(0.0);

        Self {
            work_type: record.work_type_name.clone(),
            punch_in: record.punch_in_time.to_rfc3339(),
            punch_out: record
                .punch_out_time
                .map(|t| t.to_rfc3339())
                .unwrap_or_default(),
            hours: round2(hours),
            amount: round2(hours * rate),
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
