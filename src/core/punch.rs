//! Punch lifecycle: open a punch against a work type, close it, price it.
//!
//! At most one punch may be open at a time. The check happens here, before a
//! new record is appended; storage does not enforce it.

use crate::errors::{AppError, AppResult};
use crate::models::punch_record::PunchRecord;
use crate::models::work_type::{WorkType, find_rate};
use crate::store::Storage;
use crate::store::log::ttlog_or_warn;
use crate::ui::messages::warning;
use chrono::{DateTime, Local};

/// Result of closing a punch.
#[derive(Debug, Clone, PartialEq)]
pub struct PunchOutcome {
    pub record: PunchRecord,
    pub hours: f64,
    /// `None` when the work type no longer exists; priced at 0 in that case.
    pub hourly_rate: Option<f64>,
    pub amount: f64,
}

/// Append an open punch for `work_types[index]` (zero-based).
pub fn start(
    records: &mut Vec<PunchRecord>,
    work_types: &[WorkType],
    index: usize,
    now: DateTime<Local>,
) -> AppResult<PunchRecord> {
    if work_types.is_empty() {
        return Err(AppError::NoWorkTypes);
    }

    let work_type = work_types
        .get(index)
        .ok_or(AppError::InvalidIndex(index as i64 + 1))?;

    if let Some(open) = records.iter().find(|p| p.is_open()) {
        return Err(AppError::OngoingPunchExists(open.work_type_name.clone()));
    }

    let record = PunchRecord::open(work_type.name.clone(), now);
    records.push(record.clone());
    Ok(record)
}

/// Set the punch-out time of the open punch.
pub fn close_open(records: &mut [PunchRecord], now: DateTime<Local>) -> AppResult<PunchRecord> {
    let open = records
        .iter_mut()
        .find(|p| p.is_open())
        .ok_or(AppError::NoOngoingPunch)?;

    open.punch_out_time = Some(now);
    Ok(open.clone())
}

/// Hours and amount of a closed punch. A missing work type prices at 0.
pub fn price(record: PunchRecord, work_types: &[WorkType]) -> PunchOutcome {
    let hours = record.hours().unwrap_or(0.0);
    let hourly_rate = find_rate(work_types, &record.work_type_name);
    let amount = hours * hourly_rate.unwrap_or(0.0);

    PunchOutcome {
        record,
        hours,
        hourly_rate,
        amount,
    }
}

/// Close the open punch at `now` and compute hours and amount.
pub fn stop(
    records: &mut [PunchRecord],
    work_types: &[WorkType],
    now: DateTime<Local>,
) -> AppResult<PunchOutcome> {
    let record = close_open(records, now)?;
    Ok(price(record, work_types))
}

/// Load-modify-save wrappers around [`start`] and [`stop`].
pub struct PunchLogic;

impl PunchLogic {
    /// Punch in with the 1-based work type number shown by `listtypes`.
    pub fn punch_in(
        storage: &Storage,
        number: i64,
        now: DateTime<Local>,
    ) -> AppResult<PunchRecord> {
        let work_types = storage.work_types.load_all()?;
        if work_types.is_empty() {
            return Err(AppError::NoWorkTypes);
        }

        let index = number
            .checked_sub(1)
            .and_then(|i| usize::try_from(i).ok())
            .ok_or(AppError::InvalidIndex(number))?;

        let mut punches = storage.punches.load_all()?;
        let record = start(&mut punches, &work_types, index, now)?;
        storage.punches.save_all(&punches)?;

        ttlog_or_warn(
            storage,
            "start",
            &record.work_type_name,
            &format!("Punched in at {}", record.punch_in_time.to_rfc3339()),
        );

        Ok(record)
    }

    /// Punch out of the open record. The punch list is persisted before the
    /// amount is computed.
    pub fn punch_out(storage: &Storage, now: DateTime<Local>) -> AppResult<PunchOutcome> {
        let mut punches = storage.punches.load_all()?;
        let closed = close_open(&mut punches, now)?;
        storage.punches.save_all(&punches)?;

        let work_types = storage.work_types.load_all()?;
        let outcome = price(closed, &work_types);

        if outcome.hourly_rate.is_none() {
            warning(format!(
                "Work type '{}' not found; amount computed with rate 0.",
                outcome.record.work_type_name
            ));
        }

        ttlog_or_warn(
            storage,
            "stop",
            &outcome.record.work_type_name,
            &format!("Punched out after {:.2} hours", outcome.hours),
        );

        Ok(outcome)
    }
}
