use crate::utils::time::{hours_between, iso_local, iso_local_opt};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One punch in `punches.json`. Refers to its work type by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PunchRecord {
    pub work_type_name: String,
    #[serde(with = "iso_local")]
    pub punch_in_time: DateTime<Local>,
    #[serde(default, with = "iso_local_opt")]
    pub punch_out_time: Option<DateTime<Local>>,
}

impl PunchRecord {
    /// New open punch (no punch-out time yet).
    pub fn open(work_type_name: impl Into<String>, punch_in_time: DateTime<Local>) -> Self {
        Self {
            work_type_name: work_type_name.into(),
            punch_in_time,
            punch_out_time: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.punch_out_time.is_none()
    }

    /// Elapsed hours for a closed punch, `None` while open.
    pub fn hours(&self) -> Option<f64> {
        self.punch_out_time
            .map(|out| hours_between(self.punch_in_time, out))
    }
}
