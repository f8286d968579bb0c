use serde::{Deserialize, Serialize};

/// A kind of work that can be punched against, billed at an hourly rate.
///
/// Serialized as `{ "Name": ..., "HourlyRate": ... }` in `worktypes.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WorkType {
    pub name: String,
    pub hourly_rate: f64,
}

impl WorkType {
    pub fn new(name: impl Into<String>, hourly_rate: f64) -> Self {
        Self {
            name: name.into(),
            hourly_rate,
        }
    }
}

/// Rate of the first work type named `name`, if any.
pub fn find_rate(work_types: &[WorkType], name: &str) -> Option<f64> {
    work_types
        .iter()
        .find(|wt| wt.name == name)
        .map(|wt| wt.hourly_rate)
}
