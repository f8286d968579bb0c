use serde::Serialize;

/// Aggregated totals for one work type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub work_type_name: String,
    pub total_hours: f64,
    pub total_amount: f64,
}

/// Report rows (first-appearance order) plus grand totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub rows: Vec<ReportRow>,
    pub total_hours: f64,
    pub total_amount: f64,
    /// Work type of the punch still open, if any. Not counted in the totals.
    pub ongoing: Option<String>,
}

impl Report {
    pub fn from_rows(rows: Vec<ReportRow>) -> Self {
        let total_hours = rows.iter().map(|r| r.total_hours).sum();
        let total_amount = rows.iter().map(|r| r.total_amount).sum();
        Self {
            rows,
            total_hours,
            total_amount,
            ongoing: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
