use crate::errors::{AppError, AppResult};
use crate::models::work_type::WorkType;
use crate::store::Storage;
use crate::store::log::ttlog_or_warn;
use crate::ui::messages::warning;

/// Work types written on first run, when no `worktypes.json` exists yet.
pub fn default_work_types() -> Vec<WorkType> {
    vec![
        WorkType::new("Grosure Project", 20.0),
        WorkType::new("Pet Projects", 20.0),
        WorkType::new("USCIS Work", 30.0),
        WorkType::new("Gaming", -8.0),
        WorkType::new("Home Cleaning", 13.0),
        WorkType::new("Family Biz", 30.0),
    ]
}

/// Parse a user-entered hourly rate. Negative rates are allowed.
pub fn parse_rate(input: &str) -> AppResult<f64> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(rate) if rate.is_finite() => Ok(rate),
        _ => Err(AppError::InvalidRate(trimmed.to_string())),
    }
}

/// High-level business logic for work type management.
pub struct WorkTypeLogic;

impl WorkTypeLogic {
    pub fn list(storage: &Storage) -> AppResult<Vec<WorkType>> {
        storage.work_types.load_all()
    }

    /// Append a new work type. Duplicate names are accepted with a warning.
    pub fn add(storage: &Storage, name: &str, rate: f64) -> AppResult<WorkType> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidName);
        }

        let mut work_types = storage.work_types.load_all()?;
        if work_types.iter().any(|wt| wt.name == name) {
            warning(format!(
                "A work type named '{}' already exists; punches will use the first one's rate.",
                name
            ));
        }

        let work_type = WorkType::new(name, rate);
        work_types.push(work_type.clone());
        storage.work_types.save_all(&work_types)?;

        ttlog_or_warn(
            storage,
            "addtype",
            name,
            &format!("Work type added with rate {}", rate),
        );

        Ok(work_type)
    }

    /// Seed the default work types when the store file does not exist.
    /// Returns true when seeding happened.
    pub fn seed_defaults(storage: &Storage) -> AppResult<bool> {
        if storage.work_types.exists() {
            return Ok(false);
        }

        let defaults = default_work_types();
        storage.work_types.save_all(&defaults)?;

        ttlog_or_warn(
            storage,
            "seed",
            "worktypes",
            &format!("Seeded {} default work types", defaults.len()),
        );

        Ok(true)
    }
}
