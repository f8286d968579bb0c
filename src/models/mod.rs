pub mod log_entry;
pub mod punch_record;
pub mod report;
pub mod work_type;
