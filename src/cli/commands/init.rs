use crate::config::Config;
use crate::core::worktypes::WorkTypeLogic;
use crate::errors::AppResult;
use crate::store::Storage;
use crate::store::log::ttlog_or_warn;
use crate::ui::messages::success;
use std::fs;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (kept if it already exists)
///  - the data directory
///  - the default work types, when no work type file exists yet
pub fn handle(cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing cpunch…");

    if cfg.save(false)? {
        success(format!("Config file created: {}", Config::config_file().display()));
    } else {
        println!("📄 Config file : {}", Config::config_file().display());
    }

    let storage = Storage::new(&cfg.data_path());
    fs::create_dir_all(storage.dir())?;
    println!("🗄️  Data dir    : {}", storage.dir().display());

    if WorkTypeLogic::seed_defaults(&storage)? {
        success("Default work types created.");
    }
    println!("📄 Work types  : {}", storage.work_types.path().display());

    ttlog_or_warn(
        &storage,
        "init",
        &storage.dir().to_string_lossy(),
        "Data directory initialized",
    );

    println!("🎉 cpunch initialization completed!");
    Ok(())
}
