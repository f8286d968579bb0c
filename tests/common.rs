#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, TimeZone};
use cpunch::models::punch_record::PunchRecord;
use cpunch::models::work_type::WorkType;
use cpunch::store::Storage;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated home/config/data directories for one test.
pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.path().join("data")
    }

    pub fn storage(&self) -> Storage {
        Storage::new(&self.data_dir())
    }

    /// `cpunch --data-dir <tmp>/data`, with HOME and XDG dirs inside the temp root
    /// so a real user config is never read.
    pub fn cp(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("cpunch");
        cmd.env("HOME", self.root.path())
            .env("XDG_CONFIG_HOME", self.root.path().join("config"))
            .env("XDG_DATA_HOME", self.root.path().join("share"))
            .env("APPDATA", self.root.path().join("appdata"))
            .args(["--data-dir", &self.data_dir().to_string_lossy()]);
        cmd
    }

    pub fn write_file(&self, name: &str, content: &str) {
        fs::create_dir_all(self.data_dir()).expect("create data dir");
        fs::write(self.data_dir().join(name), content).expect("write data file");
    }

    pub fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.data_dir().join(name)).expect("read data file")
    }

    pub fn out_path(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }
}

pub fn at(h: u32, m: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2025, 3, 10, h, m, 0)
        .single()
        .expect("unambiguous local time")
}

pub fn closed(name: &str, start: DateTime<Local>, end: DateTime<Local>) -> PunchRecord {
    PunchRecord {
        work_type_name: name.to_string(),
        punch_in_time: start,
        punch_out_time: Some(end),
    }
}

pub fn rates_ab() -> Vec<WorkType> {
    vec![WorkType::new("A", 20.0), WorkType::new("B", 10.0)]
}

/// Seed a storage with work types and punches directly through the library.
pub fn seed(storage: &Storage, work_types: &[WorkType], punches: &[PunchRecord]) {
    storage.work_types.save_all(work_types).expect("save work types");
    storage.punches.save_all(punches).expect("save punches");
}
