#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;
use workhours::config::Taxonomy;
use workhours::core::{FixedClock, RecordStore};
use workhours::models::{EntryDraft, EntryFields};
use serde_json::Value;
use workhours::errors::{AppError, AppResult};
use workhours::storage::{Backend, Storage};

pub fn wh() -> Command {
    cargo_bin_cmd!("workhours")
}

/// Fresh, empty directory inside the system temp dir
pub fn setup_test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("workhours_test_{name}"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Store and taxonomy paths for a CLI test, initialized via `init --test`
pub fn init_cli_env(name: &str) -> (PathBuf, String, String) {
    let dir = setup_test_dir(name);
    let store = dir.join("store.json").to_string_lossy().to_string();
    let taxonomy = dir.join("config.json").to_string_lossy().to_string();

    wh().args(["--store", &store, "--taxonomy", &taxonomy, "--test", "init"])
        .assert()
        .success();

    (dir, store, taxonomy)
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// Wednesday 2025-09-17; its week starts on Monday 2025-09-15
pub fn wednesday() -> NaiveDate {
    date("2025-09-17")
}

pub fn memory_store() -> RecordStore {
    RecordStore::init(Storage::in_memory(), FixedClock::new(wednesday(), 1_000))
}

/// Backend whose every write fails, like a full or read-only disk
pub struct ReadOnlyBackend;

impl Backend for ReadOnlyBackend {
    fn get(&self, _key: &str) -> AppResult<Option<Value>> {
        Ok(None)
    }
    fn set(&mut self, _key: &str, _value: Value) -> AppResult<()> {
        Err(AppError::Storage("quota exceeded".into()))
    }
    fn remove(&mut self, _key: &str) -> AppResult<()> {
        Err(AppError::Storage("quota exceeded".into()))
    }
    fn clear(&mut self) -> AppResult<()> {
        Err(AppError::Storage("quota exceeded".into()))
    }
}

pub fn read_only_store() -> RecordStore {
    RecordStore::init(Storage::new(ReadOnlyBackend), FixedClock::new(wednesday(), 1_000))
}

pub fn fields(category: &str, subcategory: &str, hours: &str, memo: &str) -> EntryFields {
    let draft = EntryDraft {
        category: category.into(),
        subcategory: subcategory.into(),
        hours: hours.into(),
        memo: memo.into(),
    };
    EntryFields::validate(draft, &Taxonomy::default()).expect("valid test fields")
}

pub const APP: &str = "Linuxアプリ";
pub const KERNEL: &str = "Linuxカーネル";
pub const AUDIO: &str = "オーディオ処理";
pub const IPC: &str = "プロセス間通信";
pub const DEVICE: &str = "デバイス制御";

pub const IMPORT_HEADER: &str = "日付,技術分野,小分類,作業時間(h),メモ";
