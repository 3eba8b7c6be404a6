pub mod add;
pub mod clear;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod stats;
pub mod taxonomy;

use crate::cli::parser::Cli;
use crate::config::{Config, Taxonomy};
use crate::core::{RecordStore, SystemClock};
use crate::errors::{AppError, AppResult};
use crate::storage::Storage;
use crate::utils::date;

/// Everything a data command works with: the taxonomy and the store,
/// positioned on the requested week.
pub(crate) struct Session {
    pub store: RecordStore,
    pub taxonomy: Taxonomy,
}

pub(crate) fn open_session(cli: &Cli, cfg: &Config) -> AppResult<Session> {
    let taxonomy = Taxonomy::load(&cfg.taxonomy_path());
    let mut store = RecordStore::init(Storage::open(&cfg.store_path()), SystemClock);

    if let Some(w) = &cli.week {
        let d = date::parse_date(w).ok_or_else(|| AppError::InvalidDate(w.to_string()))?;
        store.set_week(d);
    }

    Ok(Session { store, taxonomy })
}
