use super::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::import::{ImportError, ImportLogic};
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;
use std::fs;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = &cli.command {
        if !file.to_lowercase().ends_with(".csv") {
            return Err(ImportError::NotCsv(file.clone()).into());
        }

        let path = expand_tilde(file);
        let text = fs::read_to_string(&path)
            .map_err(|e| ImportError::Read(format!("{}: {e}", path.display())))?;

        let mut session = open_session(cli, cfg)?;
        info(format!(
            "Importing {} into week of {}",
            path.display(),
            session.store.current_week_start()
        ));

        let summary =
            ImportLogic::parse_and_import_csv(&mut session.store, &session.taxonomy, &text)?;
        success(summary);
    }

    Ok(())
}
