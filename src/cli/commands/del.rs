use super::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info, success};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = &cli.command {
        let mut session = open_session(cli, cfg)?;

        let Some(entry) = session.store.get_by_id(id) else {
            return Err(AppError::NotFound(id.clone()));
        };

        //
        // Confirmation prompt
        //
        let prompt = format!(
            "Delete {} / {} ({}h, week of {})? This action is irreversible.",
            entry.category(),
            entry.subcategory(),
            entry.hours(),
            entry.week_start_date()
        );
        if !*yes && !confirm(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        match session.store.delete(id) {
            None => return Err(AppError::NotFound(id.clone())),
            Some(false) => {
                return Err(AppError::Storage(format!(
                    "entry {id} could not be removed from the store"
                )));
            }
            Some(true) => {}
        }

        success(format!("Entry {id} has been deleted."));
    }

    Ok(())
}
