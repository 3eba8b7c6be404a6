use super::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info, success};

/// Delete every entry, after asking twice.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = &cli.command {
        let mut session = open_session(cli, cfg)?;

        if !*yes {
            let count = session.store.len();
            if !confirm(&format!(
                "Delete ALL {count} entries? This action is irreversible."
            )) || !confirm("Are you really sure?")
            {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        if !session.store.delete_all() {
            return Err(AppError::Storage("could not clear the store".into()));
        }

        success("All entries have been deleted.");
    }

    Ok(())
}
