use super::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        scope,
        format,
        dir,
        force,
    } = &cli.command
    {
        let session = open_session(cli, cfg)?;
        let dir = expand_tilde(dir);
        ExportLogic::export(&session.store, *scope, *format, &dir, *force)?;
    }
    Ok(())
}
