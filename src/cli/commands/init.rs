use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the taxonomy document, seeded with the default categories
///  - an empty store
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing workhours…");
    println!("📄 Config file : {}", Config::config_file().display());

    cfg.init_all(cli.test)?;

    println!("🎉 workhours initialization completed!");
    Ok(())
}
