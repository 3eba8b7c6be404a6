use super::open_session;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::week::format_date;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::format_hours;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let session = open_session(cli, cfg)?;
    let stats = session.store.statistics();

    header("Statistics");
    println!(
        "Week of {} : {}",
        format_date(session.store.current_week_start()),
        format_hours(stats.week_total)
    );
    println!("This month       : {}", format_hours(stats.month_total));
    println!("Entries          : {}", stats.total_count);

    Ok(())
}
