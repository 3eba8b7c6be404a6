use super::{Session, open_session};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::week::format_date;
use crate::errors::AppResult;
use crate::models::Entry;
use crate::ui::messages::{header, info};
use crate::utils::colors::badge;
use crate::utils::date::parse_range;
use crate::utils::format_hours;
use crate::utils::formatting::one_line;
use crate::utils::table::{Column, Table};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List { all, month, range } = &cli.command {
        let session = open_session(cli, cfg)?;
        let store = &session.store;

        if *all {
            print_entries("All entries", &store.get_all());
        } else if *month {
            print_entries("This month", &store.get_this_month());
        } else if let Some(r) = range {
            let (from, to) = parse_range(r)?;
            let (from, to) = (format_date(from), format_date(to));
            let title = format!("Weeks starting {from} .. {to}");
            print_entries(&title, &store.get_by_date_range(&from, &to));
        } else {
            print_week(&session);
        }
    }

    Ok(())
}

/// The weekly summary: entries in the order they were added, the total,
/// and a per-category breakdown.
fn print_week(session: &Session) {
    let week = format_date(session.store.current_week_start());
    let entries = session.store.get_this_week();

    header(format!("Week of {week}"));

    if entries.is_empty() {
        info("No entries for this week.");
        return;
    }

    print!("{}", build_table(&entries, false).render());

    let total: f64 = entries.iter().map(|e| e.hours()).sum();
    println!("\nTotal: {}", format_hours(total));

    for category in session.taxonomy.categories() {
        let hours: f64 = entries
            .iter()
            .filter(|e| e.category() == category)
            .map(|e| e.hours())
            .sum();
        if hours > 0.0 {
            println!(
                "  {} {}",
                badge(category, session.taxonomy.color(category)),
                format_hours(hours)
            );
        }
    }
}

fn print_entries(title: &str, entries: &[&Entry]) {
    header(title);

    if entries.is_empty() {
        info("No entries found.");
        return;
    }

    print!("{}", build_table(entries, true).render());

    let total: f64 = entries.iter().map(|e| e.hours()).sum();
    println!("\n{} entries, total {}", entries.len(), format_hours(total));
}

fn build_table(entries: &[&Entry], with_week: bool) -> Table {
    let mut columns = Vec::new();
    if with_week {
        columns.push(Column::new("Week", 10));
    }
    columns.extend([
        Column::new("Category", 20),
        Column::new("Subcategory", 20),
        Column::new("Hours", 6),
        Column::new("Memo", 30),
        Column::new("Id", 36),
    ]);

    let mut table = Table::new(columns);
    for e in entries {
        let mut row = Vec::new();
        if with_week {
            row.push(e.bucket_date().to_string());
        }
        row.extend([
            e.category().to_string(),
            e.subcategory().to_string(),
            e.hours().to_string(),
            one_line(e.memo()),
            e.id().to_string(),
        ]);
        table.add_row(row);
    }
    table
}
