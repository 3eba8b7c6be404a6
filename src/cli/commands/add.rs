use super::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{EntryDraft, EntryFields};
use crate::ui::messages::success;
use crate::utils::format_hours;

/// Add an entry to the selected week.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        category,
        subcategory,
        hours,
        memo,
    } = &cli.command
    {
        let mut session = open_session(cli, cfg)?;

        //
        // 1. Fill category/subcategory from the last add when omitted
        //
        let (last_category, last_subcategory) = session.store.last_selection();
        let category = category.clone().or(last_category).unwrap_or_default();
        let subcategory = subcategory
            .clone()
            .or(last_subcategory)
            .unwrap_or_default();

        //
        // 2. Validate
        //
        let draft = EntryDraft {
            category,
            subcategory,
            hours: hours.clone(),
            memo: memo.trim().to_string(),
        };
        let fields = EntryFields::validate(draft, &session.taxonomy)?;

        //
        // 3. Store
        //
        let mutation = session.store.add(fields);
        if !mutation.persisted {
            return Err(AppError::Storage(
                "the entry could not be written to the store".into(),
            ));
        }

        let e = &mutation.entry;
        session
            .store
            .remember_selection(e.category(), e.subcategory());

        success(format!(
            "Added {} / {} {} for week of {} (id {})",
            e.category(),
            e.subcategory(),
            format_hours(e.hours()),
            e.week_start_date(),
            e.id()
        ));
    }

    Ok(())
}
