use super::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{EntryDraft, EntryFields};
use crate::ui::messages::success;
use crate::utils::format_hours;

/// Update an entry. Omitted flags keep the current value.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        category,
        subcategory,
        hours,
        memo,
    } = &cli.command
    {
        let mut session = open_session(cli, cfg)?;

        let current = session
            .store
            .get_by_id(id)
            .ok_or_else(|| AppError::NotFound(id.clone()))?;

        let draft = EntryDraft {
            category: category
                .clone()
                .unwrap_or_else(|| current.category().to_string()),
            subcategory: subcategory
                .clone()
                .unwrap_or_else(|| current.subcategory().to_string()),
            hours: hours
                .clone()
                .unwrap_or_else(|| current.hours().to_string()),
            memo: memo
                .as_deref()
                .map(str::trim)
                .unwrap_or(current.memo())
                .to_string(),
        };
        let fields = EntryFields::validate(draft, &session.taxonomy)?;

        let mutation = session
            .store
            .update(id, fields)
            .ok_or_else(|| AppError::NotFound(id.clone()))?;
        if !mutation.persisted {
            return Err(AppError::Storage(
                "the update could not be written to the store".into(),
            ));
        }

        let e = &mutation.entry;
        session
            .store
            .remember_selection(e.category(), e.subcategory());

        success(format!(
            "Updated {}: {} / {} {}",
            e.id(),
            e.category(),
            e.subcategory(),
            format_hours(e.hours())
        ));
    }

    Ok(())
}
