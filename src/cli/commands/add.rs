use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::SqliteEntryStore;
use crate::errors::{AppError, AppResult};
use crate::models::work_entry::WorkEntry;
use crate::ui::messages::{success, warning};
use crate::utils::{date, time};

/// Handle the `add` command: create one (possibly incomplete) work entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        office,
        date: date_str,
        time_in,
        time_out,
    } = cmd
    {
        let d = date_str
            .as_deref()
            .map(|s| date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.into())))
            .transpose()?;
        let t_in = time_in
            .as_deref()
            .map(|s| time::parse_time(s).ok_or_else(|| AppError::InvalidTime(s.into())))
            .transpose()?;
        let t_out = time_out
            .as_deref()
            .map(|s| time::parse_time(s).ok_or_else(|| AppError::InvalidTime(s.into())))
            .transpose()?;

        if let Some(name) = office
            && !cfg.offices.iter().any(|o| o == name)
        {
            warning(format!(
                "Office '{}' is not in the configured list; the picker will not offer it",
                name
            ));
        }

        let entry = WorkEntry::new(office.clone(), d, t_in, t_out);
        let mut store = SqliteEntryStore::open(&cfg.database)?;
        let id = store.insert(&entry)?;

        if entry.is_complete() {
            success(format!("Work entry #{} added.", id));
        } else {
            success(format!("Work entry #{} added (incomplete: shown blank until filled).", id));
        }
    }

    Ok(())
}
