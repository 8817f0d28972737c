use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::coordinator::EditCoordinator;
use crate::core::presenter::ListPresenter;
use crate::core::store::{RecordStore, SqliteEntryStore};
use crate::errors::{AppError, AppResult};
use crate::models::filter::EntryFilter;
use crate::ui::terminal::TerminalSink;
use crate::utils::date;
use std::io;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { office, period } = cmd {
        let filter = build_filter(office.as_deref(), period.as_deref())?;

        let store = RecordStore::new(SqliteEntryStore::open(&cfg.database)?);
        let sink = TerminalSink::new(io::stdout(), cfg.separator());
        let mut screen =
            EditCoordinator::new(store, ListPresenter::new(sink, cfg.offices.clone()));

        screen.start_filtered(filter.as_ref())?;
    }
    Ok(())
}

pub fn build_filter(office: Option<&str>, period: Option<&str>) -> AppResult<Option<EntryFilter>> {
    let mut filter = EntryFilter {
        office: office.map(str::to_string),
        ..Default::default()
    };

    if let Some(p) = period
        && p != "all"
    {
        let (from, to) = date::resolve_period(p).map_err(AppError::InvalidDate)?;
        filter.from = Some(from);
        filter.to = Some(to);
    }

    Ok((!filter.is_empty()).then_some(filter))
}
