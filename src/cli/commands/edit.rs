use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::coordinator::EditCoordinator;
use crate::core::presenter::ListPresenter;
use crate::core::store::{RecordStore, SqliteEntryStore};
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use crate::ui::screen;
use crate::ui::terminal::TerminalSink;
use std::io::{self, IsTerminal};

/// Handle the `edit` command: run the interactive entries screen on stdin/stdout.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit = cmd {
        let store = RecordStore::new(SqliteEntryStore::open(&cfg.database)?);
        let stdout = io::stdout();
        let styled = stdout.is_terminal();
        let sink = TerminalSink::new(stdout, cfg.separator()).styled(styled);

        let mut coordinator =
            EditCoordinator::new(store, ListPresenter::new(sink, cfg.offices.clone()));
        coordinator.start()?;

        let stdin = io::stdin();
        let stats = screen::run(&mut coordinator, &mut stdin.lock())?;

        info(format!(
            "{} edit(s) saved, {} cancelled.",
            stats.saved, stats.cancelled
        ));
        if stats.failed > 0 {
            warning(format!(
                "{} edit(s) could not be saved and will be lost on exit.",
                stats.failed
            ));
        }
    }
    Ok(())
}
