//! Interactive entries screen.
//!
//! Reads one command per line. `<row> <field>` taps a cell and opens the
//! picker in the matching mode; the picker then reads its own commands
//! until `ok` or `cancel`. End of input cancels an open picker and closes
//! the screen.

use crate::core::coordinator::EditCoordinator;
use crate::core::picker::{Picker, PickerMode, PickerResult, PickerValue};
use crate::core::store::{EntryStore, SaveOutcome};
use crate::errors::{AppError, AppResult};
use crate::models::field::EntryField;
use crate::ui::messages::{Level, format_line};
use crate::ui::terminal::TerminalSink;
use crate::utils::{date, time};
use std::io::{BufRead, Write};

const PICKER_HELP: &str = "Picker: <value> to change, ok to confirm, cancel to close";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScreenStats {
    pub saved: usize,
    pub failed: usize,
    pub cancelled: usize,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Tap(usize, EntryField),
    List,
    Help,
    Quit,
    Empty,
}

fn help_line(fields: &[EntryField]) -> String {
    let names: Vec<&str> = fields.iter().map(EntryField::as_str).collect();
    format!(
        "Commands: <row> <field> (field: {}) | list | help | quit",
        names.join(", ")
    )
}

fn parse_command(line: &str) -> AppResult<Command> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        [] => Ok(Command::Empty),
        ["list" | "l"] => Ok(Command::List),
        ["help" | "h" | "?"] => Ok(Command::Help),
        ["quit" | "q" | "exit"] => Ok(Command::Quit),
        [row, field] => {
            let row = row
                .parse::<usize>()
                .map_err(|_| AppError::Other(format!("'{}' is not a row number", row)))?;
            let field =
                EntryField::from_input(field).ok_or_else(|| AppError::InvalidField(field.to_string()))?;
            Ok(Command::Tap(row, field))
        }
        _ => Err(AppError::Other(format!("unknown command '{}'", line.trim()))),
    }
}

fn read_line<R: BufRead>(input: &mut R) -> AppResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn prompt<W: Write>(out: &mut W, text: &str) -> AppResult<()> {
    write!(out, "{text}")?;
    out.flush()?;
    Ok(())
}

fn report<W: Write>(out: &mut W, err: &AppError) -> AppResult<()> {
    writeln!(out, "{}", format_line(Level::Error, err))?;
    Ok(())
}

/// Run the screen until `quit` or end of input.
pub fn run<S, R, W>(
    coordinator: &mut EditCoordinator<S, TerminalSink<W>>,
    input: &mut R,
) -> AppResult<ScreenStats>
where
    S: EntryStore,
    R: BufRead,
    W: Write,
{
    let mut stats = ScreenStats::default();
    let help = help_line(&coordinator.presenter().field_bindings());
    writeln!(coordinator.presenter_mut().sink_mut().writer(), "{help}")?;

    loop {
        let out = coordinator.presenter_mut().sink_mut().writer();
        prompt(out, "> ")?;
        let Some(line) = read_line(input)? else {
            writeln!(out)?;
            break;
        };

        let command = match parse_command(&line) {
            Ok(c) => c,
            Err(e) => {
                report(out, &e)?;
                continue;
            }
        };

        match command {
            Command::Empty => {}
            Command::Quit => break,
            Command::Help => writeln!(out, "{help}")?,
            Command::List => coordinator.presenter_mut().reload_all()?,
            Command::Tap(row, field) => {
                // the row is resolved now, against the list as currently loaded
                let request = coordinator.tap(row, field);
                let out = coordinator.presenter_mut().sink_mut().writer();
                let request = match request {
                    Ok(r) => r,
                    Err(e) => {
                        report(out, &e)?;
                        continue;
                    }
                };

                let mut emitted: Option<PickerResult> = None;
                match Picker::open(request, |r| emitted = Some(r)) {
                    Ok(picker) => drive_picker(picker, input, out)?,
                    Err(e) => {
                        // never opened, so nothing was cancelled
                        report(out, &e)?;
                        continue;
                    }
                }

                match emitted {
                    Some(result) => match coordinator.apply(result)? {
                        SaveOutcome::Saved => stats.saved += 1,
                        SaveOutcome::Failed => stats.failed += 1,
                    },
                    None => stats.cancelled += 1,
                }
            }
        }
    }

    Ok(stats)
}

/// Feed picker commands until it is confirmed or cancelled.
fn drive_picker<F, R, W>(mut picker: Picker<F>, input: &mut R, out: &mut W) -> AppResult<()>
where
    F: FnOnce(PickerResult),
    R: BufRead,
    W: Write,
{
    show_picker(&picker, out)?;

    loop {
        prompt(out, "picker> ")?;
        let Some(line) = read_line(input)? else {
            writeln!(out)?;
            picker.cancel();
            writeln!(out, "Cancelled.")?;
            return Ok(());
        };

        match line.trim() {
            "" => {}
            "ok" | "select" => {
                picker.confirm();
                return Ok(());
            }
            "cancel" | "c" => {
                picker.cancel();
                writeln!(out, "Cancelled.")?;
                return Ok(());
            }
            "help" | "?" => writeln!(out, "{PICKER_HELP}")?,
            value => match change_value(&mut picker, value) {
                Ok(()) => show_value(&picker, out)?,
                Err(e) => report(out, &e)?,
            },
        }
    }
}

fn change_value<F: FnOnce(PickerResult)>(picker: &mut Picker<F>, value: &str) -> AppResult<()> {
    match picker.mode() {
        PickerMode::Office => match value {
            "next" | "n" => picker.scroll_office(1),
            "prev" | "p" => picker.scroll_office(-1),
            _ => {
                if let Ok(index) = value.parse::<usize>() {
                    return picker.select_office(index);
                }
                let index = picker
                    .office_candidates()
                    .iter()
                    .position(|c| c.eq_ignore_ascii_case(value))
                    .ok_or_else(|| AppError::Picker(format!("unknown office '{}'", value)))?;
                picker.select_office(index)
            }
        },
        PickerMode::Date => {
            let d = date::parse_date(value).ok_or_else(|| AppError::InvalidDate(value.into()))?;
            picker.set_date(d)
        }
        PickerMode::Time { .. } => {
            let t = time::parse_time(value).ok_or_else(|| AppError::InvalidTime(value.into()))?;
            picker.set_time(t)
        }
    }
}

fn show_picker<F: FnOnce(PickerResult), W: Write>(picker: &Picker<F>, out: &mut W) -> AppResult<()> {
    let title = match picker.mode() {
        PickerMode::Office => "Office",
        PickerMode::Date => "Date (YYYY-MM-DD)",
        PickerMode::Time { is_time_in: true } => "Clock-in (HH:MM)",
        PickerMode::Time { is_time_in: false } => "Clock-out (HH:MM)",
    };
    writeln!(out, "{} for row {}:", title, picker.row())?;

    if let Some(selected) = picker.selected_office() {
        for (i, name) in picker.office_candidates().iter().enumerate() {
            let marker = if i == selected { '>' } else { ' ' };
            writeln!(out, "{marker} {i}  {name}")?;
        }
    } else {
        show_value(picker, out)?;
    }
    writeln!(out, "{PICKER_HELP}")?;
    Ok(())
}

fn show_value<F: FnOnce(PickerResult), W: Write>(picker: &Picker<F>, out: &mut W) -> AppResult<()> {
    let shown = match picker.current_value() {
        PickerValue::Office(name) => match picker.selected_office() {
            Some(i) => format!("> {i}  {name}"),
            None => name,
        },
        PickerValue::Date(d) => date::format_medium(d),
        PickerValue::TimeIn(t) | PickerValue::TimeOut(t) => time::format_short(t),
    };
    writeln!(out, "  {shown}")?;
    Ok(())
}
