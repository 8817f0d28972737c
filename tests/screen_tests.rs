use chrono::{NaiveDate, NaiveTime};
use rworklog::core::coordinator::EditCoordinator;
use rworklog::core::presenter::{ListPresenter, RowSink, RowView};
use rworklog::core::store::{MemoryEntryStore, RecordStore};
use rworklog::models::work_entry::WorkEntry;
use rworklog::ui::screen::{ScreenStats, run};
use rworklog::ui::terminal::TerminalSink;
use std::io::Cursor;

type Screen = EditCoordinator<MemoryEntryStore, TerminalSink<Vec<u8>>>;

fn offices() -> Vec<String> {
    ["Bronx", "212A", "308B", "PalmerRd"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn screen_with(offices: Vec<String>) -> Screen {
    let entries = vec![
        WorkEntry::new(
            Some("212A".into()),
            NaiveDate::from_ymd_opt(2025, 9, 1),
            NaiveTime::from_hms_opt(9, 0, 0),
            NaiveTime::from_hms_opt(17, 0, 0),
        ),
        WorkEntry::new(Some("308B".into()), None, None, None),
    ];
    let mut c = EditCoordinator::new(
        RecordStore::new(MemoryEntryStore::new(entries)),
        ListPresenter::new(TerminalSink::new(Vec::new(), '-'), offices),
    );
    c.start().unwrap();
    c
}

fn screen() -> Screen {
    screen_with(offices())
}

fn session(c: &mut Screen, input: &str) -> ScreenStats {
    run(c, &mut Cursor::new(input.to_string())).unwrap()
}

fn output(c: &mut Screen) -> String {
    String::from_utf8_lossy(c.presenter_mut().sink_mut().writer()).into_owned()
}

fn row() -> RowView {
    RowView {
        office: "Bronx".into(),
        date: "Sep 1, 2025".into(),
        time_in: "9:00 AM".into(),
        time_out: "5:00 PM".into(),
    }
}

#[test]
fn test_office_edit_by_index_is_saved() {
    let mut c = screen();
    let stats = session(&mut c, "0 office\n3\nok\nquit\n");

    assert_eq!(stats.saved, 1);
    assert_eq!(c.store().save_count(), 1);
    assert_eq!(
        c.store().backend().entries()[0].office.as_deref(),
        Some("PalmerRd")
    );
    assert!(output(&mut c).contains("PalmerRd"));
}

#[test]
fn test_time_edit_on_incomplete_row_keeps_it_blank() {
    let mut c = screen();
    let stats = session(&mut c, "1 in\n07:45\nok\n");

    assert_eq!(stats.saved, 1);
    let entry = &c.presenter().entries()[1];
    assert_eq!(entry.time_in, NaiveTime::from_hms_opt(7, 45, 0));
    assert!(c.presenter().render_row(1).unwrap().is_blank());
}

#[test]
fn test_cancel_and_end_of_input_never_save() {
    let mut c = screen();
    let stats = session(&mut c, "0 date\n2025-12-24\ncancel\n0 out\n18:00\n");

    assert_eq!(stats.cancelled, 2);
    assert_eq!(stats.saved, 0);
    assert_eq!(c.store().save_count(), 0);
}

#[test]
fn test_bad_input_is_reported_and_the_screen_continues() {
    let mut c = screen();
    let stats = session(
        &mut c,
        "9 office\nx office\n0 lunch\n0 date\nnot-a-date\n2025-10-01\nok\nquit\n",
    );

    assert_eq!(stats.saved, 1);
    let text = output(&mut c);
    assert!(text.contains("Invalid row index: 9"));
    assert!(text.contains("'x' is not a row number"));
    assert!(text.contains("Invalid field: lunch"));
    assert!(text.contains("Invalid date format: not-a-date"));
    assert_eq!(
        c.presenter().entries()[0].date,
        NaiveDate::from_ymd_opt(2025, 10, 1)
    );
}

#[test]
fn test_help_lists_every_tappable_field() {
    let mut c = screen();
    session(&mut c, "help\nq\n");
    assert!(output(&mut c).contains("(field: office, date, in, out)"));
}

#[test]
fn test_failed_save_is_counted_and_keeps_the_edit_on_screen() {
    let mut c = screen();
    c.store_mut().backend_mut().fail_writes = true;

    let stats = session(&mut c, "0 office\nBronx\nok\nquit\n");

    assert_eq!(
        stats,
        ScreenStats {
            saved: 0,
            failed: 1,
            cancelled: 0
        }
    );
    assert_eq!(c.store().save_count(), 1);
    assert_eq!(c.presenter().entries()[0].office.as_deref(), Some("Bronx"));
    assert_eq!(
        c.store().backend().entries()[0].office.as_deref(),
        Some("212A")
    );
}

#[test]
fn test_picker_that_cannot_open_is_not_a_cancel() {
    let mut c = screen_with(Vec::new());
    let stats = session(&mut c, "0 office\nquit\n");

    assert_eq!(stats, ScreenStats::default());
    assert!(output(&mut c).contains("Picker error"));
}

#[test]
fn test_full_table_has_header_rule_and_rows() {
    let mut sink = TerminalSink::new(Vec::new(), '-');
    sink.reload_all(&[row(), RowView::default()]).unwrap();
    let text = String::from_utf8(sink.into_inner()).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("#   Office"));
    assert!(lines[1].chars().all(|c| c == '-'));
    assert!(lines[2].contains("Bronx") && lines[2].contains("5:00 PM"));
    assert_eq!(lines[3].trim(), "1");
}

#[test]
fn test_single_row_refresh_prints_one_line() {
    let mut sink = TerminalSink::new(Vec::new(), '-');
    sink.reload_all(&[row()]).unwrap();
    let before = sink.writer().len();

    sink.reload_row(0, &row()).unwrap();
    let text = String::from_utf8(sink.into_inner()).unwrap();
    let refreshed = &text[before..];
    assert_eq!(refreshed.lines().count(), 1);
    assert!(refreshed.starts_with(" 0"));
}

#[test]
fn test_wider_office_on_refresh_restates_the_header() {
    let mut sink = TerminalSink::new(Vec::new(), '-');
    sink.reload_all(&[row()]).unwrap();
    let before = sink.writer().len();

    let mut wide = row();
    wide.office = "Headquarters North".into();
    sink.reload_row(0, &wide).unwrap();

    let text = String::from_utf8(sink.into_inner()).unwrap();
    let lines: Vec<&str> = text[before..].lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("#   Office"));
    assert_eq!(lines[0].find("Date"), lines[2].find("Sep 1, 2025"));
    assert_eq!(lines[0].find("Out"), lines[2].find("5:00 PM"));
}
