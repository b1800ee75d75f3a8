//! Roster loading from real xlsx workbooks

use std::path::{Path, PathBuf};

use raffle_core::Attendee;
use raffle_roster::{DEFAULT_SHEET_NAME, RosterError, RosterOptions, RosterStats, load_roster};
use rust_xlsxwriter::Workbook;

/// Write a single-sheet workbook: a header row, then (attendance, name) rows.
/// Attendance is written as a number unless it fails to parse as one.
fn write_workbook(dir: &Path, sheet: &str, rows: &[(&str, &str)]) -> PathBuf {
    let path = dir.join("roster.xlsx");
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet).unwrap();
    worksheet.write_string(0, 0, "Attendance").unwrap();
    worksheet.write_string(0, 1, "Name").unwrap();

    for (i, (attendance, name)) in rows.iter().enumerate() {
        let row = i as u32 + 1;
        match attendance.parse::<f64>() {
            Ok(n) => worksheet.write_number(row, 0, n).unwrap(),
            Err(_) => worksheet.write_string(row, 0, *attendance).unwrap(),
        };
        if !name.is_empty() {
            worksheet.write_string(row, 1, *name).unwrap();
        }
    }

    workbook.save(&path).unwrap();
    path
}

fn other_sheet(dir: &Path) -> PathBuf {
    write_workbook(
        dir,
        "Other",
        &[
            ("3", "Ana"),
            ("2", " Ben "),
            ("1", ""),
            ("0", "Zero"),
            ("n/a", "Text"),
            ("4000000000", "Typo"),
        ],
    )
}

#[test]
fn missing_sheet_lists_available_sheets() {
    let dir = tempfile::tempdir().unwrap();
    let path = other_sheet(dir.path());

    let err = load_roster(&path, &RosterOptions::default()).unwrap_err();
    match &err {
        RosterError::SheetNotFound { sheet, available } => {
            assert_eq!(sheet, DEFAULT_SHEET_NAME);
            assert_eq!(available, &vec!["Other".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(
        err.to_string(),
        "Sheet \"raffleTicketsHolidayParty\" not found (available: Other)"
    );
}

#[test]
fn named_sheet_is_loaded_and_filtered() {
    let dir = tempfile::tempdir().unwrap();
    let path = other_sheet(dir.path());

    let roster = load_roster(&path, &RosterOptions::default().with_sheet("Other")).unwrap();

    assert_eq!(
        roster.attendees,
        vec![
            Attendee::new("Ana", 3).unwrap(),
            Attendee::new("Ben", 2).unwrap()
        ]
    );
    assert_eq!(roster.total_tickets(), 5);
    assert_eq!(
        roster.stats,
        RosterStats {
            rows: 6,
            accepted: 2,
            skipped_blank_name: 1,
            skipped_attendance: 3,
        }
    );
}

#[test]
fn default_sheet_name_is_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_workbook(dir.path(), DEFAULT_SHEET_NAME, &[("2", "Chen"), ("1", "Dara")]);

    let roster = load_roster(&path, &RosterOptions::default()).unwrap();
    assert_eq!(roster.attendees.len(), 2);
    assert_eq!(roster.total_tickets(), 3);
}
