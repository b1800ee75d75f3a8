//! Worksheet reading and row filtering

use std::path::{Path, PathBuf};

use calamine::{Data, Range, Reader, open_workbook_auto};

use raffle_core::Attendee;

use crate::options::RosterOptions;

/// Row counts from one roster load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterStats {
    /// Data rows examined (headers excluded)
    pub rows: usize,
    pub accepted: usize,
    pub skipped_blank_name: usize,
    pub skipped_attendance: usize,
}

/// Attendees accepted from a sheet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    pub attendees: Vec<Attendee>,
    pub stats: RosterStats,
}

impl Roster {
    pub fn total_tickets(&self) -> u64 {
        self.attendees.iter().map(|a| a.attendance as u64).sum()
    }
}

/// Open a workbook (xlsx, xlsm, xls, ods) and read the roster sheet.
///
/// A missing sheet is fatal and reports the sheets that do exist.
pub fn load_roster(path: &Path, options: &RosterOptions) -> Result<Roster, RosterError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| RosterError::Open {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let available = workbook.sheet_names();
    if !available.iter().any(|name| name == &options.sheet_name) {
        return Err(RosterError::SheetNotFound {
            sheet: options.sheet_name.clone(),
            available,
        });
    }

    let range = workbook
        .worksheet_range(&options.sheet_name)
        .map_err(|e| RosterError::Read {
            sheet: options.sheet_name.clone(),
            reason: e.to_string(),
        })?;

    let roster = roster_from_range(&range, options);
    log::info!(
        "Loaded {} attendees ({} tickets) from sheet '{}' of {}",
        roster.attendees.len(),
        roster.total_tickets(),
        options.sheet_name,
        path.display()
    );
    Ok(roster)
}

/// Read a worksheet range. Column and header positions are absolute sheet
/// coordinates, so leading empty rows or columns don't shift them.
pub fn roster_from_range(range: &Range<Data>, options: &RosterOptions) -> Roster {
    let (start_row, start_col) = match range.start() {
        Some(start) => start,
        None => return Roster::default(),
    };

    let rows = range
        .rows()
        .enumerate()
        .filter(|(i, _)| start_row + *i as u32 >= options.header_rows)
        .map(|(_, row)| row);

    parse_rows(rows, start_col, options)
}

/// Filter data rows into attendees. `first_col` is the absolute column of
/// each row's first cell.
pub fn parse_rows<'a, I>(rows: I, first_col: u32, options: &RosterOptions) -> Roster
where
    I: IntoIterator<Item = &'a [Data]>,
{
    let cell = |row: &'a [Data], col: u32| -> Option<&'a Data> {
        col.checked_sub(first_col).and_then(|i| row.get(i as usize))
    };

    let mut roster = Roster::default();

    for (i, row) in rows.into_iter().enumerate() {
        roster.stats.rows += 1;

        let name = cell(row, options.name_column).map(cell_text).unwrap_or_default();
        if name.is_empty() {
            roster.stats.skipped_blank_name += 1;
            log::debug!("Skipping roster row {}: blank name", i + 1);
            continue;
        }

        let attendance = cell(row, options.attendance_column).and_then(cell_count);
        match attendance.map(|count| Attendee::new(name.as_str(), count)) {
            Some(Ok(attendee)) => {
                roster.stats.accepted += 1;
                roster.attendees.push(attendee);
            }
            _ => {
                roster.stats.skipped_attendance += 1;
                log::debug!("Skipping roster row {} ('{}'): no usable attendance", i + 1, name);
            }
        }
    }

    roster
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string().trim().to_string(),
    }
}

/// Attendance from a cell. Strings take their leading integer ("3 visits" is 3).
fn cell_count(cell: &Data) -> Option<i64> {
    match cell {
        Data::Int(i) => Some(*i),
        Data::Float(f) if f.is_finite() => Some(f.trunc() as i64),
        Data::String(s) => leading_integer(s),
        _ => None,
    }
}

fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Roster errors
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("Failed to open workbook {}: {reason}", .path.display())]
    Open { path: PathBuf, reason: String },

    #[error("Sheet \"{sheet}\" not found (available: {})", .available.join(", "))]
    SheetNotFound { sheet: String, available: Vec<String> },

    #[error("Failed to read sheet \"{sheet}\": {reason}")]
    Read { sheet: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Data {
        Data::String(v.to_string())
    }

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("3"), Some(3));
        assert_eq!(leading_integer(" 12 visits"), Some(12));
        assert_eq!(leading_integer("-2"), Some(-2));
        assert_eq!(leading_integer("abc"), None);
        assert_eq!(leading_integer(""), None);
    }

    #[test]
    fn test_cell_count() {
        assert_eq!(cell_count(&Data::Int(4)), Some(4));
        assert_eq!(cell_count(&Data::Float(2.0)), Some(2));
        assert_eq!(cell_count(&Data::Float(2.9)), Some(2));
        assert_eq!(cell_count(&Data::Float(f64::NAN)), None);
        assert_eq!(cell_count(&s("5")), Some(5));
        assert_eq!(cell_count(&Data::Bool(true)), None);
        assert_eq!(cell_count(&Data::Empty), None);
    }

    #[test]
    fn test_parse_rows_filters_bad_rows() {
        let rows = vec![
            vec![Data::Float(3.0), s("Ana")],
            vec![Data::Int(1), s("  Ben  ")],
            vec![Data::Int(2), Data::Empty],
            vec![Data::Int(0), s("Zero")],
            vec![s("n/a"), s("Text")],
            vec![Data::Int(-1), s("Negative")],
            vec![Data::Int(2)],
            vec![s("2"), s("Chen")],
        ];

        let roster = parse_rows(rows.iter().map(|r| r.as_slice()), 0, &RosterOptions::default());

        let names: Vec<&str> = roster.attendees.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Ben", "Chen"]);
        assert_eq!(roster.total_tickets(), 6);
        assert_eq!(
            roster.stats,
            RosterStats {
                rows: 8,
                accepted: 3,
                skipped_blank_name: 2,
                skipped_attendance: 3,
            }
        );
    }

    #[test]
    fn test_oversized_attendance_is_skipped() {
        let rows = vec![
            vec![Data::Float(4_000_000_000.0), s("Typo")],
            vec![s("99999999"), s("Paste")],
            vec![Data::Int(2), s("Gus")],
        ];
        let roster = parse_rows(rows.iter().map(|r| r.as_slice()), 0, &RosterOptions::default());

        assert_eq!(roster.attendees, vec![Attendee::new("Gus", 2).unwrap()]);
        assert_eq!(roster.stats.skipped_attendance, 2);
        assert_eq!(roster.total_tickets(), 2);
    }

    #[test]
    fn test_numeric_name_is_kept() {
        let rows = vec![vec![Data::Int(1), Data::Int(1042)]];
        let roster = parse_rows(rows.iter().map(|r| r.as_slice()), 0, &RosterOptions::default());
        assert_eq!(roster.attendees[0].name, "1042");
    }

    #[test]
    fn test_parse_rows_with_offset_columns() {
        // Range starting at column B: row[0] is column 1
        let options = RosterOptions::default().with_columns(2, 1);
        let rows = vec![vec![s("Dara"), Data::Int(4)]];
        let roster = parse_rows(rows.iter().map(|r| r.as_slice()), 1, &options);
        assert_eq!(roster.attendees, vec![Attendee::new("Dara", 4).unwrap()]);
    }

    #[test]
    fn test_range_skips_header() {
        let mut range = Range::new((0, 0), (2, 1));
        range.set_value((0, 0), s("Trivia Attendance"));
        range.set_value((0, 1), s("Name"));
        range.set_value((1, 0), Data::Int(2));
        range.set_value((1, 1), s("Eli"));
        range.set_value((2, 0), Data::Int(1));
        range.set_value((2, 1), s("Fay"));

        let roster = roster_from_range(&range, &RosterOptions::default());
        assert_eq!(roster.stats.rows, 2);
        assert_eq!(roster.attendees.len(), 2);
        assert_eq!(roster.total_tickets(), 3);
    }

    #[test]
    fn test_empty_range() {
        let range: Range<Data> = Range::empty();
        let roster = roster_from_range(&range, &RosterOptions::default());
        assert!(roster.attendees.is_empty());
        assert_eq!(roster.stats.rows, 0);
    }

    #[test]
    fn test_missing_workbook() {
        let err = load_roster(Path::new("/nonexistent/roster.xlsx"), &RosterOptions::default())
            .unwrap_err();
        assert!(matches!(err, RosterError::Open { .. }));
    }

    #[test]
    fn test_sheet_not_found_message() {
        let err = RosterError::SheetNotFound {
            sheet: "raffleTicketsHolidayParty".to_string(),
            available: vec!["Sheet1".to_string(), "Summary".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Sheet \"raffleTicketsHolidayParty\" not found (available: Sheet1, Summary)"
        );
    }
}
