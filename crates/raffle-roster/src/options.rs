//! Roster layout options

use serde::{Deserialize, Serialize};

/// Sheet the holiday party roster lives in
pub const DEFAULT_SHEET_NAME: &str = "raffleTicketsHolidayParty";

/// Where the roster sits inside the workbook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterOptions {
    /// Worksheet holding the roster
    pub sheet_name: String,
    /// Leading rows to skip (column titles)
    pub header_rows: u32,
    /// 0-based column with the attendance count
    pub attendance_column: u32,
    /// 0-based column with the attendee name
    pub name_column: u32,
}

impl Default for RosterOptions {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            header_rows: 1,
            attendance_column: 0,
            name_column: 1,
        }
    }
}

impl RosterOptions {
    /// Builder: set sheet name
    pub fn with_sheet(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = name.into();
        self
    }

    /// Builder: set header row count
    pub fn with_header_rows(mut self, rows: u32) -> Self {
        self.header_rows = rows;
        self
    }

    /// Builder: set attendance and name columns
    pub fn with_columns(mut self, attendance: u32, name: u32) -> Self {
        self.attendance_column = attendance;
        self.name_column = name;
        self
    }
}
