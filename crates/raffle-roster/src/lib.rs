//! raffle-roster: Attendance roster source
//!
//! Reads (attendance, name) rows from a named worksheet and turns them into
//! validated `Attendee`s. Rows that can't produce a ticket are dropped here so
//! the draw only ever sees clean input.

mod options;
mod sheet;

pub use options::*;
pub use sheet::*;
