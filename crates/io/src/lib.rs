//! `keshikomi-io` — bank export file reading.
//!
//! Banks export the same statement as an Excel workbook, a UTF-8 CSV, or a
//! Shift_JIS CSV depending on where the operator clicked. [`read`] tries each
//! interpretation in a fixed order and returns uniform rows, or a clear
//! unreadable signal when none of them parse.

pub mod file;
pub mod read;
mod xlsx;

pub use file::{BankFile, FileFormat};
pub use read::{read, ReadError};
