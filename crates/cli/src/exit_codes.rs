//! CLI exit code registry.
//!
//! Single source of truth — scripts wrapping `kshk` rely on these.
//!
//! | Code | Meaning                                             |
//! |------|-----------------------------------------------------|
//! | 0    | Success                                             |
//! | 1    | General error (IO, output write)                    |
//! | 2    | Usage error (bad arguments, bad config file)        |
//! | 3    | Input file unreadable under every interpretation    |
//! | 4    | Required columns not found (bank export or ledger)  |
//! | 5    | Reconciliation left unmatched transactions          |

pub const EXIT_SUCCESS: u8 = 0;

/// General error. Prefer a specific code where one exists.
pub const EXIT_ERROR: u8 = 1;

/// Bad arguments or an unparseable config file.
pub const EXIT_USAGE: u8 = 2;

/// None of the supported encodings/formats parsed the input file.
pub const EXIT_UNREADABLE: u8 = 3;

/// A required header keyword was not found.
pub const EXIT_MISSING_COLUMNS: u8 = 4;

/// The run completed but unmatched transactions remain.
pub const EXIT_UNMATCHED: u8 = 5;
