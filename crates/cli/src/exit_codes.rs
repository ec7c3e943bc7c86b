//! CLI Exit Code Registry
//!
//! Single source of truth for `salesboard` exit codes. Scripts rely on them.
//!
//! | Code | Meaning                                              |
//! |------|------------------------------------------------------|
//! | 0    | Success                                              |
//! | 1    | General error (unspecified)                          |
//! | 2    | CLI usage error (bad args)                           |
//! | 3    | Invalid run config (parse, validation, options)      |
//! | 4    | Invalid dataset (null, sellers not a non-empty list) |
//! | 5    | Dataset references an unknown seller or product      |
//! | 6    | IO error (cannot read/write a file)                  |

use salesboard_stats::StatsError;

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, unsupported flag combination.
pub const EXIT_USAGE: u8 = 2;

/// Run config could not be parsed or is missing a required option.
pub const EXIT_INVALID_CONFIG: u8 = 3;

/// Dataset is absent, malformed, or has no sellers.
pub const EXIT_INVALID_DATASET: u8 = 4;

/// A purchase record points at an unknown seller id or SKU.
pub const EXIT_MISSING_REFERENCE: u8 = 5;

/// File could not be read or written.
pub const EXIT_IO: u8 = 6;

/// Map an engine error to its exit code.
pub fn stats_exit_code(err: &StatsError) -> u8 {
    match err {
        StatsError::ConfigParse(_)
        | StatsError::ConfigValidation(_)
        | StatsError::MissingConfiguration(_) => EXIT_INVALID_CONFIG,
        StatsError::InvalidInput(_) | StatsError::DatasetParse(_) => EXIT_INVALID_DATASET,
        StatsError::MissingReference { .. } => EXIT_MISSING_REFERENCE,
    }
}
