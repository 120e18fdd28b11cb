//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! # Exit Codes
//!
//! | Code | Meaning                                            |
//! |------|----------------------------------------------------|
//! | 0    | Success                                            |
//! | 1    | General error (reserved, nothing emits it today)   |
//! | 2    | Usage error (emitted by clap on bad arguments)     |
//! | 3    | I/O error (output directory or fixture unwritable) |
//!
//! # Adding New Exit Codes
//!
//! 1. Add the constant here
//! 2. Document what triggers it in the table above
//! 3. Wire it into the relevant error handling

/// Success - all fixtures written.
pub const EXIT_SUCCESS: u8 = 0;

/// I/O error - directory creation or fixture save failed.
pub const EXIT_IO_ERROR: u8 = 3;
