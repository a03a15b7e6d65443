use crate::{input::Error, ledger::LedgerError};

use tracing::warn;

// Here, we report the error and keep processing the other commands.
// A rejected command never changed the ledger, so there is nothing to roll
// back, and a malformed line can't be guessed at, so it is skipped.
//
// Errors go to the log rather than the output stream, so reports written by
// read commands stay clean.
//
// `record` is the 1-based position of the command in the input, header
// excluded.
pub fn input_error(record: usize, err: &Error) {
    match err {
        Error::Csv(msg) => warn!(record, error = %msg, "failed to read command"),
        Error::Format(msg) => warn!(record, error = %msg, "incomplete command"),
    }
}

pub fn ledger_error(record: usize, err: &LedgerError) {
    warn!(record, error = %err, "command rejected");
}
