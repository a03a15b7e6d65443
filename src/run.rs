use crate::{
    config::LedgerConfig,
    error_handler,
    input::{parse, Command},
    ledger::{Ledger, LedgerError},
    output,
};

use std::io::{Read, Write};
use thiserror::Error;
use tracing::info;

/// Failures that stop a run. Refused or malformed commands are not among
/// them: those are reported and skipped.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to export accounts: {0}")]
    Export(#[from] csv::Error),
}

/// What happened to the commands of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub applied: usize,
    pub rejected: usize,
    pub malformed: usize,
}

/// Run a batch of commands against a fresh ledger with default capacities.
pub fn run(input_stream: impl Read, output_stream: impl Write) -> Result<Summary, RunError> {
    run_with_config(input_stream, output_stream, LedgerConfig::default())
}

pub fn run_with_config(
    input_stream: impl Read,
    mut output_stream: impl Write,
    config: LedgerConfig,
) -> Result<Summary, RunError> {
    let mut ledger = Ledger::with_config(config);
    let summary = execute(&mut ledger, input_stream, &mut output_stream)?;
    output_stream.flush()?;

    Ok(summary)
}

/// Run a batch of commands against an existing ledger, in order.
///
/// Read commands write their report to `output_stream`. Mutating commands
/// write nothing when they succeed.
pub fn execute<W: Write>(
    ledger: &mut Ledger,
    input_stream: impl Read,
    output_stream: &mut W,
) -> Result<Summary, RunError> {
    let mut summary = Summary::default();

    for (index, command) in parse(input_stream).enumerate() {
        let record = index + 1;
        let command = match command {
            Ok(command) => command,
            Err(err) => {
                error_handler::input_error(record, &err);
                summary.malformed += 1;
                continue;
            }
        };

        match apply(ledger, command, output_stream)? {
            Ok(()) => summary.applied += 1,
            Err(err) => {
                error_handler::ledger_error(record, &err);
                summary.rejected += 1;
            }
        }
    }

    info!(
        applied = summary.applied,
        rejected = summary.rejected,
        malformed = summary.malformed,
        accounts = ledger.len(),
        "batch processed"
    );
    Ok(summary)
}

// The outer Result stops the run (output failures), the inner one is the
// ledger's verdict on this command.
fn apply<W: Write>(
    ledger: &mut Ledger,
    command: Command,
    output_stream: &mut W,
) -> Result<Result<(), LedgerError>, RunError> {
    let outcome = match command {
        Command::Create {
            account,
            owner,
            initial_balance,
        } => ledger
            .create_account(account, owner, initial_balance)
            .map(|_| ()),
        Command::Deposit { account, amount } => ledger.deposit(account, amount).map(|_| ()),
        Command::Withdraw { account, amount } => ledger.withdraw(account, amount).map(|_| ()),
        Command::Transfer { from, to, amount } => ledger.transfer(from, to, amount).map(|_| ()),
        Command::Interest { rate } => ledger.calculate_interest(rate),
        Command::Delete { account } => ledger.delete_account(account).map(|_| ()),
        Command::Show { account } => match ledger.find_account(account) {
            Some(acc) => Ok(output::write_account_details(&mut *output_stream, acc)?),
            None => Err(LedgerError::AccountNotFound(account)),
        },
        Command::History { account } => match ledger.find_account(account) {
            Some(acc) => Ok(output::write_transactions(&mut *output_stream, acc)?),
            None => Err(LedgerError::AccountNotFound(account)),
        },
        Command::List => Ok(output::write_all_accounts(
            &mut *output_stream,
            ledger.accounts(),
        )?),
        Command::Search { owner } => Ok(output::write_owner_search(
            &mut *output_stream,
            &owner,
            ledger.search_by_owner(&owner),
        )?),
        Command::Export => Ok(output::export(&mut *output_stream, ledger.accounts())?),
    };

    Ok(outcome)
}
