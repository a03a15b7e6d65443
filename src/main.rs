use account_ledger::{
    config::{MAX_ACCOUNTS, MAX_OWNER_LEN, MAX_TRANSACTIONS},
    run::run_with_config,
    LedgerConfig,
};

use clap::Parser;
use std::{fs::File, io, path::PathBuf};
use tracing::info;

/// Run a CSV batch of ledger commands against a fresh in-memory ledger.
///
/// The file has the header `command,account,owner,to,amount`. Reports from
/// `show`, `history`, `list`, `search` and `export` go to stdout; rejected
/// commands are logged to stderr.
#[derive(Parser, Debug)]
#[command(name = "account_ledger", version, about)]
struct Args {
    /// CSV file of commands
    input: PathBuf,

    /// Maximum number of open accounts
    #[arg(long, default_value_t = MAX_ACCOUNTS)]
    max_accounts: usize,

    /// Maximum length of an owner name
    #[arg(long, default_value_t = MAX_OWNER_LEN)]
    max_owner_len: usize,

    /// Maximum number of transactions kept per account
    #[arg(long, default_value_t = MAX_TRANSACTIONS)]
    max_transactions: usize,
}

impl Args {
    fn config(&self) -> LedgerConfig {
        LedgerConfig::new(self.max_accounts, self.max_owner_len, self.max_transactions)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    account_ledger::init_tracing();

    let args = Args::parse();
    let input = File::open(&args.input)?;
    info!(input = %args.input.display(), "running batch");

    let stdout = io::stdout();
    let output = io::BufWriter::new(stdout.lock());
    run_with_config(input, output, args.config())?;

    Ok(())
}
