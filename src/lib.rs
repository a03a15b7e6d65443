//! An in-memory account ledger.
//!
//! Accounts are opened, credited, debited, and closed through a [`Ledger`];
//! money moves between accounts with transfers, and interest is applied to
//! every account at once. Each account keeps a bounded log of what happened
//! to it. Batches of commands can be run against a ledger with [`run::run`].

pub mod config;
pub mod error_handler;
pub mod input;
pub mod ledger;
pub mod output;
pub mod run;

pub use config::LedgerConfig;
pub use ledger::{Account, AccountNumber, Amount, Kind, Ledger, LedgerError, Transaction};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Installs the global tracing subscriber, logging to stderr.
///
/// Defaults to `account_ledger=info`; `RUST_LOG` takes precedence.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("account_ledger=info"));

        // Another subscriber may already be installed, e.g. by a test harness.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
