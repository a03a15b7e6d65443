pub mod account;
pub mod balance;
mod deposit;
mod withdrawal;
