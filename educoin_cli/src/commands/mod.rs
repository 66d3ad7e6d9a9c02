//! CLI subcommand implementations.

pub mod centers;
pub mod pay;
pub mod payments;
