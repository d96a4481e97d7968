use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    CompanyCommands, CustomerCommands, EmployeeCommands, ItemCommands, SyncCommands,
    TimeCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Load OAuth app info and seed demo data on first run.
    Init(InitArgs),
    /// Bootstrap state and unsynced counts.
    Status,
    /// Companies and their QBO connection.
    Company {
        #[command(subcommand)]
        action: CompanyCommands,
    },
    /// Employees.
    Employee {
        #[command(subcommand)]
        action: EmployeeCommands,
    },
    /// Customers.
    Customer {
        #[command(subcommand)]
        action: CustomerCommands,
    },
    /// Service items.
    Item {
        #[command(subcommand)]
        action: ItemCommands,
    },
    /// Time activities.
    Time {
        #[command(subcommand)]
        action: TimeCommands,
    },
    /// Push entities to QuickBooks Online.
    Sync {
        #[command(subcommand)]
        action: SyncCommands,
    },
    /// Dump JSON schema for a registered type.
    Schema(SchemaArgs),
}

/// Arguments for `ttrack init`.
#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// OAuth bootstrap file (defaults to `general.oauth_file`).
    #[arg(long)]
    pub oauth_file: Option<String>,
}

/// Arguments for `ttrack schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type name, e.g. `employee` or `sync-report`.
    pub type_name: String,
}
