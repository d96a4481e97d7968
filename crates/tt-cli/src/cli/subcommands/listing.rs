use clap::{Args, Subcommand};

/// Employee commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EmployeeCommands {
    /// List employees.
    List(ListArgs),
}

/// Customer commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CustomerCommands {
    /// List customers.
    List(ListArgs),
}

/// Service item commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ItemCommands {
    /// List service items.
    List(ListArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Restrict to one company.
    #[arg(long)]
    pub company: Option<String>,
    /// Only entries not yet synced to QBO.
    #[arg(long, requires = "company")]
    pub unsynced: bool,
    /// Max results (overrides the global limit).
    #[arg(long)]
    pub max: Option<u32>,
}
