use clap::{Args, Subcommand};

/// Company commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CompanyCommands {
    /// List companies.
    List,
    /// Show a company with its employees, customers and service items.
    Show(CompanyShowArgs),
    /// Create an empty company.
    Create(CompanyCreateArgs),
    /// Store the QBO realm and access token for a company.
    Connect(CompanyConnectArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CompanyShowArgs {
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct CompanyCreateArgs {
    pub name: String,
}

#[derive(Clone, Debug, Args)]
pub struct CompanyConnectArgs {
    pub id: String,
    /// QBO realm (company) ID.
    #[arg(long)]
    pub realm: String,
    /// OAuth access token for the realm.
    #[arg(long)]
    pub token: String,
}
