use clap::{Args, Subcommand};

/// Sync commands. Each is idempotent: already-synced entities are skipped.
#[derive(Clone, Debug, Subcommand)]
pub enum SyncCommands {
    /// Match or create one employee.
    Employee(SyncArgs),
    /// Match or create one customer.
    Customer(SyncArgs),
    /// Match or create one service item.
    Item(SyncArgs),
    /// Create one time activity, syncing what it references first.
    Time(SyncArgs),
    /// Match or create every employee, customer and service item of a company.
    Company(SyncArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SyncArgs {
    /// Local ID of the entity.
    pub id: String,
}
