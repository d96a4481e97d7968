use chrono::NaiveDate;
use clap::{Args, Subcommand};

/// Time activity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TimeCommands {
    /// Record time worked for a customer.
    Log(TimeLogArgs),
    /// List time activities, newest first.
    List(TimeListArgs),
}

#[derive(Clone, Debug, Args)]
pub struct TimeLogArgs {
    #[arg(long)]
    pub employee: String,
    #[arg(long)]
    pub customer: String,
    /// Service item ID.
    #[arg(long)]
    pub item: String,
    /// Activity date, `YYYY-MM-DD`.
    #[arg(long)]
    pub date: NaiveDate,
    #[arg(long, default_value_t = 0)]
    pub hours: u32,
    #[arg(long, default_value_t = 0)]
    pub minutes: u32,
    #[arg(long)]
    pub description: Option<String>,
    /// Record the time as not billable.
    #[arg(long)]
    pub non_billable: bool,
}

#[derive(Clone, Debug, Args)]
pub struct TimeListArgs {
    #[arg(long)]
    pub company: Option<String>,
    /// Max results (overrides the global limit).
    #[arg(long)]
    pub max: Option<u32>,
}
