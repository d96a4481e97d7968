//! `ttrack employee|customer|item list`.

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{CustomerCommands, EmployeeCommands, ItemCommands, ListArgs};
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

fn limit(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> u32 {
    effective_limit(args.max, flags.limit, ctx.config.general.default_limit)
}

pub async fn handle_employees(
    action: &EmployeeCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let EmployeeCommands::List(args) = action;
    let employees = match (&args.company, args.unsynced) {
        (Some(company), true) => ctx.service.list_unsynced_employees(company).await?,
        (company, _) => {
            ctx.service
                .list_employees(company.as_deref(), Some(limit(args, ctx, flags)))
                .await?
        }
    };
    output(&employees, flags.format)
}

pub async fn handle_customers(
    action: &CustomerCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let CustomerCommands::List(args) = action;
    let customers = match (&args.company, args.unsynced) {
        (Some(company), true) => ctx.service.list_unsynced_customers(company).await?,
        (company, _) => {
            ctx.service
                .list_customers(company.as_deref(), Some(limit(args, ctx, flags)))
                .await?
        }
    };
    output(&customers, flags.format)
}

pub async fn handle_items(
    action: &ItemCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let ItemCommands::List(args) = action;
    let items = match (&args.company, args.unsynced) {
        (Some(company), true) => ctx.service.list_unsynced_service_items(company).await?,
        (company, _) => {
            ctx.service
                .list_service_items(company.as_deref(), Some(limit(args, ctx, flags)))
                .await?
        }
    };
    output(&items, flags.format)
}
