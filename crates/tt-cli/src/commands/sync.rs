use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SyncCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ttrack sync`.
pub async fn handle(action: &SyncCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let gateway = ctx.gateway()?;
    match action {
        SyncCommands::Employee(args) => {
            let mut employee = ctx.service.get_employee(&args.id).await?;
            let outcome = gateway
                .create_employee_in_qbo(&mut employee)
                .await
                .with_context(|| format!("failed to sync employee {}", args.id))?;
            output(&outcome, flags.format)
        }
        SyncCommands::Customer(args) => {
            let mut customer = ctx.service.get_customer(&args.id).await?;
            let outcome = gateway
                .create_customer_in_qbo(&mut customer)
                .await
                .with_context(|| format!("failed to sync customer {}", args.id))?;
            output(&outcome, flags.format)
        }
        SyncCommands::Item(args) => {
            let mut item = ctx.service.get_service_item(&args.id).await?;
            let outcome = gateway
                .create_item_in_qbo(&mut item)
                .await
                .with_context(|| format!("failed to sync service item {}", args.id))?;
            output(&outcome, flags.format)
        }
        SyncCommands::Time(args) => {
            let mut activity = ctx.service.get_time_activity(&args.id).await?;
            let outcome = gateway
                .create_time_activity_in_qbo(&mut activity)
                .await
                .with_context(|| format!("failed to sync time activity {}", args.id))?;
            output(&outcome, flags.format)
        }
        SyncCommands::Company(args) => {
            let report = gateway
                .sync_company(&args.id)
                .await
                .with_context(|| format!("failed to sync company {}", args.id))?;
            output(&report, flags.format)
        }
    }
}
