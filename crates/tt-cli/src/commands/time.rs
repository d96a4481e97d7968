use tt_db::repos::time_activity::NewTimeActivity;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TimeCommands;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ttrack time`.
pub async fn handle(action: &TimeCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        TimeCommands::Log(args) => {
            let activity = ctx
                .service
                .create_time_activity(&NewTimeActivity {
                    employee_id: &args.employee,
                    customer_id: &args.customer,
                    service_item_id: &args.item,
                    activity_date: args.date,
                    hours: args.hours,
                    minutes: args.minutes,
                    description: args.description.as_deref(),
                    billable: !args.non_billable,
                })
                .await?;
            output(&activity, flags.format)
        }
        TimeCommands::List(args) => {
            let limit = effective_limit(args.max, flags.limit, ctx.config.general.default_limit);
            let activities = ctx
                .service
                .list_time_activities(args.company.as_deref(), Some(limit))
                .await?;
            output(&activities, flags.format)
        }
    }
}
