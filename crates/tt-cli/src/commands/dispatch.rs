use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Init(args) => commands::init::handle(&args, ctx, flags).await,
        Commands::Status => commands::status::handle(ctx, flags).await,
        Commands::Company { action } => commands::company::handle(&action, ctx, flags).await,
        Commands::Employee { action } => {
            commands::listing::handle_employees(&action, ctx, flags).await
        }
        Commands::Customer { action } => {
            commands::listing::handle_customers(&action, ctx, flags).await
        }
        Commands::Item { action } => commands::listing::handle_items(&action, ctx, flags).await,
        Commands::Time { action } => commands::time::handle(&action, ctx, flags).await,
        Commands::Sync { action } => commands::sync::handle(&action, ctx, flags).await,
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
