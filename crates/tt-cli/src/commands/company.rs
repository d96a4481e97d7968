use crate::cli::GlobalFlags;
use crate::cli::subcommands::CompanyCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ttrack company`.
pub async fn handle(
    action: &CompanyCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CompanyCommands::List => {
            let companies = ctx.service.list_companies().await?;
            output(&companies, flags.format)
        }
        CompanyCommands::Show(args) => {
            let detail = ctx.service.get_company_detail(&args.id).await?;
            output(&detail, flags.format)
        }
        CompanyCommands::Create(args) => {
            let company = ctx.service.create_company(&args.name).await?;
            output(&company, flags.format)
        }
        CompanyCommands::Connect(args) => {
            let company = ctx
                .service
                .connect_company(&args.id, &args.realm, &args.token)
                .await?;
            output(&company, flags.format)
        }
    }
}
