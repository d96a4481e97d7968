use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ttrack status`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = ctx.service.status().await?;
    output(&status, flags.format)
}
