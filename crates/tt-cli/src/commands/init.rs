use std::path::Path;

use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ttrack init`.
pub async fn handle(args: &InitArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let oauth_file = args
        .oauth_file
        .as_deref()
        .unwrap_or(&ctx.config.general.oauth_file);

    let outcome = ctx
        .service
        .initialize_data(Path::new(oauth_file))
        .await
        .with_context(|| format!("failed to initialize data from {oauth_file}"))?;

    if outcome.is_noop() && !flags.quiet {
        eprintln!("App info already loaded; nothing to do.");
    }
    output(&outcome, flags.format)
}
