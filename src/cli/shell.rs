use crate::cli::context::CliContext;
use crate::errors::ReportDeskError;
use crate::repl::ReplSession;

pub async fn handle_shell(ctx: &CliContext) -> Result<i32, ReportDeskError> {
    let client = ctx.client()?;
    ReplSession::new(client, ctx.settings.export_dir.clone(), ctx.html.clone())
        .run()
        .await?;
    Ok(0)
}
