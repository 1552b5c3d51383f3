use crate::cli::context::CliContext;
use crate::errors::ReportDeskError;

pub async fn handle_list(ctx: &CliContext) -> Result<i32, ReportDeskError> {
    let mut client = ctx.client()?;
    let outcome = client.refresh_report_list().await;
    ctx.finish(client, outcome).await
}
