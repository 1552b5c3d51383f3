use crate::cli::commands::OpenArgs;
use crate::cli::context::CliContext;
use crate::errors::ReportDeskError;

pub async fn handle_open(ctx: &CliContext, args: OpenArgs) -> Result<i32, ReportDeskError> {
    let mut client = ctx.client()?;
    let outcome = client.load_report(args.id).await;
    ctx.finish(client, outcome).await
}
