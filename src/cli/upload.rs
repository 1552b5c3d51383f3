use std::path::PathBuf;

use crate::cli::commands::UploadArgs;
use crate::cli::context::CliContext;
use crate::errors::ReportDeskError;

pub async fn handle_upload(ctx: &CliContext, args: UploadArgs) -> Result<i32, ReportDeskError> {
    let mut client = ctx.client()?;
    if args.ai_model.is_some() {
        client.set_ai_model(args.ai_model);
    }

    let file = args.file.map(PathBuf::from);
    let outcome = client.submit_upload(file.as_deref()).await;
    ctx.finish(client, outcome).await
}
