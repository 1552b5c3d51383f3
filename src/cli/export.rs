use std::path::PathBuf;

use crate::cli::commands::ExportArgs;
use crate::cli::context::CliContext;
use crate::errors::ReportDeskError;
use crate::view::terminal::render_success;

pub async fn handle_export(ctx: &CliContext, args: ExportArgs) -> Result<i32, ReportDeskError> {
    let dir = args
        .output
        .map(PathBuf::from)
        .unwrap_or_else(|| ctx.settings.export_dir.clone());

    let mut client = ctx.client()?;
    let outcome = client.export_report(args.id, &dir).await;
    if let Ok(path) = &outcome {
        println!("{}", render_success(&format!("Saved {}", path.display())));
    }
    ctx.finish(client, outcome).await
}
