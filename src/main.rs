use clap::Parser;
use tracing_subscriber::EnvFilter;

use reportdesk::cli::{self, CliContext, Commands};
use reportdesk::config;
use reportdesk::errors::ReportDeskError;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    match run(cli).await {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: cli::Cli) -> Result<i32, ReportDeskError> {
    if let Commands::Validate(args) = &cli.command {
        let path = std::path::PathBuf::from(&args.config);
        config::parse_config(&path).await?;
        println!("Configuration is valid: {}", args.config);
        return Ok(0);
    }

    let ctx = CliContext::from_cli(&cli).await?;
    match cli.command {
        Commands::Upload(args) => cli::upload::handle_upload(&ctx, args).await,
        Commands::Open(args) => cli::open::handle_open(&ctx, args).await,
        Commands::List => cli::list::handle_list(&ctx).await,
        Commands::Export(args) => cli::export::handle_export(&ctx, args).await,
        Commands::Shell => cli::shell::handle_shell(&ctx).await,
        Commands::Validate(_) => Ok(0),
    }
}
