use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "reportdesk", version, about = "Upload audit reports for analysis, browse and export the results")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Report server base URL (overrides REPORTDESK_SERVER and the config file)
    #[arg(short, long, global = true)]
    pub server: Option<String>,

    /// YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Also write the resulting page as an HTML document
    #[arg(long, global = true)]
    pub html: Option<String>,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload a PDF for analysis and show the resulting report
    Upload(UploadArgs),
    /// Show a stored report
    Open(OpenArgs),
    /// List stored reports
    List,
    /// Download a report export
    Export(ExportArgs),
    /// Interactive shell
    Shell,
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct UploadArgs {
    /// PDF file to upload
    pub file: Option<String>,

    /// Analysis model requested from the server
    #[arg(long)]
    pub ai_model: Option<String>,
}

#[derive(Args, Clone)]
pub struct OpenArgs {
    /// Report id
    pub id: i64,
}

#[derive(Args, Clone)]
pub struct ExportArgs {
    /// Report id
    pub id: i64,

    /// Output directory (defaults to output.directory from the config, else the current directory)
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}
