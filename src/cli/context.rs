use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info};

use crate::cli::commands::Cli;
use crate::client::{HttpReportApi, ReportClient};
use crate::config::{self, ClientSettings, SERVER_ENV_VAR};
use crate::errors::ReportDeskError;
use crate::view::{HtmlPage, TerminalPage};

/// Every CLI command renders to the terminal and keeps an HTML copy of
/// the page for `--html`.
pub type CliPage = (TerminalPage, HtmlPage);
pub type CliClient = ReportClient<HttpReportApi, CliPage>;

pub struct CliContext {
    pub settings: ClientSettings,
    pub quiet: bool,
    pub html: Option<PathBuf>,
}

impl CliContext {
    pub async fn from_cli(cli: &Cli) -> Result<Self, ReportDeskError> {
        let file_config = match &cli.config {
            Some(path) => Some(config::parse_config(&PathBuf::from(path)).await?),
            None => None,
        };
        let env_server = std::env::var(SERVER_ENV_VAR).ok();

        let settings = ClientSettings::resolve(
            cli.server.as_deref(),
            env_server.as_deref(),
            file_config.as_ref(),
        );
        debug!(base_url = %settings.base_url, timeout_secs = settings.timeout_secs, "Client settings resolved");

        Ok(Self {
            settings,
            quiet: cli.quiet,
            html: cli.html.as_ref().map(PathBuf::from),
        })
    }

    pub fn client(&self) -> Result<CliClient, ReportDeskError> {
        let api = HttpReportApi::new(
            &self.settings.base_url,
            Duration::from_secs(self.settings.timeout_secs),
        )?;
        let page = (TerminalPage::new(self.quiet), HtmlPage::new());
        Ok(ReportClient::new(api, page).with_ai_model(self.settings.ai_model.clone()))
    }

    /// Write the HTML page if requested and turn the command outcome into
    /// an exit code. Workflow errors were already shown to the user.
    pub async fn finish<T>(
        &self,
        client: CliClient,
        outcome: Result<T, ReportDeskError>,
    ) -> Result<i32, ReportDeskError> {
        if let Some(path) = &self.html {
            let (_, html) = client.into_page();
            tokio::fs::write(path, html.to_document()).await?;
            info!(path = %path.display(), "HTML page written");
        }
        Ok(match outcome {
            Ok(_) => 0,
            Err(e) => e.exit_code(),
        })
    }
}
