use std::path::PathBuf;

use console::style;
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor};
use tracing::{debug, info};

use crate::cli::context::CliClient;
use crate::errors::ReportDeskError;
use crate::repl::banner;
use crate::repl::commands::{self, SlashCommand};
use crate::repl::completer::ReplHelper;
use crate::repl::renderer;
use crate::view::terminal::{render_error, render_info, render_success};

/// Interactive shell around one report client. The client keeps the last
/// list and the report on display between commands.
pub struct ReplSession {
    client: CliClient,
    export_dir: PathBuf,
    html: Option<PathBuf>,
}

impl ReplSession {
    pub fn new(client: CliClient, export_dir: PathBuf, html: Option<PathBuf>) -> Self {
        Self { client, export_dir, html }
    }

    pub async fn run(mut self) -> Result<(), ReportDeskError> {
        banner::show_splash(&self.server());

        let config = Config::builder()
            .auto_add_history(true)
            .build();
        let mut editor = Editor::with_config(config)
            .map_err(|e| ReportDeskError::Internal(format!("Failed to initialize REPL: {}", e)))?;
        editor.set_helper(Some(ReplHelper::default()));

        // Same as the page load: show what is already there
        let _ = self.client.refresh_report_list().await;
        self.write_html().await;

        loop {
            let readline = {
                // rustyline is blocking, so use spawn_blocking
                let result = tokio::task::spawn_blocking(move || {
                    let term_w = console::Term::stdout().size().1 as usize;
                    let prompt = format!(
                        "{}\n{} ",
                        renderer::render_separator(term_w),
                        style("reportdesk>").cyan().bold()
                    );
                    let result = editor.readline(&prompt);
                    (editor, result)
                })
                .await
                .map_err(|e| ReportDeskError::Internal(format!("Readline task failed: {}", e)))?;

                editor = result.0;
                result.1
            };

            match readline {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }

                    match commands::parse_command(trimmed) {
                        Ok(cmd) => {
                            debug!(command = ?cmd, "Shell command");
                            if self.handle_command(cmd).await {
                                break;
                            }
                            self.write_html().await;
                        }
                        Err(msg) => println!("{}", render_error(&msg)),
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(err) => {
                    println!("{}", render_error(&format!("Input error: {}", err)));
                    break;
                }
            }
        }

        println!("{}", render_info("Goodbye."));
        Ok(())
    }

    /// Run one command. Returns true when the shell should exit.
    ///
    /// Workflow failures are already on screen, so their results are
    /// dropped here.
    async fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Exit => return true,

            SlashCommand::Clear => {
                print!("\x1B[2J\x1B[1;1H");
            }

            SlashCommand::Help { command } => {
                println!("{}", renderer::render_help(command.as_deref()));
            }

            SlashCommand::Version => {
                println!("{}", renderer::render_version());
            }

            SlashCommand::Upload { file, ai_model } => {
                if ai_model.is_some() {
                    self.client.set_ai_model(ai_model);
                }
                let path = file.map(PathBuf::from);
                if let Ok(id) = self.client.submit_upload(path.as_deref()).await {
                    println!("{}", render_success(&format!("Report {} created", id)));
                }
            }

            SlashCommand::Open { id } => {
                let _ = self.client.load_report(id).await;
            }

            SlashCommand::List => {
                let _ = self.client.refresh_report_list().await;
            }

            SlashCommand::Select { position } => {
                let _ = self.client.activate_entry(position - 1).await;
            }

            SlashCommand::Export { id, output } => {
                let dir = output.map(PathBuf::from).unwrap_or_else(|| self.export_dir.clone());
                let result = match id {
                    Some(id) => self.client.export_report(id, &dir).await,
                    None => self.client.export_current(&dir).await,
                };
                if let Ok(path) = result {
                    println!("{}", render_success(&format!("Saved {}", path.display())));
                }
            }
        }
        false
    }

    fn server(&self) -> String {
        self.client.api().base_url().to_string()
    }

    /// Keep the `--html` snapshot in step with the terminal.
    async fn write_html(&self) {
        let Some(path) = &self.html else {
            return;
        };
        let document = self.client.page().1.to_document();
        match tokio::fs::write(path, document).await {
            Ok(()) => info!(path = %path.display(), "HTML page updated"),
            Err(e) => println!("{}", render_error(&format!("Cannot write {}: {}", path.display(), e))),
        }
    }
}
