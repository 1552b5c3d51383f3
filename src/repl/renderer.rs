use console::style;

use crate::repl::commands::{CommandHelp, COMMAND_HELP};

/// Render the help listing for all commands, or the detail for one.
pub fn render_help(specific_command: Option<&str>) -> String {
    if let Some(cmd_name) = specific_command {
        return match COMMAND_HELP.iter().find(|c| c.name == cmd_name) {
            Some(cmd) => format_command_detail(cmd),
            None => format!("{} Unknown command: /{}", style("✗").red(), cmd_name),
        };
    }

    let mut out = String::new();
    out.push_str(&format!("\n{}\n\n", style("Available commands:").white().bold()));
    for cmd in COMMAND_HELP {
        out.push_str(&format!(
            "  {:<16} {}\n",
            style(format!("/{}", cmd.name)).cyan().bold(),
            style(cmd.description).dim(),
        ));
    }
    out
}

fn format_command_detail(cmd: &CommandHelp) -> String {
    format!(
        "\n{}\n  {}\n\n  {}\n",
        style(format!("/{}", cmd.name)).cyan().bold(),
        style(cmd.description).dim(),
        style(cmd.usage).white(),
    )
}

/// Render the version info.
pub fn render_version() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let git_hash = option_env!("GIT_HASH").unwrap_or("dev");
    let build_ts = option_env!("BUILD_TIMESTAMP").unwrap_or("unknown");

    format!(
        "\n  {} {}\n  {} {}\n  {} {}\n",
        style("Version:").dim(),
        style(version).white().bold(),
        style("Commit:").dim(),
        style(git_hash).white(),
        style("Built:").dim(),
        style(build_ts).white(),
    )
}

pub fn render_separator(width: usize) -> String {
    format!("{}", style("─".repeat(width)).dim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_every_command() {
        console::set_colors_enabled(false);
        let help = render_help(None);
        for cmd in COMMAND_HELP {
            assert!(help.contains(&format!("/{}", cmd.name)));
        }
    }

    #[test]
    fn test_help_for_one_command_shows_usage() {
        console::set_colors_enabled(false);
        let help = render_help(Some("select"));
        assert!(help.contains("/select <n>"));
    }

    #[test]
    fn test_help_for_unknown_command() {
        console::set_colors_enabled(false);
        assert!(render_help(Some("scan")).contains("Unknown command: /scan"));
    }
}
