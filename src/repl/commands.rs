/// All slash commands supported by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Upload {
        file: Option<String>,
        ai_model: Option<String>,
    },
    Open {
        id: i64,
    },
    List,
    /// 1-based position in the last list.
    Select {
        position: usize,
    },
    Export {
        id: Option<i64>,
        output: Option<String>,
    },
    Version,
    Clear,
    Help {
        command: Option<String>,
    },
    Exit,
}

/// Description of a command for help display.
pub struct CommandHelp {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

pub static COMMAND_HELP: &[CommandHelp] = &[
    CommandHelp {
        name: "upload",
        usage: "/upload <file.pdf> [--model <name>]",
        description: "Upload a PDF for analysis and show the resulting report",
    },
    CommandHelp {
        name: "open",
        usage: "/open <id>",
        description: "Show a stored report by id",
    },
    CommandHelp {
        name: "list",
        usage: "/list",
        description: "Refresh and show the list of previous reports",
    },
    CommandHelp {
        name: "select",
        usage: "/select <n>",
        description: "Open entry n of the last shown list",
    },
    CommandHelp {
        name: "export",
        usage: "/export [id] [--output <dir>]",
        description: "Download a report export (defaults to the report on display)",
    },
    CommandHelp {
        name: "version",
        usage: "/version",
        description: "Show version and build info",
    },
    CommandHelp {
        name: "clear",
        usage: "/clear",
        description: "Clear the terminal screen",
    },
    CommandHelp {
        name: "help",
        usage: "/help [command]",
        description: "Show help for all or a specific command",
    },
    CommandHelp {
        name: "exit",
        usage: "/exit",
        description: "Quit the shell",
    },
];

/// All command names for tab completion.
pub static COMMAND_NAMES: &[&str] = &[
    "/upload",
    "/open",
    "/list",
    "/select",
    "/export",
    "/version",
    "/clear",
    "/help",
    "/exit",
];

/// Parse a raw input line into a SlashCommand, or return an error message.
pub fn parse_command(input: &str) -> Result<SlashCommand, String> {
    let input = input.trim();
    if !input.starts_with('/') {
        return Err("Commands must start with /. Type /help for available commands.".into());
    }

    let words = split_words(input)?;
    let parts: Vec<&str> = words.iter().map(String::as_str).collect();
    let Some((&cmd, args)) = parts.split_first() else {
        return Err("Empty command".into());
    };

    match cmd {
        "/upload" => parse_upload(args),
        "/open" => {
            let id = parse_id(args.first().copied(), "/open")?
                .ok_or_else(|| "Usage: /open <id>".to_string())?;
            Ok(SlashCommand::Open { id })
        }
        "/list" | "/ls" => Ok(SlashCommand::List),
        "/select" => parse_select(args),
        "/export" => parse_export(args),
        "/version" => Ok(SlashCommand::Version),
        "/clear" => Ok(SlashCommand::Clear),
        "/help" => Ok(SlashCommand::Help {
            command: args.first().map(|s| s.trim_start_matches('/').to_string()),
        }),
        "/exit" | "/quit" | "/q" => Ok(SlashCommand::Exit),
        other => Err(format!("Unknown command: {}. Type /help for available commands.", other)),
    }
}

/// Split on whitespace, keeping single- or double-quoted runs together.
fn split_words(input: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in input.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("Unclosed {} quote", q));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

fn parse_upload(args: &[&str]) -> Result<SlashCommand, String> {
    let mut file = None;
    let mut ai_model = None;

    let mut i = 0;
    while i < args.len() {
        match args[i] {
            "--model" | "-m" => {
                i += 1;
                ai_model = args.get(i).map(|s| s.to_string());
            }
            flag if flag.starts_with("--") => {
                return Err(format!("Unknown flag for /upload: {}", flag));
            }
            path => {
                if file.is_some() {
                    return Err("Only one file can be uploaded at a time".into());
                }
                file = Some(path.to_string());
            }
        }
        i += 1;
    }

    Ok(SlashCommand::Upload { file, ai_model })
}

fn parse_select(args: &[&str]) -> Result<SlashCommand, String> {
    let raw = args.first().ok_or_else(|| "Usage: /select <n>".to_string())?;
    let position = raw
        .parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| format!("Invalid list position: {}", raw))?;
    Ok(SlashCommand::Select { position })
}

fn parse_export(args: &[&str]) -> Result<SlashCommand, String> {
    let mut id = None;
    let mut output = None;

    let mut i = 0;
    while i < args.len() {
        match args[i] {
            "--output" | "-o" => {
                i += 1;
                output = args.get(i).map(|s| s.to_string());
            }
            flag if flag.starts_with("--") => {
                return Err(format!("Unknown flag for /export: {}", flag));
            }
            raw => id = parse_id(Some(raw), "/export")?,
        }
        i += 1;
    }

    Ok(SlashCommand::Export { id, output })
}

fn parse_id(raw: Option<&str>, cmd: &str) -> Result<Option<i64>, String> {
    match raw {
        None => Ok(None),
        Some(raw) => raw
            .parse::<i64>()
            .map(Some)
            .map_err(|_| format!("Invalid report id for {}: {}", cmd, raw)),
    }
}
