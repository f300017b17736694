//! Console command grammar so typed input maps to session operations.

/// Usage text for the `help` console command.
pub(crate) const USAGE: &str = "\
Commands:
  say <text>            simulate a finalized voice transcript
  start / stop          control voice capture
  add <time> <title>    add a schedule entry
  done <id>             mark a schedule entry done
  schedule              show the current schedule
  font <n>              set the font size
  contrast / motion / sensory
                        flip the matching accessibility toggle
  help                  show this text
  quit                  exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ConsoleCommand {
    Say(String),
    StartListening,
    StopListening,
    AddEntry { time: String, title: String },
    MarkDone(String),
    ShowSchedule,
    SetFontSize(i32),
    ToggleContrast,
    ToggleMotion,
    ToggleSensory,
    Help,
    Quit,
    Unknown(String),
}

/// Parse one console line. Blank lines yield `None`.
pub(crate) fn parse_console_command(line: &str) -> Option<ConsoleCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let (verb, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (trimmed, ""),
    };
    let command = match verb.to_ascii_lowercase().as_str() {
        "say" if !rest.is_empty() => ConsoleCommand::Say(rest.to_string()),
        "start" => ConsoleCommand::StartListening,
        "stop" => ConsoleCommand::StopListening,
        "add" => match rest.split_once(char::is_whitespace) {
            Some((time, title)) => ConsoleCommand::AddEntry {
                time: time.to_string(),
                title: title.trim().to_string(),
            },
            None => ConsoleCommand::AddEntry {
                time: rest.to_string(),
                title: String::new(),
            },
        },
        "done" if !rest.is_empty() => ConsoleCommand::MarkDone(rest.to_string()),
        "schedule" | "list" => ConsoleCommand::ShowSchedule,
        "font" => match rest.parse() {
            Ok(size) => ConsoleCommand::SetFontSize(size),
            Err(_) => ConsoleCommand::Unknown(trimmed.to_string()),
        },
        "contrast" => ConsoleCommand::ToggleContrast,
        "motion" => ConsoleCommand::ToggleMotion,
        "sensory" => ConsoleCommand::ToggleSensory,
        "help" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        _ => ConsoleCommand::Unknown(trimmed.to_string()),
    };
    Some(command)
}
