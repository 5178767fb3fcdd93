use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Search(String),
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("received no command")]
    Empty,
    #[error("unknown command: {0}")]
    UnknownVerb(String),
    #[error("missing argument for {0}")]
    MissingArgument(&'static str),
}

/// Split a line into a verb (first word, case-insensitive) and the trimmed rest.
///
/// A line starting with a space has no verb and is rejected. `search` accepts
/// an empty argument so the caller can report the length requirement itself.
pub fn parse_line(line: &str) -> Result<Command, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (verb, arg) = match line.split_once(' ') {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };
    if verb.is_empty() {
        return Err(CommandError::Empty);
    }
    match verb.to_lowercase().as_str() {
        "add" if arg.is_empty() => Err(CommandError::MissingArgument("add")),
        "add" => Ok(Command::Add(arg.to_string())),
        "search" => Ok(Command::Search(arg.to_string())),
        "quit" => Ok(Command::Quit),
        other => Err(CommandError::UnknownVerb(other.to_string())),
    }
}
