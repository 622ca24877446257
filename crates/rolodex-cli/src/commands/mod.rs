use chrono::NaiveDate;
use rolodex_core::{AddressBook, CoreError};
use thiserror::Error;
use tracing::debug;

pub mod browse;
pub mod contacts;

pub const WRONG_COMMAND: &str = "Wrong command! Please, try again!";
pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";

const EXIT_SENTINELS: [&str; 4] = [".", "close", "exit", "good bye"];

pub struct Context<'a> {
    pub book: &'a mut AddressBook,
    pub today: NaiveDate,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("expected {expected} arguments, got {got}")]
    Arity { expected: &'static str, got: usize },
    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type CommandResult = Result<String, CommandError>;

type Handler = fn(&mut Context<'_>, &str) -> CommandResult;

pub struct Command {
    pub keyword: &'static str,
    handler: Handler,
}

/// Matched by prefix, first entry wins.
pub const COMMANDS: &[Command] = &[
    Command {
        keyword: "add",
        handler: contacts::add_contact,
    },
    Command {
        keyword: "change",
        handler: contacts::change_phone,
    },
    Command {
        keyword: "delete",
        handler: contacts::delete_phone,
    },
    Command {
        keyword: "hello",
        handler: greet,
    },
    Command {
        keyword: "phone",
        handler: contacts::show_phone,
    },
    Command {
        keyword: "show all",
        handler: browse::show_all,
    },
];

pub fn is_exit_sentinel(line: &str) -> bool {
    let normalized = line.trim().to_lowercase();
    EXIT_SENTINELS.contains(&normalized.as_str())
}

/// Finds the command for `line` and the argument text that follows its keyword.
pub fn find_command(line: &str) -> Option<(&'static Command, &str)> {
    let trimmed = line.trim();
    COMMANDS.iter().find_map(|command| {
        let keyword = command.keyword;
        trimmed
            .get(..keyword.len())
            .filter(|head| head.eq_ignore_ascii_case(keyword))
            .map(|_| (command, trimmed[keyword.len()..].trim()))
    })
}

/// Runs one input line and returns the text to show. Lines that match no
/// keyword are treated as a search query.
pub fn dispatch(ctx: &mut Context<'_>, line: &str) -> String {
    let result = match find_command(line) {
        Some((command, args)) => {
            debug!(command = command.keyword, "dispatching");
            (command.handler)(ctx, args)
        }
        None => browse::search(ctx, line.trim()),
    };

    result.unwrap_or_else(|err| {
        match &err {
            CommandError::Core(core) => {
                debug!(error = %err, kind = ?core.kind(), "command rejected")
            }
            CommandError::Arity { .. } => debug!(error = %err, "command rejected"),
        }
        WRONG_COMMAND.to_string()
    })
}

pub(crate) fn split_args<const N: usize>(args: &str) -> Result<[&str; N], CommandError> {
    let tokens: Vec<&str> = args.split_whitespace().collect();
    let got = tokens.len();
    tokens.try_into().map_err(|_| CommandError::Arity {
        expected: arity_label(N),
        got,
    })
}

fn arity_label(count: usize) -> &'static str {
    match count {
        1 => "1",
        2 => "2",
        3 => "3",
        _ => "more",
    }
}

fn greet(_ctx: &mut Context<'_>, _args: &str) -> CommandResult {
    Ok(GREETING.to_string())
}
