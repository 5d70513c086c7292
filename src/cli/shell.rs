use std::{
    borrow::Cow,
    io::{self, BufRead},
};

use fintrack_config::{AppPaths, RateServiceConfig};
use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::{ValidationContext, ValidationResult, Validator},
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};
use shell_words::split;

use crate::app::FinanceManager;
use crate::cli::context::{CliMode, CommandError, LoopControl, ShellContext};
use crate::cli::output;
use crate::errors::CliError;

/// Set to run commands read line by line from stdin instead of a prompt.
pub const SCRIPT_ENV: &str = "FINTRACK_CLI_SCRIPT";

/// Entry point of the `fintrack` binary. Arguments run a single command;
/// without arguments the interactive shell (or script mode) starts.
pub fn run_cli() -> Result<(), CliError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mode = if !args.is_empty() {
        CliMode::OneShot
    } else if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let paths = AppPaths::resolve(None);
    tracing::debug!(data_dir = %paths.data_dir().display(), ?mode, "starting cli");
    let manager = FinanceManager::open(&paths, &RateServiceConfig::from_env())?;
    let mut context = ShellContext::new(manager, mode);

    match mode {
        CliMode::OneShot => run_once(&mut context, &args),
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_once(context: &mut ShellContext, args: &[String]) -> Result<(), CliError> {
    let command = args[0].to_lowercase();
    let rest: Vec<&str> = args.iter().skip(1).map(String::as_str).collect();
    match context.dispatch(&command, &args[0], &rest) {
        Ok(_) => Ok(()),
        Err(CommandError::UnknownCommand(name)) => {
            let hint = context
                .registry()
                .suggest(&name)
                .map(|suggestion| format!(" (did you mean `{suggestion}`?)"))
                .unwrap_or_default();
            Err(CliError::Command(format!("unknown command `{name}`{hint}")))
        }
        Err(err) => Err(CliError::Command(err.to_string())),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
    editor.set_helper(Some(CommandHelper::new(context.command_names())));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);

    output::info("Type `help` for commands, `exit` to leave.");
    while context.running {
        let prompt = context.prompt();
        match editor.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();
                match handle_line(context, trimmed) {
                    Ok(LoopControl::Continue) => {}
                    Ok(LoopControl::Exit) => break,
                    Err(err) => context.report_error(err)?,
                }
            }
            Err(ReadlineError::Interrupted) => {
                output::info("Use `exit` to leave the shell.");
            }
            Err(ReadlineError::Eof) => {
                output::info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if !context.running {
            break;
        }
        let line = line?;
        match handle_line(context, &line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err)?,
        }
    }
    Ok(())
}

fn handle_line(context: &mut ShellContext, line: &str) -> Result<LoopControl, CommandError> {
    let tokens = match parse_command_line(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            output::warning(err);
            return Ok(LoopControl::Continue);
        }
    };

    // blank lines and comments in scripts
    let Some(raw) = tokens.first() else {
        return Ok(LoopControl::Continue);
    };
    if raw.starts_with('#') {
        return Ok(LoopControl::Continue);
    }

    let command = raw.to_lowercase();
    let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

    match context.dispatch(&command, raw, &args) {
        Ok(LoopControl::Exit) => {
            context.running = false;
            Ok(LoopControl::Exit)
        }
        other => other,
    }
}

struct CommandHelper {
    commands: Vec<String>,
}

impl CommandHelper {
    fn new(names: Vec<&'static str>) -> Self {
        let mut commands: Vec<String> = names.into_iter().map(str::to_string).collect();
        commands.sort();
        commands.dedup();
        Self { commands }
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        // only the first word is a command name
        if prefix.trim_start().contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        let start = prefix.len() - prefix.trim_start().len();
        let needle = prefix[start..].to_ascii_lowercase();
        let candidates = self
            .commands
            .iter()
            .filter(|name| name.starts_with(&needle))
            .map(|name| Pair {
                display: name.clone(),
                replacement: name.clone(),
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for CommandHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        Ok(ValidationResult::Valid(None))
    }
}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, shell_words::ParseError> {
    split(input)
}
