//! Interactive shell mode
//!
//! Provides a REPL with command history and tab completion. The session lives
//! for the whole shell, so `games --page 3` or `games --name zelda` re-slice
//! the games already fetched instead of asking the server again.

use anyhow::Result;
use clap::Parser;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Config, Editor, Helper};

use super::output::print_error;
use super::{Cli, Session, dispatch};

/// Top-level commands with their subcommands and flags
const COMPLETIONS: &[(&str, &[&str])] = &[
    ("systems", &["--page", "--refresh"]),
    (
        "games",
        &[
            "--page",
            "--complete",
            "--incomplete",
            "--ignored",
            "--one-region",
            "--name",
            "--sizes",
        ],
    ),
    ("roms", &["--system", "--page"]),
    ("sizes", &[]),
    ("config", &["show", "get", "set", "path"]),
    ("help", &[]),
    ("exit", &[]),
    ("quit", &[]),
];

/// Command completer for the shell
#[derive(Default)]
struct ShellCompleter;

fn pairs<'a>(words: impl Iterator<Item = &'a str>, prefix: &str) -> Vec<Pair> {
    words
        .filter(|word| word.starts_with(prefix))
        .map(|word| Pair {
            display: word.to_string(),
            replacement: word.to_string(),
        })
        .collect()
}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        let words: Vec<&str> = line.split_whitespace().collect();
        let typing_new_word = line.is_empty() || line.ends_with(' ');
        let prefix = if typing_new_word {
            ""
        } else {
            words.last().copied().unwrap_or("")
        };
        let start = pos - prefix.len();

        let first_word = words.len() <= 1 && !(words.len() == 1 && typing_new_word);
        if first_word {
            return Ok((start, pairs(COMPLETIONS.iter().map(|(cmd, _)| *cmd), prefix)));
        }

        let candidates = COMPLETIONS
            .iter()
            .find(|(cmd, _)| *cmd == words[0])
            .map(|(_, subs)| pairs(subs.iter().copied(), prefix))
            .unwrap_or_default();
        Ok((start, candidates))
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for ShellCompleter {}
impl Validator for ShellCompleter {}
impl Helper for ShellCompleter {}

/// Split a command line into arguments, honouring quotes.
/// An empty quoted string (`--name ""`) is kept as an empty argument.
fn parse_args(line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut quote_char = None;

    for c in line.chars() {
        match (c, quote_char) {
            ('"' | '\'', None) => {
                quote_char = Some(c);
                quoted = true;
            }
            (c, Some(q)) if c == q => quote_char = None,
            (' ', None) => {
                if !current.is_empty() || quoted {
                    args.push(std::mem::take(&mut current));
                }
                quoted = false;
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() || quoted {
        args.push(current);
    }

    args
}

/// Run a single command in the shell.
/// Returns Ok(true) to continue, Ok(false) to exit gracefully.
async fn run_command(session: &mut Session, args: Vec<String>) -> Result<bool> {
    if args.is_empty() {
        return Ok(true);
    }

    match args[0].as_str() {
        "help" => {
            print_help();
            return Ok(true);
        }
        "exit" | "quit" => return Ok(false),
        _ => {}
    }

    // Build a fake argv for clap: ["rombrowser", ...args]
    let mut argv: Vec<String> = vec!["rombrowser".to_string()];
    argv.extend(args);

    let cli = match Cli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            // Print clap's error message (includes usage hints)
            println!("{}", e);
            return Ok(true);
        }
    };

    dispatch(session, cli).await?;
    Ok(true)
}

fn print_help() {
    println!(
        r#"rombrowser Interactive Shell

Commands:
  systems [--page N] [--refresh]   List systems
  games <system_id> [filters]      Load and list the games of a system
  games [filters] [--page N]       Re-filter or re-page the loaded games
  roms <game_id> [--system ID]     Load and list the ROMs of a game
  roms --page N                    Re-page the loaded ROMs
  sizes [system_id]                Show size totals of a system

Game filters:
  --complete true|false            Show complete games
  --incomplete true|false          Show incomplete games
  --ignored true|false             Show games ignored by the one-region set
  --one-region true|false          Show only one-region games
  --name TEXT                      Name contains TEXT ("" clears)
  --sizes                          Also show size totals

  config show                      Show current configuration
  config get <key>                 Get a specific setting
  config set <key> <value>         Set a configuration value
  config path                      Show config file path

  help                             Show this help
  exit, quit                       Exit the shell

Flags (can be added to any command):
  --json                           Output in JSON format
  --quiet, -q                      Suppress non-essential output
  --page-size N                    Change the page size of every list
"#
    );
}

/// Get the history file path
fn history_path() -> Option<std::path::PathBuf> {
    directories::ProjectDirs::from("org", "rombrowser", "rombrowser")
        .map(|dirs| dirs.data_dir().join("shell_history"))
}

/// Run the interactive shell
pub async fn run(mut session: Session) -> Result<()> {
    println!("rombrowser shell v{}", env!("CARGO_PKG_VERSION"));
    println!("Type 'help' for available commands, 'exit' to quit.\n");

    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(ShellCompleter));

    if let Some(path) = history_path() {
        let _ = rl.load_history(&path);
    }

    loop {
        match rl.readline("roms> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                rl.add_history_entry(line)?;

                match run_command(&mut session, parse_args(line)).await {
                    Ok(true) => continue,
                    Ok(false) => break,
                    Err(e) => print_error(&format!("{:#}", e)),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("exit");
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    if let Some(path) = history_path() {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = rl.save_history(&path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args_quotes() {
        assert_eq!(
            parse_args(r#"games 3 --name "super mario""#),
            vec!["games", "3", "--name", "super mario"]
        );
        assert_eq!(parse_args("  systems   --page 2 "), vec!["systems", "--page", "2"]);
    }

    #[test]
    fn test_parse_args_keeps_empty_quoted() {
        assert_eq!(parse_args(r#"games --name """#), vec!["games", "--name", ""]);
        assert_eq!(parse_args("games --name '' --page 1"), vec!["games", "--name", "", "--page", "1"]);
    }

    #[test]
    fn test_shell_line_parses_as_cli() {
        let mut argv = vec!["rombrowser".to_string()];
        argv.extend(parse_args("games 3 --one-region true --json"));
        let cli = Cli::try_parse_from(&argv).unwrap();
        assert!(cli.output.json);
        assert!(matches!(cli.command, super::super::Commands::Games(_)));
    }
}
