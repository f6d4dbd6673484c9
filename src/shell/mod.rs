//! Interactive session surface.
//!
//! A line-oriented loop: the operator edits the form fields and triggers
//! submit/delete actions, and the table is re-rendered after every action
//! that touches the list. Bad input never terminates the session.

use std::io::Write as _;

use colored::Colorize;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::models::{FormMode, UserId};
use crate::output::OutputRenderer;
use crate::output::terminal::TerminalRenderer;
use crate::session::Session;

const HELP: &str = "  list           re-fetch and render the table
  name <text>    set the name field of the draft
  email <text>   set the email field of the draft
  edit <id>      copy a row into the draft and start editing it
  save           submit the draft (create, or update while editing)
  delete <id>    delete a row
  show           render the current draft and mode
  help           this text
  quit           leave the session";

/// A parsed operator command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    Name(String),
    Email(String),
    Edit(UserId),
    Save,
    Delete(UserId),
    Show,
    Help,
    Quit,
}

/// Errors from parsing an input line.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("nothing entered")]
    Empty,

    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("{0}")]
    Usage(&'static str),

    #[error("{0}")]
    BadId(String),
}

impl ShellCommand {
    /// Parse one input line.
    ///
    /// `name` and `email` take the rest of the line verbatim (possibly
    /// empty — values are not validated here or anywhere else before
    /// they reach the backend).
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandError::Empty);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim()),
            None => (line, ""),
        };

        match word {
            "list" | "ls" => Ok(ShellCommand::List),
            "name" => Ok(ShellCommand::Name(rest.to_string())),
            "email" => Ok(ShellCommand::Email(rest.to_string())),
            "edit" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("usage: edit <id>"));
                }
                rest.parse::<UserId>()
                    .map(ShellCommand::Edit)
                    .map_err(CommandError::BadId)
            }
            "save" => Ok(ShellCommand::Save),
            "delete" | "rm" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("usage: delete <id>"));
                }
                rest.parse::<UserId>()
                    .map(ShellCommand::Delete)
                    .map_err(CommandError::BadId)
            }
            "show" => Ok(ShellCommand::Show),
            "help" => Ok(ShellCommand::Help),
            "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// The input prompt, reflecting what a `save` would do.
fn prompt(mode: FormMode) -> String {
    match mode {
        FormMode::Creating => format!("{}> ", "roster".bold()),
        FormMode::Editing(id) => format!("{}(edit #{id})> ", "roster".bold()),
    }
}

/// Render the draft fields and the current mode.
fn render_form(session: &Session) -> String {
    let mode = match session.mode() {
        FormMode::Creating => "creating".to_string(),
        FormMode::Editing(id) => format!("editing #{id}"),
    };
    format!(
        "  {} {}\n  {} {}\n  {} {}\n",
        "name: ".dimmed(),
        session.form().name,
        "email:".dimmed(),
        session.form().email,
        "mode: ".dimmed(),
        mode,
    )
}

/// Run the interactive loop until `quit` or end of input.
///
/// Loads the list once up front, then maps each input line onto a
/// controller operation.
pub async fn run(session: &mut Session) -> std::io::Result<()> {
    session.load().await;
    print!("{}", TerminalRenderer.render(session.users()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{}", prompt(session.mode()));
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match ShellCommand::parse(&line) {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                println!("  {e} — type 'help' for the command list");
                continue;
            }
        };

        match command {
            ShellCommand::List => {
                session.load().await;
                print!("{}", TerminalRenderer.render(session.users()));
            }
            ShellCommand::Name(value) => session.set_name(value),
            ShellCommand::Email(value) => session.set_email(value),
            ShellCommand::Edit(id) => {
                session.begin_edit(id);
                print!("{}", render_form(session));
            }
            ShellCommand::Save => {
                session.submit().await;
                print!("{}", TerminalRenderer.render(session.users()));
            }
            ShellCommand::Delete(id) => {
                session.delete(id).await;
                print!("{}", TerminalRenderer.render(session.users()));
            }
            ShellCommand::Show => print!("{}", render_form(session)),
            ShellCommand::Help => println!("{HELP}"),
            ShellCommand::Quit => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bare_commands() {
        assert_eq!(ShellCommand::parse("list"), Ok(ShellCommand::List));
        assert_eq!(ShellCommand::parse("ls"), Ok(ShellCommand::List));
        assert_eq!(ShellCommand::parse("save"), Ok(ShellCommand::Save));
        assert_eq!(ShellCommand::parse("show"), Ok(ShellCommand::Show));
        assert_eq!(ShellCommand::parse("help"), Ok(ShellCommand::Help));
        assert_eq!(ShellCommand::parse("quit"), Ok(ShellCommand::Quit));
        assert_eq!(ShellCommand::parse("exit"), Ok(ShellCommand::Quit));
    }

    #[test]
    fn parse_field_edits_take_rest_of_line() {
        assert_eq!(
            ShellCommand::parse("name Ana Lovelace"),
            Ok(ShellCommand::Name("Ana Lovelace".into()))
        );
        assert_eq!(
            ShellCommand::parse("email ana@x.com"),
            Ok(ShellCommand::Email("ana@x.com".into()))
        );
    }

    #[test]
    fn parse_field_edit_without_value_sets_empty() {
        // Empty values are permitted — nothing validates them.
        assert_eq!(ShellCommand::parse("name"), Ok(ShellCommand::Name(String::new())));
        assert_eq!(ShellCommand::parse("email"), Ok(ShellCommand::Email(String::new())));
    }

    #[test]
    fn parse_edit_and_delete_take_an_id() {
        assert_eq!(ShellCommand::parse("edit 3"), Ok(ShellCommand::Edit(UserId(3))));
        assert_eq!(
            ShellCommand::parse("delete 4"),
            Ok(ShellCommand::Delete(UserId(4)))
        );
        assert_eq!(ShellCommand::parse("rm 4"), Ok(ShellCommand::Delete(UserId(4))));
    }

    #[test]
    fn parse_edit_without_id_reports_usage() {
        let err = ShellCommand::parse("edit").unwrap_err();
        assert_eq!(err, CommandError::Usage("usage: edit <id>"));
    }

    #[test]
    fn parse_non_numeric_id_is_rejected() {
        let err = ShellCommand::parse("delete ana").unwrap_err();
        assert!(matches!(err, CommandError::BadId(_)), "got: {err}");
    }

    #[test]
    fn parse_unknown_command() {
        let err = ShellCommand::parse("frobnicate").unwrap_err();
        assert_eq!(err, CommandError::Unknown("frobnicate".into()));
    }

    #[test]
    fn parse_blank_line() {
        assert_eq!(ShellCommand::parse("   "), Err(CommandError::Empty));
    }

    #[test]
    fn prompt_reflects_the_mode() {
        assert!(prompt(FormMode::Creating).contains("roster"));
        assert!(prompt(FormMode::Editing(UserId(5))).contains("edit #5"));
    }
}
