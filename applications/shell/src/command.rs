//! Line commands typed at the shell prompt.

use crate::error::{Result, ShellError};
use crate::views::{FormField, Section, TaskList};
use std::str::FromStr;

/// One parsed prompt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    /// Go to a location (`go <path>`, `login`, `signup`, `home`)
    Go(String),
    Set { field: FormField, value: String },
    TogglePassword,
    ToggleConfirmPassword,
    Submit,
    Section(Section),
    Add { list: TaskList, text: String },
    Toggle(u64),
    Logout,
    /// Re-run the session probe
    Refresh,
}

/// Split off the first word; the remainder keeps its inner spacing.
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (input, ""),
    }
}

fn usage(text: &str) -> ShellError {
    ShellError::Command(format!("Usage: {}", text))
}

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let (word, rest) = split_word(line.trim_end_matches(['\r', '\n']));

        let command = match word.to_ascii_lowercase().as_str() {
            "" => return Err(ShellError::Command("Empty command".into())),
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            "go" => {
                let path = rest.trim();
                if path.is_empty() {
                    return Err(usage("go <path>"));
                }
                Command::Go(path.to_string())
            }
            "home" => Command::Go("/".into()),
            "login" => Command::Go("/login".into()),
            "signup" => Command::Go("/signup".into()),
            "set" => {
                let (name, value) = split_word(rest);
                if name.is_empty() {
                    return Err(usage("set <field> <value>"));
                }
                let field = FormField::from_name(name)
                    .ok_or_else(|| ShellError::Command(format!("Unknown field: {}", name)))?;
                Command::Set {
                    field,
                    value: value.to_string(),
                }
            }
            "show" => match rest.trim() {
                "" | "password" => Command::TogglePassword,
                "confirm" | "confirmPassword" => Command::ToggleConfirmPassword,
                _ => return Err(usage("show [password|confirm]")),
            },
            "submit" => Command::Submit,
            "section" => {
                let name = rest.trim();
                let section = Section::from_name(name)
                    .ok_or_else(|| usage("section <upcoming|today|calendar>"))?;
                Command::Section(section)
            }
            "add" => {
                let (name, text) = split_word(rest);
                let list = TaskList::from_name(name)
                    .ok_or_else(|| usage("add <today|tomorrow|week> <text>"))?;
                Command::Add {
                    list,
                    text: text.to_string(),
                }
            }
            "toggle" => {
                let id = rest
                    .trim()
                    .trim_start_matches('#')
                    .parse()
                    .map_err(|_| usage("toggle <task id>"))?;
                Command::Toggle(id)
            }
            "logout" | "signout" => Command::Logout,
            "refresh" => Command::Refresh,
            other => {
                return Err(ShellError::Command(format!(
                    "Unknown command: {} (type `help`)",
                    other
                )))
            }
        };

        Ok(command)
    }
}

impl FromStr for Command {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
