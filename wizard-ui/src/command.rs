//! Text commands typed at the wizard prompt.

use thiserror::Error;
use wizard_core::{Locale, SlabOption};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' (type 'help')")]
    Unknown(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("unknown language '{0}' (expected fr or en)")]
    InvalidLocale(String),

    #[error("unknown slab option '{0}' (expected single or double)")]
    InvalidSlab(String),
}

/// A user intent relayed to the dashboard or the open wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open a new wizard from the dashboard.
    New,
    ToggleLang,
    Lang(Locale),
    Set { field: String, value: String },
    Slab(SlabOption),
    Next,
    Back,
    Cancel,
    Finish,
    Technician,
    /// List the choices accepted by the visible fields.
    Fields,
    /// Print the values entered so far.
    Show,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. The first word picks the command; for `set`
    /// the rest of the line after the field name is the value, verbatim.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "new" | "create" => Ok(Self::New),
            "toggle-lang" | "toggle" => Ok(Self::ToggleLang),
            "lang" => {
                let tag = required(rest, "lang", "a language (fr or en)")?;
                Locale::parse(tag)
                    .map(Self::Lang)
                    .ok_or_else(|| CommandError::InvalidLocale(tag.to_string()))
            }
            "set" => {
                let args = required(rest, "set", "a field name")?;
                let (field, value) = match args.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value.trim()),
                    None => (args, ""),
                };
                Ok(Self::Set {
                    field: field.to_string(),
                    value: value.to_string(),
                })
            }
            "slab" => {
                let option = required(rest, "slab", "an option (single or double)")?;
                SlabOption::parse(option)
                    .map(Self::Slab)
                    .ok_or_else(|| CommandError::InvalidSlab(option.to_string()))
            }
            "next" | "n" => Ok(Self::Next),
            "back" | "previous" | "prev" | "b" => Ok(Self::Back),
            "cancel" | "close" => Ok(Self::Cancel),
            "finish" | "submit" => Ok(Self::Finish),
            "technician" | "tech" => Ok(Self::Technician),
            "fields" => Ok(Self::Fields),
            "show" => Ok(Self::Show),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument { command, argument })
    } else {
        Ok(rest)
    }
}

pub const HELP: &str = "\
Dashboard:
  new                  open the project wizard
  toggle-lang          switch between French and English
  lang <fr|en>         pick a language
  quit                 leave
Wizard:
  set <field> <value>  enter a value (empty value clears it)
  slab <single|double> pick the slab configuration
  next / back          move between steps (back on step 1 closes)
  finish               submit the project, or retry a refused one
  cancel               close without saving
  technician           ask for a technician (step 2)
  fields               list accepted choices
  show                 print values entered so far";

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_set_keeps_spaces_in_value() {
        let cmd = Command::parse("set title Tour A").unwrap();

        assert_eq!(
            cmd,
            Command::Set {
                field: "title".to_string(),
                value: "Tour A".to_string()
            }
        );
    }

    #[test]
    fn parse_set_without_value_clears() {
        let cmd = Command::parse("set height").unwrap();

        assert_eq!(
            cmd,
            Command::Set {
                field: "height".to_string(),
                value: String::new()
            }
        );
    }

    #[test]
    fn parse_set_without_field_is_an_error() {
        assert_eq!(
            Command::parse("set"),
            Err(CommandError::MissingArgument {
                command: "set",
                argument: "a field name"
            })
        );
    }

    #[test]
    fn parse_navigation_aliases() {
        assert_eq!(Command::parse("n"), Ok(Command::Next));
        assert_eq!(Command::parse("PREVIOUS"), Ok(Command::Back));
        assert_eq!(Command::parse("  submit "), Ok(Command::Finish));
    }

    #[test]
    fn parse_lang_and_slab_arguments() {
        assert_eq!(Command::parse("lang EN"), Ok(Command::Lang(Locale::En)));
        assert_eq!(
            Command::parse("lang de"),
            Err(CommandError::InvalidLocale("de".to_string()))
        );
        assert_eq!(
            Command::parse("slab double"),
            Ok(Command::Slab(SlabOption::Double))
        );
        assert!(matches!(
            Command::parse("slab"),
            Err(CommandError::MissingArgument { .. })
        ));
    }

    #[test]
    fn parse_rejects_unknown_and_empty_lines() {
        assert_eq!(Command::parse("   "), Err(CommandError::Empty));
        assert_eq!(
            Command::parse("fly away"),
            Err(CommandError::Unknown("fly".to_string()))
        );
    }
}
