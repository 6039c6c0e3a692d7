//! Command-line argument parsing.
//!
//! ```text
//! heroes                          interactive browser (default)
//! heroes browse                   interactive browser
//! heroes list [--page N] [--size N]
//! heroes show <id>
//! heroes help
//! ```

/// Usage text printed by `heroes help` and on argument errors.
pub const USAGE: &str = "\
Usage:
  heroes [browse]                     browse the catalog interactively
  heroes list [--page N] [--size N]   print one page of heroes
  heroes show <id>                    print one hero
  heroes help                         show this message
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Browse,
    /// `None` falls back to page 1 and the configured page size.
    List {
        page: Option<u32>,
        size: Option<u32>,
    },
    /// Kept raw; the detail view reports a non-numeric id itself.
    Show {
        id: String,
    },
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),

    #[error("{flag} requires a value")]
    MissingValue { flag: &'static str },

    #[error("{flag} must be a positive integer, got '{value}'")]
    InvalidNumber { flag: &'static str, value: String },

    #[error("show requires a hero id")]
    MissingId,
}

/// Parse arguments, excluding the program name.
pub fn parse<I, S>(args: I) -> Result<Command, ArgsError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);

    let Some(command) = args.next() else {
        return Ok(Command::Browse);
    };

    match command.as_str() {
        "browse" => {
            reject_extra(&mut args)?;
            Ok(Command::Browse)
        }
        "list" => {
            let mut page = None;
            let mut size = None;
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--page" => page = Some(number("--page", args.next())?),
                    "--size" => size = Some(number("--size", args.next())?),
                    _ => return Err(ArgsError::UnexpectedArgument(arg)),
                }
            }
            Ok(Command::List { page, size })
        }
        "show" => {
            let id = args.next().ok_or(ArgsError::MissingId)?;
            reject_extra(&mut args)?;
            Ok(Command::Show { id })
        }
        "help" | "--help" | "-h" => Ok(Command::Help),
        _ => Err(ArgsError::UnknownCommand(command)),
    }
}

// ---- private helpers ----

fn reject_extra(args: &mut impl Iterator<Item = String>) -> Result<(), ArgsError> {
    match args.next() {
        Some(arg) => Err(ArgsError::UnexpectedArgument(arg)),
        None => Ok(()),
    }
}

fn number(flag: &'static str, value: Option<String>) -> Result<u32, ArgsError> {
    let value = value.ok_or(ArgsError::MissingValue { flag })?;
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ArgsError::InvalidNumber { flag, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn no_arguments_browses() {
        assert_eq!(parse(Vec::<String>::new()), Ok(Command::Browse));
        assert_eq!(parse(["browse"]), Ok(Command::Browse));
    }

    #[test]
    fn list_with_flags() {
        assert_eq!(
            parse(["list", "--size", "20", "--page", "3"]),
            Ok(Command::List {
                page: Some(3),
                size: Some(20),
            })
        );
        assert_eq!(
            parse(["list"]),
            Ok(Command::List {
                page: None,
                size: None,
            })
        );
    }

    #[test]
    fn list_rejects_bad_numbers() {
        assert_matches!(
            parse(["list", "--page", "0"]),
            Err(ArgsError::InvalidNumber { flag: "--page", .. })
        );
        assert_matches!(
            parse(["list", "--size", "ten"]),
            Err(ArgsError::InvalidNumber { flag: "--size", .. })
        );
        assert_eq!(
            parse(["list", "--page"]),
            Err(ArgsError::MissingValue { flag: "--page" })
        );
    }

    #[test]
    fn show_keeps_raw_id() {
        assert_eq!(
            parse(["show", "abc"]),
            Ok(Command::Show { id: "abc".into() })
        );
        assert_eq!(parse(["show"]), Err(ArgsError::MissingId));
        assert_eq!(
            parse(["show", "1", "2"]),
            Err(ArgsError::UnexpectedArgument("2".into()))
        );
    }

    #[test]
    fn unknown_command() {
        assert_eq!(
            parse(["delete"]),
            Err(ArgsError::UnknownCommand("delete".into()))
        );
        assert_eq!(parse(["-h"]), Ok(Command::Help));
    }
}
