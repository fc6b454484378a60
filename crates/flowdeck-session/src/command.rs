//! Line-oriented editor commands.
//!
//! ```text
//! # build an auth + database workflow
//! add auth
//! add firestore
//! move 0 1        # drag the first module below the second
//! move 1 -        # drag dropped outside the canvas
//! remove auth-1
//! list
//! clear
//! ```
//!
//! Module kinds and instance ids are passed through as written. An unknown
//! kind or id is not a parse error; the editor ignores it.

use std::str::FromStr;

/// A single edit to apply to the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCommand {
  /// Append a new instance of the named kind.
  Add { kind: String },
  /// Remove the instance with this id.
  Remove { id: String },
  /// Complete a drag from `from`; `to` is `None` for a cancelled drag.
  Move { from: usize, to: Option<usize> },
  /// Show the current list.
  List,
  /// Remove every instance.
  Clear,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
  #[error("unknown command: {0}")]
  UnknownCommand(String),

  #[error("no command on line")]
  Empty,

  #[error("'{command}' expects {expected}")]
  Arity {
    command: &'static str,
    expected: &'static str,
  },

  #[error("invalid position '{0}'")]
  InvalidPosition(String),

  #[error("line {line}: {source}")]
  Line {
    line: usize,
    #[source]
    source: Box<CommandError>,
  },
}

impl EditorCommand {
  /// Parse one line. Blank lines and `#` comments yield `Ok(None)`.
  pub fn parse_line(line: &str) -> Result<Option<Self>, CommandError> {
    let line = match line.split_once('#') {
      Some((code, _comment)) => code,
      None => line,
    };
    let words: Vec<&str> = line.split_whitespace().collect();

    let Some((&name, args)) = words.split_first() else {
      return Ok(None);
    };

    let command = match (name, args) {
      ("add", [kind]) => EditorCommand::Add {
        kind: kind.to_string(),
      },
      ("add", _) => {
        return Err(CommandError::Arity {
          command: "add",
          expected: "a module kind",
        });
      }
      ("remove", [id]) => EditorCommand::Remove { id: id.to_string() },
      ("remove", _) => {
        return Err(CommandError::Arity {
          command: "remove",
          expected: "an instance id",
        });
      }
      ("move", [from, to]) => EditorCommand::Move {
        from: parse_position(from)?,
        to: match *to {
          "-" => None,
          to => Some(parse_position(to)?),
        },
      },
      ("move", _) => {
        return Err(CommandError::Arity {
          command: "move",
          expected: "a source position and a destination position or '-'",
        });
      }
      ("list", []) => EditorCommand::List,
      ("clear", []) => EditorCommand::Clear,
      ("list" | "clear", _) => {
        return Err(CommandError::Arity {
          command: if name == "list" { "list" } else { "clear" },
          expected: "no arguments",
        });
      }
      (other, _) => return Err(CommandError::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
  }
}

impl FromStr for EditorCommand {
  type Err = CommandError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse_line(s)?.ok_or(CommandError::Empty)
  }
}

fn parse_position(value: &str) -> Result<usize, CommandError> {
  value
    .parse()
    .map_err(|_| CommandError::InvalidPosition(value.to_string()))
}

/// Parse a whole script, stopping at the first bad line.
pub fn parse_script(script: &str) -> Result<Vec<EditorCommand>, CommandError> {
  let mut commands = Vec::new();
  for (index, line) in script.lines().enumerate() {
    let parsed = EditorCommand::parse_line(line).map_err(|e| CommandError::Line {
      line: index + 1,
      source: Box::new(e),
    })?;
    commands.extend(parsed);
  }
  Ok(commands)
}
