//! Line-oriented scripts for driving the panel headlessly
//!
//! One command per line; blank lines and `#` comments are ignored.
//!
//! ```text
//! open /work/proj/src/main.rs   # visit a file in the selected editor window
//! toggle [DIR]                  # show/hide the side panel
//! switch-project DIR            # fire a project-switch notification
//! drift N                       # another panel pushed the side window to N cells
//! resize N                      # the user dragged the side window to N cells
//! split                         # split the selected editor window
//! focus panel|editor            # move focus
//! pick FILE                     # choose FILE inside the panel
//! promote | unpromote           # enter/leave a full-frame session in the selected window
//! follow-project on|off
//! status
//! ```

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// Parse failure, with its 1-based line number
#[derive(Debug, Error, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct ScriptError {
    pub line: usize,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Panel,
    Editor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Open(PathBuf),
    Toggle(Option<PathBuf>),
    SwitchProject(PathBuf),
    Drift(u32),
    Resize(u32),
    Split,
    Focus(FocusTarget),
    Pick(PathBuf),
    Promote,
    Unpromote,
    FollowProject(bool),
    Status,
}

impl FromStr for ScriptCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err("empty command".to_string());
        };
        let arg = words.next();
        if words.next().is_some() {
            return Err(format!("too many arguments to '{}'", verb));
        }

        let path = |arg: Option<&str>| {
            arg.map(PathBuf::from)
                .ok_or_else(|| format!("'{}' needs a path", verb))
        };
        let extent = |arg: Option<&str>| {
            arg.and_then(|a| a.parse::<u32>().ok())
                .ok_or_else(|| format!("'{}' needs a cell count", verb))
        };

        match verb {
            "open" => Ok(ScriptCommand::Open(path(arg)?)),
            "toggle" => Ok(ScriptCommand::Toggle(arg.map(PathBuf::from))),
            "switch-project" => Ok(ScriptCommand::SwitchProject(path(arg)?)),
            "drift" => Ok(ScriptCommand::Drift(extent(arg)?)),
            "resize" => Ok(ScriptCommand::Resize(extent(arg)?)),
            "split" => Ok(ScriptCommand::Split),
            "focus" => match arg {
                Some("panel") => Ok(ScriptCommand::Focus(FocusTarget::Panel)),
                Some("editor") => Ok(ScriptCommand::Focus(FocusTarget::Editor)),
                _ => Err("'focus' takes panel or editor".to_string()),
            },
            "pick" => Ok(ScriptCommand::Pick(path(arg)?)),
            "promote" => Ok(ScriptCommand::Promote),
            "unpromote" => Ok(ScriptCommand::Unpromote),
            "follow-project" => match arg {
                Some("on") => Ok(ScriptCommand::FollowProject(true)),
                Some("off") => Ok(ScriptCommand::FollowProject(false)),
                _ => Err("'follow-project' takes on or off".to_string()),
            },
            "status" => Ok(ScriptCommand::Status),
            other => Err(format!("unknown command '{}'", other)),
        }
    }
}

/// Parse a whole script
pub fn parse_script(source: &str) -> Result<Vec<ScriptCommand>, ScriptError> {
    source
        .lines()
        .enumerate()
        .filter_map(|(index, raw)| {
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                return None;
            }
            Some(line.parse().map_err(|message| ScriptError {
                line: index + 1,
                message,
            }))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script_skips_comments() {
        let script = "# setup\nopen /p/a.rs\n\ntoggle   # show\nstatus\n";
        assert_eq!(
            parse_script(script).unwrap(),
            vec![
                ScriptCommand::Open(PathBuf::from("/p/a.rs")),
                ScriptCommand::Toggle(None),
                ScriptCommand::Status,
            ]
        );
    }

    #[test]
    fn test_parse_arguments() {
        assert_eq!(
            "toggle /p".parse::<ScriptCommand>(),
            Ok(ScriptCommand::Toggle(Some(PathBuf::from("/p"))))
        );
        assert_eq!("drift 80".parse::<ScriptCommand>(), Ok(ScriptCommand::Drift(80)));
        assert_eq!(
            "focus panel".parse::<ScriptCommand>(),
            Ok(ScriptCommand::Focus(FocusTarget::Panel))
        );
        assert_eq!(
            "follow-project off".parse::<ScriptCommand>(),
            Ok(ScriptCommand::FollowProject(false))
        );
    }

    #[test]
    fn test_parse_errors_carry_line_numbers() {
        let err = parse_script("status\nopen\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert!(err.message.contains("needs a path"));

        let err = parse_script("explode").unwrap_err();
        assert_eq!(err.to_string(), "line 1: unknown command 'explode'");

        assert!("drift wide".parse::<ScriptCommand>().is_err());
        assert!("status now please".parse::<ScriptCommand>().is_err());
    }
}
