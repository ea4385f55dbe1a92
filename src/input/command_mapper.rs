//! Command mapping from REPL lines to semantic actions
//!
//! Maps one line of user input to a high-level [`ViewerAction`]. The
//! mapper itself holds no state; the configured nudge step is passed in
//! because `+x`-style commands need it.

use wire3d_core::ProjectionPlane;

/// Actions the interactive viewer can perform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerAction {
    /// Shift the model by a delta vector
    Shift(f32, f32, f32),
    /// Grow the model by one scale step
    ScaleUp,
    /// Shrink the model by one scale step
    ScaleDown,
    /// Activate an orthographic projection
    Project(ProjectionPlane),
    /// Deactivate the projection
    ClearProjection,
    /// Restore the original view
    Reset,
    /// Print the current state and points
    Show,
    /// Render all three plane views
    Views,
    /// Print command help
    Help,
    /// Leave the viewer
    Quit,
}

/// Error mapping a command line
#[derive(Debug, Clone, PartialEq)]
pub enum CommandError {
    /// The first word is not a known command
    UnknownCommand(String),
    /// A command received the wrong number of arguments
    BadArity {
        command: &'static str,
        expected: usize,
        got: usize,
    },
    /// An argument could not be parsed as a number
    BadNumber(String),
    /// The argument to `project` is not a known plane
    UnknownPlane(String),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::UnknownCommand(cmd) => {
                write!(f, "Unknown command '{}' (try 'help')", cmd)
            }
            CommandError::BadArity { command, expected, got } => {
                write!(f, "'{}' takes {} arguments, got {}", command, expected, got)
            }
            CommandError::BadNumber(arg) => write!(f, "Not a number: '{}'", arg),
            CommandError::UnknownPlane(arg) => {
                write!(f, "Unknown plane '{}' (use xy, xz, yz or off)", arg)
            }
        }
    }
}

impl std::error::Error for CommandError {}

/// Maps command lines to semantic actions
pub struct CommandMapper;

impl CommandMapper {
    /// Map one line of input to an action
    ///
    /// Returns `Ok(None)` for blank lines. `shift_step` is the distance
    /// the single-key nudge commands move along their axis.
    pub fn map_line(line: &str, shift_step: f32) -> Result<Option<ViewerAction>, CommandError> {
        let mut words = line.split_whitespace();
        let command = match words.next() {
            Some(word) => word,
            None => return Ok(None),
        };
        let args: Vec<&str> = words.collect();

        let action = match command {
            "shift" => {
                if args.len() != 3 {
                    return Err(CommandError::BadArity {
                        command: "shift",
                        expected: 3,
                        got: args.len(),
                    });
                }
                let dx = parse_number(args[0])?;
                let dy = parse_number(args[1])?;
                let dz = parse_number(args[2])?;
                ViewerAction::Shift(dx, dy, dz)
            }
            "+x" => ViewerAction::Shift(shift_step, 0.0, 0.0),
            "-x" => ViewerAction::Shift(-shift_step, 0.0, 0.0),
            "+y" => ViewerAction::Shift(0.0, shift_step, 0.0),
            "-y" => ViewerAction::Shift(0.0, -shift_step, 0.0),
            "+z" => ViewerAction::Shift(0.0, 0.0, shift_step),
            "-z" => ViewerAction::Shift(0.0, 0.0, -shift_step),
            "scale+" => ViewerAction::ScaleUp,
            "scale-" => ViewerAction::ScaleDown,
            "project" => {
                if args.len() != 1 {
                    return Err(CommandError::BadArity {
                        command: "project",
                        expected: 1,
                        got: args.len(),
                    });
                }
                match args[0] {
                    "xy" => ViewerAction::Project(ProjectionPlane::Xy),
                    "xz" => ViewerAction::Project(ProjectionPlane::Xz),
                    "yz" => ViewerAction::Project(ProjectionPlane::Yz),
                    "off" | "none" => ViewerAction::ClearProjection,
                    other => return Err(CommandError::UnknownPlane(other.to_string())),
                }
            }
            "reset" => ViewerAction::Reset,
            "show" => ViewerAction::Show,
            "views" => ViewerAction::Views,
            "help" => ViewerAction::Help,
            "quit" | "exit" | "q" => ViewerAction::Quit,
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };

        Ok(Some(action))
    }
}

fn parse_number(arg: &str) -> Result<f32, CommandError> {
    arg.parse()
        .map_err(|_| CommandError::BadNumber(arg.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: f32 = 0.5;

    #[test]
    fn test_blank_line_maps_to_nothing() {
        assert_eq!(CommandMapper::map_line("", STEP), Ok(None));
        assert_eq!(CommandMapper::map_line("   ", STEP), Ok(None));
    }

    #[test]
    fn test_shift_with_arguments() {
        let action = CommandMapper::map_line("shift 1 -2 0.5", STEP);
        assert_eq!(action, Ok(Some(ViewerAction::Shift(1.0, -2.0, 0.5))));
    }

    #[test]
    fn test_shift_wrong_arity() {
        let action = CommandMapper::map_line("shift 1 2", STEP);
        assert_eq!(
            action,
            Err(CommandError::BadArity { command: "shift", expected: 3, got: 2 })
        );
    }

    #[test]
    fn test_shift_bad_number() {
        let action = CommandMapper::map_line("shift 1 two 3", STEP);
        assert_eq!(action, Err(CommandError::BadNumber("two".to_string())));
    }

    #[test]
    fn test_nudges_use_step() {
        assert_eq!(
            CommandMapper::map_line("+x", 2.0),
            Ok(Some(ViewerAction::Shift(2.0, 0.0, 0.0)))
        );
        assert_eq!(
            CommandMapper::map_line("-y", 2.0),
            Ok(Some(ViewerAction::Shift(0.0, -2.0, 0.0)))
        );
        assert_eq!(
            CommandMapper::map_line("+z", 2.0),
            Ok(Some(ViewerAction::Shift(0.0, 0.0, 2.0)))
        );
    }

    #[test]
    fn test_scale_commands() {
        assert_eq!(CommandMapper::map_line("scale+", STEP), Ok(Some(ViewerAction::ScaleUp)));
        assert_eq!(CommandMapper::map_line("scale-", STEP), Ok(Some(ViewerAction::ScaleDown)));
    }

    #[test]
    fn test_project_planes() {
        assert_eq!(
            CommandMapper::map_line("project xy", STEP),
            Ok(Some(ViewerAction::Project(ProjectionPlane::Xy)))
        );
        assert_eq!(
            CommandMapper::map_line("project xz", STEP),
            Ok(Some(ViewerAction::Project(ProjectionPlane::Xz)))
        );
        assert_eq!(
            CommandMapper::map_line("project yz", STEP),
            Ok(Some(ViewerAction::Project(ProjectionPlane::Yz)))
        );
    }

    #[test]
    fn test_project_off() {
        assert_eq!(
            CommandMapper::map_line("project off", STEP),
            Ok(Some(ViewerAction::ClearProjection))
        );
        assert_eq!(
            CommandMapper::map_line("project none", STEP),
            Ok(Some(ViewerAction::ClearProjection))
        );
    }

    #[test]
    fn test_project_unknown_plane() {
        assert_eq!(
            CommandMapper::map_line("project xw", STEP),
            Err(CommandError::UnknownPlane("xw".to_string()))
        );
    }

    #[test]
    fn test_simple_verbs() {
        assert_eq!(CommandMapper::map_line("reset", STEP), Ok(Some(ViewerAction::Reset)));
        assert_eq!(CommandMapper::map_line("show", STEP), Ok(Some(ViewerAction::Show)));
        assert_eq!(CommandMapper::map_line("views", STEP), Ok(Some(ViewerAction::Views)));
        assert_eq!(CommandMapper::map_line("help", STEP), Ok(Some(ViewerAction::Help)));
    }

    #[test]
    fn test_quit_aliases() {
        for line in ["quit", "exit", "q"] {
            assert_eq!(CommandMapper::map_line(line, STEP), Ok(Some(ViewerAction::Quit)));
        }
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            CommandMapper::map_line("rotate 45", STEP),
            Err(CommandError::UnknownCommand("rotate".to_string()))
        );
    }
}
