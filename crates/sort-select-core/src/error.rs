use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    InvalidSelection = 1,
    SinkOpen = 2,
    Io = 3,
    Config = 4,
}

#[derive(Debug, Error)]
pub enum SelectError {
    #[error("invalid choice {}", describe_input(.input))]
    InvalidSelection { input: Option<char> },

    #[error("failed to open output file {}: {source}", .path.display())]
    SinkOpen { path: PathBuf, source: io::Error },

    #[error("failed to write output file {}: {source}", .path.display())]
    SinkWrite { path: PathBuf, source: io::Error },

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl SelectError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::InvalidSelection { .. } => ExitCode::InvalidSelection,
            Self::SinkOpen { .. } => ExitCode::SinkOpen,
            Self::SinkWrite { .. } | Self::Io(_) => ExitCode::Io,
        }
    }
}

fn describe_input(input: &Option<char>) -> String {
    match input {
        Some(c) => format!("{c:?}"),
        None => "(empty input)".to_string(),
    }
}

pub type SelectResult<T> = Result<T, SelectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_values_are_stable() {
        assert_eq!(ExitCode::Success as u8, 0);
        assert_eq!(ExitCode::InvalidSelection as u8, 1);
        assert_eq!(ExitCode::SinkOpen as u8, 2);
        assert_eq!(ExitCode::Io as u8, 3);
        assert_eq!(ExitCode::Config as u8, 4);
    }

    #[test]
    fn invalid_selection_message_names_the_input() {
        let err = SelectError::InvalidSelection { input: Some('X') };
        assert_eq!(err.to_string(), "invalid choice 'X'");

        let err = SelectError::InvalidSelection { input: None };
        assert_eq!(err.to_string(), "invalid choice (empty input)");
    }

    #[test]
    fn sink_errors_map_to_distinct_exit_codes() {
        let open = SelectError::SinkOpen {
            path: PathBuf::from("data.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(open.exit_code(), ExitCode::SinkOpen);

        let write = SelectError::SinkWrite {
            path: PathBuf::from("data.txt"),
            source: io::Error::new(io::ErrorKind::Other, "disk full"),
        };
        assert_eq!(write.exit_code(), ExitCode::Io);
    }
}
