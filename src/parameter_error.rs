//! Error handling for manipulator description loading

use std::io;
use crate::manipulator_error::ManipulatorError;

/// Unified error to report failures while reading the manipulator from YAML.
#[derive(Debug)]
pub enum ParameterError {
    IoError(io::Error),
    ParseError(String),
    /// The description is well formed but the manipulator rejected a link or setting.
    Manipulator(ManipulatorError),
}

impl std::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            ParameterError::IoError(ref err) =>
                write!(f, "IO Error: {}", err),
            ParameterError::ParseError(ref msg) =>
                write!(f, "Parse Error: {}", msg),
            ParameterError::Manipulator(ref err) =>
                write!(f, "Manipulator Error: {}", err),
        }
    }
}

impl std::error::Error for ParameterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParameterError::IoError(err) => Some(err),
            ParameterError::Manipulator(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ParameterError {
    fn from(err: io::Error) -> Self {
        ParameterError::IoError(err)
    }
}

impl From<ManipulatorError> for ParameterError {
    fn from(err: ManipulatorError) -> Self {
        ParameterError::Manipulator(err)
    }
}
