use std::fmt;
use std::io;

#[derive(Debug)]
pub enum InputError {
    /// Input ended before all coefficients were read.
    Missing { expected: usize, found: usize },
    NotANumber { name: &'static str, token: String },
    /// Parsed, but `inf`/`NaN`.
    NotFinite { name: &'static str, token: String },
    Io(io::Error),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Missing { expected, found } => {
                write!(f, "invalid input: expected {} coefficients, got {}", expected, found)
            }
            InputError::NotANumber { name, token } => {
                write!(f, "invalid input: coefficient {} is not a number: '{}'", name, token)
            }
            InputError::NotFinite { name, token } => {
                write!(f, "invalid input: coefficient {} must be finite, got '{}'", name, token)
            }
            InputError::Io(err) => write!(f, "invalid input: read failed: {}", err),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        InputError::Io(err)
    }
}
