//
// Errors
//
use std::error;
use std::fmt;
use std::io;
use std::result;

/// Result alias used by the loading and export functions.
pub type Result<T> = result::Result<T, Error>;

/// Everything that can go wrong at the file boundary. The analysis itself
/// never fails; unknown words and empty stories are absorbed as defaults.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    /// A path given on the command line or to a loader does not exist.
    MissingPath(String),
    InvalidInput(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {err}"),
            Error::Csv(err) => write!(f, "CSV error: {err}"),
            Error::Json(err) => write!(f, "JSON error: {err}"),
            Error::MissingPath(path) => write!(f, "Path does not exist: {path}"),
            Error::InvalidInput(info) => write!(f, "Invalid input: {info}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Csv(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::MissingPath(_) | Error::InvalidInput(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::Csv(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::Json(err)
    }
}
