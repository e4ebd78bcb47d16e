use crate::types::MarkerIndex;
use failure::Fail;

/// The Error enum containing all Errors that may occur when running markersplice
#[derive(Clone, Debug, Eq, PartialEq, Hash, Fail)]
pub enum Error {
    #[fail(display = "Failed to read/write the file! Error: {}", _0)]
    File(String),
    #[fail(display = "Failed to convert UTF-8 to a string! Error: {}", _0)]
    UTF8(String),
    #[fail(display = "Failed to parse the patch file! Error: {}", _0)]
    Config(String),
    #[fail(
        display = "Could not find start or end markers. Start index: {}, end index: {}",
        start, end
    )]
    MarkersNotFound { start: MarkerIndex, end: MarkerIndex },
    #[fail(
        display = "Start line {} comes after end line {}, refusing to splice",
        start, end
    )]
    MarkerOrder { start: usize, end: usize },
    #[fail(display = "Didn't provide enough info for action {}", _0)]
    TooLittleInfo(String),
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(e: std::string::FromUtf8Error) -> Self {
        Error::UTF8(e.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

impl From<tempfile::PersistError> for Error {
    fn from(e: tempfile::PersistError) -> Self {
        Error::File(e.error.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::File(e.to_string())
    }
}
