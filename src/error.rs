// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// No top-level surface exists to attach a toast to.
    NoSurfaceAvailable,
    /// The requested decay interval is not strictly positive.
    InvalidDecay(Duration),
    Io(String),
    Config(String),
}

impl Error {
    /// Returns true for failures that `show` swallows without a warning.
    ///
    /// A missing surface is an expected state (app in background, window not
    /// yet created); everything else indicates a caller or setup problem.
    #[must_use]
    pub fn is_silent(&self) -> bool {
        matches!(self, Error::NoSurfaceAvailable)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoSurfaceAvailable => write!(f, "No surface available to present a toast"),
            Error::InvalidDecay(d) => {
                write!(f, "Decay interval must be positive, got {:?}", d)
            }
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
