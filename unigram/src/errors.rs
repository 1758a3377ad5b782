//! Definition of errors.

use std::error::Error;
use std::fmt;

pub type Result<T, E = UnigramError> = std::result::Result<T, E>;

#[derive(Debug)]
pub enum UnigramError {
    InvalidArgument(InvalidArgumentError),
    InvalidPipeline(InvalidPipelineError),
}

impl UnigramError {
    /// Creates a new [`UnigramError::InvalidArgument`].
    pub fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }

    /// Creates a new [`UnigramError::InvalidPipeline`].
    pub fn invalid_pipeline<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidPipeline(InvalidPipelineError { msg: msg.into() })
    }
}

impl fmt::Display for UnigramError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidArgument(e) => e.fmt(f),
            Self::InvalidPipeline(e) => e.fmt(f),
        }
    }
}

impl Error for UnigramError {}

/// Error used when the argument is invalid.
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// Name of the argument.
    pub(crate) arg: &'static str,

    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

/// Error used when a pipeline is misconfigured or a stage cannot run.
#[derive(Debug)]
pub struct InvalidPipelineError {
    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidPipelineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidPipelineError: {}", self.msg)
    }
}

impl Error for InvalidPipelineError {}
