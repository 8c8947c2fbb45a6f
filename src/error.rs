//! Errors for the fallible edges of pocket-calc.
//!
//! The calculator itself never fails; these cover label parsing, the
//! terminal, JSON output and log setup.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("unknown button label: {0:?}")]
    UnknownButton(String),

    #[error("unknown operation symbol: {0:?}")]
    UnknownOperation(String),

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("failed to serialize display: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no local data directory; pass --log-file explicitly")]
    NoDataDir,

    #[error("logging already initialized: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, CalcError>;
