use std::io;

use thiserror::Error;

/// Errors produced while rendering a run.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Writing to the report target or the spinner target failed.
    #[error("failed to write report output")]
    Io(#[from] io::Error),

    /// A lifecycle callback arrived while the reporter was not in a phase that accepts it.
    #[error("received {event} while the reporter was {phase}")]
    OutOfOrder {
        event: &'static str,
        phase: &'static str,
    },

    /// A host event could not be decoded.
    #[error("invalid host event on line {line}")]
    InvalidEvent {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}
