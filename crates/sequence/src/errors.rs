use thiserror::Error;

/// Errors that can occur while emitting a sequence.
#[derive(Error, Debug)]
pub enum SequenceError {
    #[error("failed to write sequence output: {0}")]
    Io(#[from] std::io::Error),
}
