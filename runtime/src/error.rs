//! Error types for accelerator task execution.

use snafu::Snafu;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// The construction chain aborted. `stage` names the failing step for
    /// diagnostics; programmatically there is only "construction failed".
    #[snafu(display("task construction failed at {stage}: {reason}"))]
    Construction { stage: &'static str, reason: String },

    #[snafu(display("buffer creation failed for {count} elements: {reason}"))]
    BufferCreate { count: usize, reason: String },

    #[snafu(display("buffer write failed: {reason}"))]
    BufferWrite { reason: String },

    #[snafu(display("buffer read failed: {reason}"))]
    BufferRead { reason: String },

    #[snafu(display("size mismatch: buffer holds {expected} elements, host slice holds {actual}"))]
    SizeMismatch { expected: usize, actual: usize },

    /// Binding aborted at this slot; later arguments were left unbound.
    #[snafu(display("kernel argument {index} rejected: {reason}"))]
    ArgumentBinding { index: u32, reason: String },

    #[snafu(display("kernel enqueue failed: {reason}"))]
    Enqueue { reason: String },

    /// No discovered device name contains the pattern; callers usually fall
    /// back to CPU execution.
    #[snafu(display("no accelerator matches {pattern:?}"))]
    DeviceNotFound { pattern: String },

    #[snafu(display("invalid problem shape: {reason}"))]
    InvalidShape { reason: String },
}
