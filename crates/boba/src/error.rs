//! Fatal application errors.
//!
//! Only startup and event-loop failures end up here. Pane-level problems
//! (save failures, unknown commands, unreadable files) are reported on the
//! editor status line instead and never propagate.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("could not determine working directory: {0}")]
    WorkingDir(#[source] io::Error),
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
    #[error("terminal input closed")]
    InputClosed,
}
