//! Shared application service layer for the harmonic-response runner.
//!
//! Centralizes credential lookup, job polling, progress reporting, and the
//! end-to-end workflow so the CLI stays a thin shell.

pub mod credentials;
pub mod error;
pub mod poll;
pub mod progress;
pub mod workflow;

// Re-export key types for convenience
pub use credentials::{API_KEY_VAR, Credentials};
pub use error::{AppError, AppResult};
pub use poll::{Polled, Sleeper, ThreadSleeper, poll_until_terminal};
pub use progress::{RunProgress, WorkflowEvent, WorkflowStage};
pub use workflow::{
    DEFAULT_BODY_NAME, GeometrySource, WorkflowOutcome, WorkflowRequest, attach_mesh,
    resolve_body_name, results_url, run_workflow, run_workflow_with_progress,
};
