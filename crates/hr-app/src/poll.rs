//! Fixed-interval polling of remote jobs.
//!
//! No backoff and no timeout: a loop ends only when the job reports
//! FINISHED or FAILED, and both end it the same way.

use std::time::Duration;

use hr_api::{GeometryImport, JobStatus, MeshOperation, SimulationRun};

use crate::error::AppResult;

/// Blocks the caller between polls.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

/// Sleeps the current thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// A remote resource with a job status.
pub trait Polled {
    /// `None` when the server omitted the field; treated as still running.
    fn job_status(&self) -> Option<&JobStatus>;

    fn is_terminal(&self) -> bool {
        self.job_status().is_some_and(JobStatus::is_terminal)
    }
}

impl Polled for GeometryImport {
    fn job_status(&self) -> Option<&JobStatus> {
        Some(&self.status)
    }
}

impl Polled for MeshOperation {
    fn job_status(&self) -> Option<&JobStatus> {
        self.status.as_ref()
    }
}

impl Polled for SimulationRun {
    fn job_status(&self) -> Option<&JobStatus> {
        self.status.as_ref()
    }
}

/// Poll `fetch` every `interval` until the resource is terminal.
///
/// With `initial` set, that snapshot is checked before the first sleep and
/// `fetch` is only called after sleeping. Without it, `fetch` runs at once.
/// `observe` sees every snapshot, including the terminal one. Nothing is
/// fetched once a terminal snapshot has been observed.
pub fn poll_until_terminal<T, F, O>(
    sleeper: &mut dyn Sleeper,
    interval: Duration,
    initial: Option<T>,
    mut fetch: F,
    mut observe: O,
) -> AppResult<T>
where
    T: Polled,
    F: FnMut() -> AppResult<T>,
    O: FnMut(&T),
{
    let mut current = match initial {
        Some(snapshot) => snapshot,
        None => fetch()?,
    };
    loop {
        observe(&current);
        if current.is_terminal() {
            return Ok(current);
        }
        sleeper.sleep(interval);
        current = fetch()?;
    }
}
