//! hr-api: SimScale REST surface used by the harmonic-response workflow.
//!
//! Contains:
//! - models (project, storage, geometry import, simulation, mesh, run)
//! - harmonic (typed harmonic-analysis model tree)
//! - status (job lifecycle states)
//! - api (the `SimscaleApi` trait)
//! - client (blocking HTTP implementation)

pub mod api;
pub mod client;
pub mod error;
pub mod harmonic;
pub mod models;
pub mod status;

pub use api::SimscaleApi;
pub use client::{API_KEY_HEADER, ClientConfig, DEFAULT_BASE_URL, HttpClient};
pub use error::{ApiError, ApiResult};
pub use models::*;
pub use status::JobStatus;
