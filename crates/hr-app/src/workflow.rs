//! End-to-end harmonic response workflow.
//!
//! Project → upload → import → body lookup → simulation → mesh → attach mesh
//! → run. Every step blocks until the previous one has produced the ID it
//! needs.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use hr_api::{JobStatus, SimscaleApi};
use hr_study::Study;

use crate::error::{AppError, AppResult};
use crate::poll::{Polled, Sleeper, poll_until_terminal};
use crate::progress::{RunProgress, WorkflowEvent, WorkflowStage};

/// Used when the imported geometry reports no region mappings.
pub const DEFAULT_BODY_NAME: &str = "region1";

pub const WORKBENCH_URL: &str = "https://www.simscale.com/workbench/project";

pub fn results_url(project_id: &str) -> String {
    format!("{WORKBENCH_URL}/{project_id}")
}

/// Where the geometry bytes come from.
pub enum GeometrySource {
    File(PathBuf),
    Bytes(Vec<u8>),
}

impl GeometrySource {
    fn read(self) -> AppResult<Vec<u8>> {
        match self {
            GeometrySource::File(path) => {
                std::fs::read(&path).map_err(|source| AppError::GeometryFileRead { path, source })
            }
            GeometrySource::Bytes(bytes) => Ok(bytes),
        }
    }
}

/// Remote IDs and terminal statuses collected along the way.
#[derive(Debug, Clone)]
pub struct WorkflowOutcome {
    pub project_id: String,
    pub storage_id: String,
    pub geometry_id: String,
    pub body_name: String,
    pub simulation_id: String,
    pub mesh_operation_id: String,
    pub mesh_id: Option<String>,
    pub run_id: String,
    pub import_status: JobStatus,
    pub mesh_status: Option<JobStatus>,
    pub run_status: Option<JobStatus>,
    pub results_url: String,
}

/// Request to execute the workflow.
pub struct WorkflowRequest<'a> {
    pub study: &'a Study,
    pub geometry: GeometrySource,
}

impl<'a> WorkflowRequest<'a> {
    /// Upload the file named by the study.
    pub fn from_study(study: &'a Study) -> Self {
        Self {
            study,
            geometry: GeometrySource::File(study.geometry.path.clone()),
        }
    }
}

struct Progress<'cb> {
    cb: Option<&'cb mut dyn FnMut(WorkflowEvent)>,
    started: Instant,
}

impl Progress<'_> {
    fn stage(&mut self, stage: WorkflowStage) {
        tracing::info!(stage = ?stage, "{}", stage.label());
        if let Some(cb) = self.cb.as_deref_mut() {
            cb(WorkflowEvent::stage(
                stage,
                self.started.elapsed().as_secs_f64(),
                Some(stage.label().to_string()),
            ));
        }
    }

    fn run(&mut self, progress: RunProgress) {
        tracing::debug!(line = %progress.status_line(), "run poll");
        if let Some(cb) = self.cb.as_deref_mut() {
            cb(WorkflowEvent {
                stage: WorkflowStage::RunningSimulation,
                elapsed_wall_s: self.started.elapsed().as_secs_f64(),
                message: Some(progress.status_line()),
                run: Some(progress),
            });
        }
    }
}

fn note_terminal<T: Polled>(what: &str, id: &str, resource: &T) {
    match resource.job_status() {
        Some(JobStatus::Failed) => tracing::warn!(id, "{what} FAILED, continuing"),
        Some(status) => tracing::info!(id, %status, "{what} done"),
        None => {}
    }
}

fn require_id(id: Option<String>, what: &str) -> AppResult<String> {
    id.ok_or_else(|| AppError::Response(format!("{what} response carried no ID")))
}

/// First region name of the geometry, or [`DEFAULT_BODY_NAME`].
pub fn resolve_body_name(
    api: &dyn SimscaleApi,
    project_id: &str,
    geometry_id: &str,
) -> AppResult<String> {
    let mappings = api.get_geometry_mappings(project_id, geometry_id, "region", 1)?;
    Ok(mappings
        .first_name()
        .unwrap_or(DEFAULT_BODY_NAME)
        .to_string())
}

/// Run the whole pipeline.
pub fn run_workflow(
    api: &dyn SimscaleApi,
    request: WorkflowRequest<'_>,
    sleeper: &mut dyn Sleeper,
) -> AppResult<WorkflowOutcome> {
    run_workflow_with_progress(api, request, sleeper, None)
}

/// Run the whole pipeline and stream stage and run-poll events.
pub fn run_workflow_with_progress(
    api: &dyn SimscaleApi,
    request: WorkflowRequest<'_>,
    sleeper: &mut dyn Sleeper,
    progress_cb: Option<&mut dyn FnMut(WorkflowEvent)>,
) -> AppResult<WorkflowOutcome> {
    let WorkflowRequest { study, geometry } = request;
    let polling = &study.polling;
    let mut progress = Progress {
        cb: progress_cb,
        started: Instant::now(),
    };

    progress.stage(WorkflowStage::CreatingProject);
    let project = api.create_project(&study.project())?;
    let project_id = require_id(project.project_id, "project")?;
    tracing::info!(%project_id, "project created");

    progress.stage(WorkflowStage::UploadingGeometry);
    let storage = api.create_storage()?;
    api.upload(&storage.url, geometry.read()?)?;

    let import = api.import_geometry(
        &project_id,
        &study.geometry_import_request(&storage.storage_id),
    )?;
    progress.stage(WorkflowStage::ImportingGeometry);
    let import_id = import.geometry_import_id.clone();
    let import = poll_until_terminal(
        sleeper,
        Duration::from_secs(polling.import_interval_s),
        Some(import),
        || Ok(api.get_geometry_import(&project_id, &import_id)?),
        |_| {},
    )?;
    note_terminal("geometry import", &import_id, &import);
    let geometry_id = require_id(import.geometry_id, "geometry import")?;

    let body_name = resolve_body_name(api, &project_id, &geometry_id)?;
    tracing::info!(%geometry_id, %body_name, "geometry resolved");

    progress.stage(WorkflowStage::SettingUpSimulation);
    let simulation = api.create_simulation(
        &project_id,
        &study.simulation_spec(&geometry_id, &body_name)?,
    )?;
    let simulation_id = require_id(simulation.simulation_id, "simulation")?;

    progress.stage(WorkflowStage::CreatingMesh);
    let mesh_op = api.create_mesh_operation(&project_id, &study.mesh_operation(&geometry_id)?)?;
    let mesh_operation_id = require_id(mesh_op.mesh_operation_id, "mesh operation")?;
    api.start_mesh_operation(&project_id, &mesh_operation_id, &simulation_id)?;

    progress.stage(WorkflowStage::Meshing);
    let mesh_op = poll_until_terminal(
        sleeper,
        Duration::from_secs(polling.mesh_interval_s),
        None,
        || Ok(api.get_mesh_operation(&project_id, &mesh_operation_id)?),
        |_| {},
    )?;
    note_terminal("mesh operation", &mesh_operation_id, &mesh_op);

    attach_mesh(api, &project_id, &simulation_id, mesh_op.mesh_id.clone())?;

    progress.stage(WorkflowStage::RunningSimulation);
    let run = api.create_simulation_run(&project_id, &simulation_id, &study.simulation_run())?;
    let run_id = require_id(run.run_id, "simulation run")?;
    api.start_simulation_run(&project_id, &simulation_id, &run_id)?;

    let run = poll_until_terminal(
        sleeper,
        Duration::from_secs(polling.run_interval_s),
        None,
        || Ok(api.get_simulation_run(&project_id, &simulation_id, &run_id)?),
        |run| progress.run(RunProgress::from_run(run)),
    )?;
    note_terminal("simulation run", &run_id, &run);

    progress.stage(WorkflowStage::Completed);
    Ok(WorkflowOutcome {
        results_url: results_url(&project_id),
        project_id,
        storage_id: storage.storage_id,
        geometry_id,
        body_name,
        simulation_id,
        mesh_operation_id,
        mesh_id: mesh_op.mesh_id,
        run_id,
        import_status: import.status,
        mesh_status: mesh_op.status,
        run_status: run.status,
    })
}

/// Fetch the simulation, set its mesh, and write it back.
pub fn attach_mesh(
    api: &dyn SimscaleApi,
    project_id: &str,
    simulation_id: &str,
    mesh_id: Option<String>,
) -> AppResult<()> {
    let mut spec = api.get_simulation(project_id, simulation_id)?;
    spec.mesh_id = mesh_id;
    api.update_simulation(project_id, simulation_id, &spec)?;
    tracing::info!(simulation_id, mesh_id = ?spec.mesh_id, "mesh attached");
    Ok(())
}
