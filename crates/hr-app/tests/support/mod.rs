//! In-memory SimScale fake with scripted job statuses and a call log.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Duration;

use hr_api::{
    ApiError, ApiResult, GeometryImport, GeometryImportRequest, GeometryMapping, GeometryMappings,
    JobStatus, MeshOperation, Project, SimscaleApi, SimulationRun, SimulationSpec, Storage,
};
use hr_app::Sleeper;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateProject,
    CreateStorage,
    Upload { url: String, bytes: usize },
    ImportGeometry { storage_id: String },
    GetGeometryImport,
    GetGeometryMappings { class: String, limit: u32 },
    CreateSimulation { body_name: String },
    GetSimulation,
    UpdateSimulation { mesh_id: Option<String> },
    CreateMeshOperation,
    StartMeshOperation { simulation_id: String },
    GetMeshOperation,
    CreateSimulationRun,
    StartSimulationRun,
    GetSimulationRun,
}

pub struct ScriptedApi {
    pub import_statuses: RefCell<VecDeque<&'static str>>,
    pub mesh_statuses: RefCell<VecDeque<&'static str>>,
    pub run_polls: RefCell<VecDeque<(&'static str, Option<f64>)>>,
    pub region_names: Vec<String>,
    pub mesh_id: Option<String>,
    pub calls: RefCell<Vec<Call>>,
    pub created_spec: RefCell<Option<SimulationSpec>>,
    pub updated_spec: RefCell<Option<SimulationSpec>>,
}

impl ScriptedApi {
    pub fn new(
        import_statuses: &[&'static str],
        mesh_statuses: &[&'static str],
        run_polls: &[(&'static str, Option<f64>)],
    ) -> Self {
        Self {
            import_statuses: RefCell::new(import_statuses.iter().copied().collect()),
            mesh_statuses: RefCell::new(mesh_statuses.iter().copied().collect()),
            run_polls: RefCell::new(run_polls.iter().copied().collect()),
            region_names: vec!["solid_body_1".to_string()],
            mesh_id: Some("mesh-1".to_string()),
            calls: RefCell::new(Vec::new()),
            created_spec: RefCell::new(None),
            updated_spec: RefCell::new(None),
        }
    }

    /// Import finishes on submit, mesh and run on the first poll.
    pub fn happy() -> Self {
        Self::new(&["FINISHED"], &["FINISHED"], &[("FINISHED", Some(1.0))])
    }

    pub fn without_regions(mut self) -> Self {
        self.region_names.clear();
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.borrow().iter().filter(|c| *c == call).count()
    }

    pub fn position(&self, pred: impl Fn(&Call) -> bool) -> Option<usize> {
        self.calls.borrow().iter().position(pred)
    }

    fn log(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn next_import(&self) -> ApiResult<GeometryImport> {
        let status = self
            .import_statuses
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| exhausted("geometry import"))?;
        let status = JobStatus::from(status.to_string());
        Ok(GeometryImport {
            geometry_import_id: "imp-1".to_string(),
            geometry_id: (status == JobStatus::Finished).then(|| "geo-1".to_string()),
            status,
        })
    }
}

fn exhausted(what: &str) -> ApiError {
    ApiError::Status {
        method: "GET".to_string(),
        url: format!("scripted://{what}"),
        status: 599,
        body: "script exhausted: polled after terminal status".to_string(),
    }
}

fn sample_spec(id: &str) -> SimulationSpec {
    serde_json::from_value(serde_json::json!({
        "simulationId": id,
        "name": "Harmonic Response",
        "geometryId": "geo-1",
        "model": { "type": "HARMONIC_ANALYSIS" },
        "createdAt": "2024-01-01T00:00:00Z"
    }))
    .expect("sample spec")
}

impl SimscaleApi for ScriptedApi {
    fn create_project(&self, project: &Project) -> ApiResult<Project> {
        self.log(Call::CreateProject);
        Ok(Project {
            project_id: Some("proj-1".to_string()),
            ..project.clone()
        })
    }

    fn create_storage(&self) -> ApiResult<Storage> {
        self.log(Call::CreateStorage);
        Ok(Storage {
            storage_id: "st-1".to_string(),
            url: "https://storage.example/upload/st-1".to_string(),
        })
    }

    fn upload(&self, url: &str, body: Vec<u8>) -> ApiResult<()> {
        self.log(Call::Upload {
            url: url.to_string(),
            bytes: body.len(),
        });
        Ok(())
    }

    fn import_geometry(
        &self,
        _project_id: &str,
        request: &GeometryImportRequest,
    ) -> ApiResult<GeometryImport> {
        self.log(Call::ImportGeometry {
            storage_id: request.location.storage_id.clone(),
        });
        self.next_import()
    }

    fn get_geometry_import(&self, _project_id: &str, _id: &str) -> ApiResult<GeometryImport> {
        self.log(Call::GetGeometryImport);
        self.next_import()
    }

    fn get_geometry_mappings(
        &self,
        _project_id: &str,
        _geometry_id: &str,
        class: &str,
        limit: u32,
    ) -> ApiResult<GeometryMappings> {
        self.log(Call::GetGeometryMappings {
            class: class.to_string(),
            limit,
        });
        let embedded = if self.region_names.is_empty() {
            None
        } else {
            Some(
                self.region_names
                    .iter()
                    .map(|name| GeometryMapping {
                        name: name.clone(),
                        extra: Default::default(),
                    })
                    .collect(),
            )
        };
        Ok(GeometryMappings { embedded })
    }

    fn create_simulation(&self, _project_id: &str, spec: &SimulationSpec) -> ApiResult<SimulationSpec> {
        let body_name = spec.model["materials"][0]["topologicalReference"]["entities"][0]
            .as_str()
            .unwrap_or_default()
            .to_string();
        self.log(Call::CreateSimulation { body_name });
        *self.created_spec.borrow_mut() = Some(spec.clone());
        Ok(SimulationSpec {
            simulation_id: Some("sim-1".to_string()),
            ..spec.clone()
        })
    }

    fn get_simulation(&self, _project_id: &str, simulation_id: &str) -> ApiResult<SimulationSpec> {
        self.log(Call::GetSimulation);
        Ok(sample_spec(simulation_id))
    }

    fn update_simulation(
        &self,
        _project_id: &str,
        _simulation_id: &str,
        spec: &SimulationSpec,
    ) -> ApiResult<()> {
        self.log(Call::UpdateSimulation {
            mesh_id: spec.mesh_id.clone(),
        });
        *self.updated_spec.borrow_mut() = Some(spec.clone());
        Ok(())
    }

    fn create_mesh_operation(
        &self,
        _project_id: &str,
        operation: &MeshOperation,
    ) -> ApiResult<MeshOperation> {
        self.log(Call::CreateMeshOperation);
        Ok(MeshOperation {
            mesh_operation_id: Some("mop-1".to_string()),
            ..operation.clone()
        })
    }

    fn start_mesh_operation(
        &self,
        _project_id: &str,
        _mesh_operation_id: &str,
        simulation_id: &str,
    ) -> ApiResult<()> {
        self.log(Call::StartMeshOperation {
            simulation_id: simulation_id.to_string(),
        });
        Ok(())
    }

    fn get_mesh_operation(&self, _project_id: &str, id: &str) -> ApiResult<MeshOperation> {
        self.log(Call::GetMeshOperation);
        let status = self
            .mesh_statuses
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| exhausted("mesh operation"))?;
        let status = JobStatus::from(status.to_string());
        Ok(MeshOperation {
            mesh_operation_id: Some(id.to_string()),
            name: "Mesh".to_string(),
            geometry_id: "geo-1".to_string(),
            model: serde_json::json!({
                "type": "SIMMETRIX_MESHING_SOLID",
                "sizing": { "type": "AUTOMATIC_V9", "fineness": 5.0 }
            }),
            mesh_id: (status == JobStatus::Finished)
                .then(|| self.mesh_id.clone())
                .flatten(),
            status: Some(status),
        })
    }

    fn create_simulation_run(
        &self,
        _project_id: &str,
        _simulation_id: &str,
        run: &SimulationRun,
    ) -> ApiResult<SimulationRun> {
        self.log(Call::CreateSimulationRun);
        Ok(SimulationRun {
            run_id: Some("run-1".to_string()),
            ..run.clone()
        })
    }

    fn start_simulation_run(&self, _project_id: &str, _simulation_id: &str, _run_id: &str) -> ApiResult<()> {
        self.log(Call::StartSimulationRun);
        Ok(())
    }

    fn get_simulation_run(
        &self,
        _project_id: &str,
        _simulation_id: &str,
        run_id: &str,
    ) -> ApiResult<SimulationRun> {
        self.log(Call::GetSimulationRun);
        let (status, progress) = self
            .run_polls
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| exhausted("simulation run"))?;
        Ok(SimulationRun {
            run_id: Some(run_id.to_string()),
            name: "Run 1".to_string(),
            status: Some(JobStatus::from(status.to_string())),
            progress,
        })
    }
}

/// Records requested sleeps instead of blocking.
#[derive(Default)]
pub struct RecordingSleeper {
    pub sleeps: Vec<Duration>,
}

impl Sleeper for RecordingSleeper {
    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
    }
}
