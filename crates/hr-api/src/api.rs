//! The surface of the SimScale REST API that the workflow consumes.

use crate::error::ApiResult;
use crate::models::{
    GeometryImport, GeometryImportRequest, GeometryMappings, MeshOperation, Project, SimulationRun,
    SimulationSpec, Storage,
};

/// Remote operations, one method per endpoint.
///
/// [`crate::HttpClient`] talks to the real service; tests drive the workflow
/// through scripted implementations.
pub trait SimscaleApi {
    fn create_project(&self, project: &Project) -> ApiResult<Project>;

    fn create_storage(&self) -> ApiResult<Storage>;

    /// PUT raw bytes to a pre-signed storage URL as `application/octet-stream`.
    fn upload(&self, url: &str, body: Vec<u8>) -> ApiResult<()>;

    fn import_geometry(
        &self,
        project_id: &str,
        request: &GeometryImportRequest,
    ) -> ApiResult<GeometryImport>;

    fn get_geometry_import(
        &self,
        project_id: &str,
        geometry_import_id: &str,
    ) -> ApiResult<GeometryImport>;

    /// Mappings of one topological class (e.g. `"region"`), at most `limit` entries.
    fn get_geometry_mappings(
        &self,
        project_id: &str,
        geometry_id: &str,
        class: &str,
        limit: u32,
    ) -> ApiResult<GeometryMappings>;

    fn create_simulation(&self, project_id: &str, spec: &SimulationSpec)
    -> ApiResult<SimulationSpec>;

    fn get_simulation(&self, project_id: &str, simulation_id: &str) -> ApiResult<SimulationSpec>;

    fn update_simulation(
        &self,
        project_id: &str,
        simulation_id: &str,
        spec: &SimulationSpec,
    ) -> ApiResult<()>;

    fn create_mesh_operation(
        &self,
        project_id: &str,
        operation: &MeshOperation,
    ) -> ApiResult<MeshOperation>;

    fn start_mesh_operation(
        &self,
        project_id: &str,
        mesh_operation_id: &str,
        simulation_id: &str,
    ) -> ApiResult<()>;

    fn get_mesh_operation(
        &self,
        project_id: &str,
        mesh_operation_id: &str,
    ) -> ApiResult<MeshOperation>;

    fn create_simulation_run(
        &self,
        project_id: &str,
        simulation_id: &str,
        run: &SimulationRun,
    ) -> ApiResult<SimulationRun>;

    fn start_simulation_run(
        &self,
        project_id: &str,
        simulation_id: &str,
        run_id: &str,
    ) -> ApiResult<()>;

    fn get_simulation_run(
        &self,
        project_id: &str,
        simulation_id: &str,
        run_id: &str,
    ) -> ApiResult<SimulationRun>;
}
