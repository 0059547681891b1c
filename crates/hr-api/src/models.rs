//! Wire models for the SimScale resources the workflow touches.
//!
//! Bodies are JSON with camelCase keys. Server-assigned fields are optional so
//! the same struct serves as request and response.

use serde::{Deserialize, Serialize};

use crate::status::JobStatus;

pub type ProjectId = String;
pub type StorageId = String;
pub type GeometryId = String;
pub type SimulationId = String;
pub type MeshOperationId = String;
pub type MeshId = String;
pub type RunId = String;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
    pub name: String,
    pub description: String,
    pub measurement_system: String,
}

/// Pre-signed upload slot in object storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Storage {
    pub storage_id: StorageId,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeometryImportRequest {
    pub name: String,
    pub location: GeometryImportLocation,
    pub format: String,
    pub input_unit: String,
    pub options: GeometryImportOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeometryImportLocation {
    pub storage_id: StorageId,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeometryImportOptions {
    pub facet_split: bool,
    pub sewing: bool,
    pub improve: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeometryImport {
    pub geometry_import_id: String,
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry_id: Option<GeometryId>,
}

/// Page of topological mappings of an imported geometry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeometryMappings {
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<Vec<GeometryMapping>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeometryMapping {
    pub name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl GeometryMappings {
    /// Name of the first mapping, if the page has any.
    pub fn first_name(&self) -> Option<&str> {
        self.embedded
            .as_deref()
            .and_then(|mappings| mappings.first())
            .map(|mapping| mapping.name.as_str())
    }
}

/// Simulation specification.
///
/// `model` is held as raw JSON so a spec fetched from the server can be sent
/// back unchanged apart from `meshId`. Unknown top-level keys survive the
/// round trip through `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulation_id: Option<SimulationId>,
    pub name: String,
    pub geometry_id: GeometryId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mesh_id: Option<MeshId>,
    pub model: serde_json::Value,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Mesh operation.
///
/// Like [`SimulationSpec`], `model` is raw JSON: polls only read `status`
/// and `meshId`, whatever sizing the server echoes back. Requests build it
/// from [`MeshModel`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MeshOperation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mesh_operation_id: Option<MeshOperationId>,
    pub name: String,
    pub geometry_id: GeometryId,
    #[serde(default)]
    pub model: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mesh_id: Option<MeshId>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum MeshModel {
    #[serde(rename = "SIMMETRIX_MESHING_SOLID")]
    SimmetrixMeshingSolid { sizing: MeshSizing },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum MeshSizing {
    #[serde(rename = "AUTOMATIC_V9")]
    Automatic { fineness: u32 },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRun {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_id: Option<RunId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
    /// Completion as a 0..=1 fraction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
}

impl SimulationRun {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            run_id: None,
            name: name.into(),
            status: None,
            progress: None,
        }
    }
}
