//! Blocking HTTP implementation of [`SimscaleApi`].

use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::api::SimscaleApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    GeometryImport, GeometryImportRequest, GeometryMappings, MeshOperation, Project, SimulationRun,
    SimulationSpec, Storage,
};

pub const DEFAULT_BASE_URL: &str = "https://api.simscale.com/v0";
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Connection settings for [`HttpClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: String,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Join an endpoint path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

pub struct HttpClient {
    http: Client,
    config: ClientConfig,
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let http = Client::builder()
            .user_agent(concat!("hr-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> (RequestBuilder, String) {
        let url = self.config.endpoint(path);
        let builder = self
            .http
            .request(method, &url)
            .header(API_KEY_HEADER, &self.config.api_key);
        (builder, url)
    }

    fn send(&self, method: Method, builder: RequestBuilder, url: String) -> ApiResult<Response> {
        tracing::debug!(%method, %url, "request");
        let response = builder.send()?;
        check_status(method, url, response)
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        what: &'static str,
    ) -> ApiResult<T> {
        let (builder, url) = self.request(Method::GET, path);
        let response = self.send(Method::GET, builder.query(query), url)?;
        decode(response, what)
    }

    fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
        what: &'static str,
    ) -> ApiResult<T> {
        let (builder, url) = self.request(Method::POST, path);
        let builder = match body {
            Some(body) => builder.json(body),
            None => builder,
        };
        let response = self.send(Method::POST, builder, url)?;
        decode(response, what)
    }

    fn post_empty(&self, path: &str, query: &[(&str, String)]) -> ApiResult<()> {
        let (builder, url) = self.request(Method::POST, path);
        self.send(Method::POST, builder.query(query), url)?;
        Ok(())
    }

    fn put_json<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        let (builder, url) = self.request(Method::PUT, path);
        self.send(Method::PUT, builder.json(body), url)?;
        Ok(())
    }
}

fn check_status(method: Method, url: String, response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(ApiError::Status {
        method: method.to_string(),
        url,
        status: status.as_u16(),
        body,
    })
}

fn decode<T: DeserializeOwned>(response: Response, what: &'static str) -> ApiResult<T> {
    let text = response.text()?;
    serde_json::from_str(&text).map_err(|source| ApiError::Decode { what, source })
}

impl SimscaleApi for HttpClient {
    fn create_project(&self, project: &Project) -> ApiResult<Project> {
        self.post_json("projects", Some(project), "project")
    }

    fn create_storage(&self) -> ApiResult<Storage> {
        self.post_json::<(), _>("storage", None, "storage")
    }

    fn upload(&self, url: &str, body: Vec<u8>) -> ApiResult<()> {
        // Pre-signed URL: no API key, the signature is in the query string.
        tracing::debug!(%url, bytes = body.len(), "upload");
        let response = self
            .http
            .put(url)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(body)
            .send()?;
        check_status(Method::PUT, url.to_string(), response)?;
        Ok(())
    }

    fn import_geometry(
        &self,
        project_id: &str,
        request: &GeometryImportRequest,
    ) -> ApiResult<GeometryImport> {
        self.post_json(
            &format!("projects/{project_id}/geometryimports"),
            Some(request),
            "geometry import",
        )
    }

    fn get_geometry_import(
        &self,
        project_id: &str,
        geometry_import_id: &str,
    ) -> ApiResult<GeometryImport> {
        self.get_json(
            &format!("projects/{project_id}/geometryimports/{geometry_import_id}"),
            &[],
            "geometry import",
        )
    }

    fn get_geometry_mappings(
        &self,
        project_id: &str,
        geometry_id: &str,
        class: &str,
        limit: u32,
    ) -> ApiResult<GeometryMappings> {
        self.get_json(
            &format!("projects/{project_id}/geometries/{geometry_id}/mappings"),
            &[("_class", class.to_string()), ("limit", limit.to_string())],
            "geometry mappings",
        )
    }

    fn create_simulation(
        &self,
        project_id: &str,
        spec: &SimulationSpec,
    ) -> ApiResult<SimulationSpec> {
        self.post_json(
            &format!("projects/{project_id}/simulations"),
            Some(spec),
            "simulation",
        )
    }

    fn get_simulation(&self, project_id: &str, simulation_id: &str) -> ApiResult<SimulationSpec> {
        self.get_json(
            &format!("projects/{project_id}/simulations/{simulation_id}"),
            &[],
            "simulation",
        )
    }

    fn update_simulation(
        &self,
        project_id: &str,
        simulation_id: &str,
        spec: &SimulationSpec,
    ) -> ApiResult<()> {
        self.put_json(
            &format!("projects/{project_id}/simulations/{simulation_id}"),
            spec,
        )
    }

    fn create_mesh_operation(
        &self,
        project_id: &str,
        operation: &MeshOperation,
    ) -> ApiResult<MeshOperation> {
        self.post_json(
            &format!("projects/{project_id}/meshoperations"),
            Some(operation),
            "mesh operation",
        )
    }

    fn start_mesh_operation(
        &self,
        project_id: &str,
        mesh_operation_id: &str,
        simulation_id: &str,
    ) -> ApiResult<()> {
        self.post_empty(
            &format!("projects/{project_id}/meshoperations/{mesh_operation_id}/start"),
            &[("simulationId", simulation_id.to_string())],
        )
    }

    fn get_mesh_operation(
        &self,
        project_id: &str,
        mesh_operation_id: &str,
    ) -> ApiResult<MeshOperation> {
        self.get_json(
            &format!("projects/{project_id}/meshoperations/{mesh_operation_id}"),
            &[],
            "mesh operation",
        )
    }

    fn create_simulation_run(
        &self,
        project_id: &str,
        simulation_id: &str,
        run: &SimulationRun,
    ) -> ApiResult<SimulationRun> {
        self.post_json(
            &format!("projects/{project_id}/simulations/{simulation_id}/runs"),
            Some(run),
            "simulation run",
        )
    }

    fn start_simulation_run(
        &self,
        project_id: &str,
        simulation_id: &str,
        run_id: &str,
    ) -> ApiResult<()> {
        self.post_empty(
            &format!("projects/{project_id}/simulations/{simulation_id}/runs/{run_id}/start"),
            &[],
        )
    }

    fn get_simulation_run(
        &self,
        project_id: &str,
        simulation_id: &str,
        run_id: &str,
    ) -> ApiResult<SimulationRun> {
        self.get_json(
            &format!("projects/{project_id}/simulations/{simulation_id}/runs/{run_id}"),
            &[],
            "simulation run",
        )
    }
}
