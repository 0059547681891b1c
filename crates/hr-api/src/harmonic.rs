//! Typed model tree for a harmonic-response structural analysis.
//!
//! Serializes to the JSON document the simulations endpoint expects under
//! `SimulationSpec::model`. Only the variants this tool sends are modelled.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename = "HARMONIC_ANALYSIS", rename_all = "camelCase")]
pub struct HarmonicAnalysis {
    pub element_technology: SolidElementTechnology,
    pub global_physics: SolidGlobalPhysics,
    pub model: SolidModel,
    pub materials: Vec<SolidMaterial>,
    pub initial_conditions: SolidInitialConditions,
    pub boundary_conditions: Vec<BoundaryCondition>,
    pub numerics: SolidNumerics,
    pub simulation_control: SolidSimulationControl,
    pub result_control: SolidResultControl,
}

impl HarmonicAnalysis {
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

// ---------------------------------------------------------------------------
// Scalar and vector functions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Function {
    #[serde(rename = "CONSTANT")]
    Constant { value: f64 },
}

impl Function {
    pub fn constant(value: f64) -> Self {
        Function::Constant { value }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum VectorFunction {
    #[serde(rename = "COMPONENT")]
    Component {
        x: Function,
        y: Function,
        z: Function,
    },
}

impl VectorFunction {
    pub fn constant(v: [f64; 3]) -> Self {
        VectorFunction::Component {
            x: Function::constant(v[0]),
            y: Function::constant(v[1]),
            z: Function::constant(v[2]),
        }
    }
}

/// A function value tagged with its physical unit string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dimensional<V> {
    pub value: V,
    pub unit: String,
}

impl<V> Dimensional<V> {
    pub fn new(value: V, unit: &str) -> Self {
        Self {
            value,
            unit: unit.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TopologicalReference {
    pub entities: Vec<String>,
}

impl TopologicalReference {
    pub fn of<I, S>(entities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entities: entities.into_iter().map(Into::into).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Physics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SolidElementTechnology {
    #[serde(rename = "elementTechnology3D")]
    pub element_technology_3d: ElementTechnology,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ElementTechnology {
    pub definition_method: ElementDefinitionMethod,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum ElementDefinitionMethod {
    #[serde(rename = "AUTOMATIC")]
    Automatic,
}

impl Default for SolidElementTechnology {
    fn default() -> Self {
        Self {
            element_technology_3d: ElementTechnology {
                definition_method: ElementDefinitionMethod::Automatic,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SolidGlobalPhysics {
    pub enable_global_damping: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SolidModel {}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SolidInitialConditions {}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SolidResultControl {}

// ---------------------------------------------------------------------------
// Materials
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SolidMaterial {
    pub name: String,
    pub material_behavior: MaterialBehavior,
    pub density: Dimensional<Function>,
    pub topological_reference: TopologicalReference,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum MaterialBehavior {
    #[serde(rename = "LINEAR_ELASTIC", rename_all = "camelCase")]
    LinearElastic {
        directional_dependency: DirectionalDependency,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum DirectionalDependency {
    #[serde(rename = "ISOTROPIC", rename_all = "camelCase")]
    Isotropic {
        youngs_modulus: Dimensional<Function>,
        poissons_ratio: Function,
    },
}

// ---------------------------------------------------------------------------
// Boundary conditions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum BoundaryCondition {
    #[serde(rename = "FIXED_SUPPORT", rename_all = "camelCase")]
    FixedSupport {
        name: String,
        topological_reference: TopologicalReference,
    },
    #[serde(rename = "FORCE_LOAD", rename_all = "camelCase")]
    ForceLoad {
        name: String,
        force: Dimensional<VectorFunction>,
        topological_reference: TopologicalReference,
    },
}

// ---------------------------------------------------------------------------
// Numerics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SolidNumerics {
    pub harmonic_solution_method: HarmonicSolutionMethod,
    pub modal_base: ModalSolver,
    pub harmonic_response: ModalSolver,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmonicSolutionMethod {
    ModalBased,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModalSolver {
    pub solver: LinearSolver,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solver_model: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculate_frequency: Option<CalculateFrequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eigen_mode: Option<EigenModeVerification>,
}

impl ModalSolver {
    pub fn with_solver(solver: LinearSolver) -> Self {
        Self {
            solver,
            solver_model: None,
            calculate_frequency: None,
            eigen_mode: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum LinearSolver {
    #[serde(rename = "MUMPS")]
    Mumps,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalculateFrequency {
    pub prec_shift: f64,
    pub max_iter_shift: u32,
    pub threshold_frequency: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EigenModeVerification {
    pub threshold: f64,
    pub precision_shift: f64,
}

// ---------------------------------------------------------------------------
// Simulation control
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SolidSimulationControl {
    pub modal_base: ModalBaseControl,
    pub harmonic_response: HarmonicResponseControl,
    pub processors: ComputingCore,
    pub max_run_time: Dimensional<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModalBaseControl {
    pub eigenfrequency_scope: EigenfrequencyScope,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum EigenfrequencyScope {
    #[serde(rename = "FIRSTMODE", rename_all = "camelCase")]
    FirstModes { number_of_modes: u32 },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HarmonicResponseControl {
    pub excitation_frequencies: ExcitationFrequencies,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum ExcitationFrequencies {
    #[serde(rename = "LIST_V20", rename_all = "camelCase")]
    List {
        start_frequency: Dimensional<f64>,
        end_frequency: Dimensional<f64>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComputingCore {
    /// `-1` lets the service pick.
    pub num_of_processors: i32,
}
