//! Study schema definitions.
//!
//! Every section defaults to the canonical bracket example, so a YAML file
//! only needs the keys it changes.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Study {
    pub version: u32,
    pub project: ProjectDef,
    pub geometry: GeometryDef,
    pub simulation: SimulationDef,
    pub mesh: MeshDef,
    pub run: RunDef,
    pub polling: PollingDef,
}

impl Default for Study {
    fn default() -> Self {
        Self {
            version: crate::validate::LATEST_VERSION,
            project: ProjectDef::default(),
            geometry: GeometryDef::default(),
            simulation: SimulationDef::default(),
            mesh: MeshDef::default(),
            run: RunDef::default(),
            polling: PollingDef::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProjectDef {
    pub name: String,
    pub description: String,
    pub measurement_system: String,
}

impl Default for ProjectDef {
    fn default() -> Self {
        Self {
            name: "Harmonic Response Example".to_string(),
            description: "Harmonic response analysis example".to_string(),
            measurement_system: "SI".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeometryDef {
    pub name: String,
    pub path: PathBuf,
    pub format: String,
    pub input_unit: String,
    pub facet_split: bool,
    pub sewing: bool,
    pub improve: bool,
}

impl Default for GeometryDef {
    fn default() -> Self {
        Self {
            name: "Bracket".to_string(),
            path: PathBuf::from("./fixtures/bracket-1.step"),
            format: "STEP".to_string(),
            input_unit: "m".to_string(),
            facet_split: false,
            sewing: false,
            improve: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationDef {
    pub name: String,
    pub global_damping: bool,
    pub material: MaterialDef,
    pub fixed_supports: Vec<FixedSupportDef>,
    pub force_loads: Vec<ForceLoadDef>,
    pub modal: ModalDef,
    pub frequencies: FrequencyRangeDef,
    /// `-1` lets the service pick.
    pub num_processors: i32,
    pub max_run_time_s: f64,
}

impl Default for SimulationDef {
    fn default() -> Self {
        Self {
            name: "Harmonic Response".to_string(),
            global_damping: false,
            material: MaterialDef::default(),
            fixed_supports: vec![FixedSupportDef {
                name: "Fixed Support".to_string(),
                entities: ["B1_TE42", "B1_TE70", "B1_TE98", "B1_TE378"]
                    .map(String::from)
                    .to_vec(),
            }],
            force_loads: vec![ForceLoadDef {
                name: "Force".to_string(),
                force_n: [0.0, 0.0, -1000.0],
                entities: ["B1_TE150", "B1_TE153"].map(String::from).to_vec(),
            }],
            modal: ModalDef::default(),
            frequencies: FrequencyRangeDef::default(),
            num_processors: -1,
            max_run_time_s: 18000.0,
        }
    }
}

/// Linear elastic isotropic material assigned to the first body region.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MaterialDef {
    pub name: String,
    pub youngs_modulus_pa: f64,
    pub poissons_ratio: f64,
    pub density_kg_m3: f64,
}

impl Default for MaterialDef {
    fn default() -> Self {
        Self {
            name: "Steel".to_string(),
            youngs_modulus_pa: 200e9,
            poissons_ratio: 0.3,
            density_kg_m3: 7850.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FixedSupportDef {
    pub name: String,
    pub entities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForceLoadDef {
    pub name: String,
    pub force_n: [f64; 3],
    pub entities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ModalDef {
    pub number_of_modes: u32,
    pub prec_shift: f64,
    pub max_iter_shift: u32,
    pub threshold_frequency: f64,
    pub eigen_threshold: f64,
    pub eigen_precision_shift: f64,
}

impl Default for ModalDef {
    fn default() -> Self {
        Self {
            number_of_modes: 10,
            prec_shift: 0.05,
            max_iter_shift: 3,
            threshold_frequency: 0.01,
            eigen_threshold: 1e-6,
            eigen_precision_shift: 0.05,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FrequencyRangeDef {
    pub start_hz: f64,
    pub end_hz: f64,
}

impl Default for FrequencyRangeDef {
    fn default() -> Self {
        Self {
            start_hz: 10.0,
            end_hz: 1000.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MeshDef {
    pub name: String,
    /// Automatic sizing fineness, 1 (coarse) to 10 (fine).
    pub fineness: u32,
}

impl Default for MeshDef {
    fn default() -> Self {
        Self {
            name: "Mesh".to_string(),
            fineness: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RunDef {
    pub name: String,
}

impl Default for RunDef {
    fn default() -> Self {
        Self {
            name: "Run 1".to_string(),
        }
    }
}

/// Fixed poll intervals, in seconds, for each remote job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PollingDef {
    pub import_interval_s: u64,
    pub mesh_interval_s: u64,
    pub run_interval_s: u64,
}

impl Default for PollingDef {
    fn default() -> Self {
        Self {
            import_interval_s: 5,
            mesh_interval_s: 30,
            run_interval_s: 60,
        }
    }
}
