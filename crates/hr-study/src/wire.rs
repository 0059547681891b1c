//! Translation of a [`Study`] into the request bodies the service accepts.

use hr_api::harmonic::{
    BoundaryCondition, CalculateFrequency, ComputingCore, Dimensional, DirectionalDependency,
    EigenModeVerification, EigenfrequencyScope, ExcitationFrequencies, Function, HarmonicAnalysis,
    HarmonicResponseControl, HarmonicSolutionMethod, LinearSolver, MaterialBehavior,
    ModalBaseControl, ModalSolver, SolidElementTechnology, SolidGlobalPhysics,
    SolidInitialConditions, SolidMaterial, SolidModel, SolidNumerics, SolidResultControl,
    SolidSimulationControl, TopologicalReference, VectorFunction,
};
use hr_api::{
    GeometryImportLocation, GeometryImportOptions, GeometryImportRequest, MeshModel, MeshOperation,
    MeshSizing, Project, SimulationRun, SimulationSpec,
};

use crate::schema::Study;
use crate::{StudyError, StudyResult};

impl Study {
    pub fn project(&self) -> Project {
        Project {
            project_id: None,
            name: self.project.name.clone(),
            description: self.project.description.clone(),
            measurement_system: self.project.measurement_system.clone(),
        }
    }

    pub fn geometry_import_request(&self, storage_id: &str) -> GeometryImportRequest {
        let geometry = &self.geometry;
        GeometryImportRequest {
            name: geometry.name.clone(),
            location: GeometryImportLocation {
                storage_id: storage_id.to_string(),
            },
            format: geometry.format.clone(),
            input_unit: geometry.input_unit.clone(),
            options: GeometryImportOptions {
                facet_split: geometry.facet_split,
                sewing: geometry.sewing,
                improve: geometry.improve,
            },
        }
    }

    /// Harmonic analysis with the material assigned to `body_name`.
    pub fn harmonic_model(&self, body_name: &str) -> HarmonicAnalysis {
        let sim = &self.simulation;
        let material = &sim.material;

        let materials = vec![SolidMaterial {
            name: material.name.clone(),
            material_behavior: MaterialBehavior::LinearElastic {
                directional_dependency: DirectionalDependency::Isotropic {
                    youngs_modulus: Dimensional::new(
                        Function::constant(material.youngs_modulus_pa),
                        "Pa",
                    ),
                    poissons_ratio: Function::constant(material.poissons_ratio),
                },
            },
            density: Dimensional::new(Function::constant(material.density_kg_m3), "kg/m³"),
            topological_reference: TopologicalReference::of([body_name]),
        }];

        let fixed = sim
            .fixed_supports
            .iter()
            .map(|bc| BoundaryCondition::FixedSupport {
                name: bc.name.clone(),
                topological_reference: TopologicalReference::of(bc.entities.iter().cloned()),
            });
        let loads = sim
            .force_loads
            .iter()
            .map(|bc| BoundaryCondition::ForceLoad {
                name: bc.name.clone(),
                force: Dimensional::new(VectorFunction::constant(bc.force_n), "N"),
                topological_reference: TopologicalReference::of(bc.entities.iter().cloned()),
            });
        let boundary_conditions = fixed.chain(loads).collect();

        let modal = &sim.modal;
        let numerics = SolidNumerics {
            harmonic_solution_method: HarmonicSolutionMethod::ModalBased,
            modal_base: ModalSolver {
                solver: LinearSolver::Mumps,
                solver_model: Some(serde_json::Map::new()),
                calculate_frequency: Some(CalculateFrequency {
                    prec_shift: modal.prec_shift,
                    max_iter_shift: modal.max_iter_shift,
                    threshold_frequency: modal.threshold_frequency,
                }),
                eigen_mode: Some(EigenModeVerification {
                    threshold: modal.eigen_threshold,
                    precision_shift: modal.eigen_precision_shift,
                }),
            },
            harmonic_response: ModalSolver::with_solver(LinearSolver::Mumps),
        };

        let simulation_control = SolidSimulationControl {
            modal_base: ModalBaseControl {
                eigenfrequency_scope: EigenfrequencyScope::FirstModes {
                    number_of_modes: modal.number_of_modes,
                },
            },
            harmonic_response: HarmonicResponseControl {
                excitation_frequencies: ExcitationFrequencies::List {
                    start_frequency: Dimensional::new(sim.frequencies.start_hz, "Hz"),
                    end_frequency: Dimensional::new(sim.frequencies.end_hz, "Hz"),
                },
            },
            processors: ComputingCore {
                num_of_processors: sim.num_processors,
            },
            max_run_time: Dimensional::new(sim.max_run_time_s, "s"),
        };

        HarmonicAnalysis {
            element_technology: SolidElementTechnology::default(),
            global_physics: SolidGlobalPhysics {
                enable_global_damping: sim.global_damping,
            },
            model: SolidModel::default(),
            materials,
            initial_conditions: SolidInitialConditions::default(),
            boundary_conditions,
            numerics,
            simulation_control,
            result_control: SolidResultControl::default(),
        }
    }

    pub fn simulation_spec(&self, geometry_id: &str, body_name: &str) -> StudyResult<SimulationSpec> {
        let model = self
            .harmonic_model(body_name)
            .to_json()
            .map_err(|e| StudyError::Serialization(e.to_string()))?;
        Ok(SimulationSpec {
            simulation_id: None,
            name: self.simulation.name.clone(),
            geometry_id: geometry_id.to_string(),
            mesh_id: None,
            model,
            extra: serde_json::Map::new(),
        })
    }

    pub fn mesh_model(&self) -> MeshModel {
        MeshModel::SimmetrixMeshingSolid {
            sizing: MeshSizing::Automatic {
                fineness: self.mesh.fineness,
            },
        }
    }

    pub fn mesh_operation(&self, geometry_id: &str) -> StudyResult<MeshOperation> {
        let model = serde_json::to_value(self.mesh_model())
            .map_err(|e| StudyError::Serialization(e.to_string()))?;
        Ok(MeshOperation {
            mesh_operation_id: None,
            name: self.mesh.name.clone(),
            geometry_id: geometry_id.to_string(),
            model,
            status: None,
            mesh_id: None,
        })
    }

    pub fn simulation_run(&self) -> SimulationRun {
        SimulationRun::named(self.run.name.clone())
    }
}
