use hr_api::{JobStatus, SimulationRun};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStage {
    CreatingProject,
    UploadingGeometry,
    ImportingGeometry,
    SettingUpSimulation,
    CreatingMesh,
    Meshing,
    RunningSimulation,
    Completed,
}

impl WorkflowStage {
    /// Console line announcing the stage.
    pub fn label(self) -> &'static str {
        match self {
            WorkflowStage::CreatingProject => "Creating project...",
            WorkflowStage::UploadingGeometry => "Uploading geometry...",
            WorkflowStage::ImportingGeometry => "Importing geometry...",
            WorkflowStage::SettingUpSimulation => "Setting up simulation...",
            WorkflowStage::CreatingMesh => "Creating mesh...",
            WorkflowStage::Meshing => "Meshing...",
            WorkflowStage::RunningSimulation => "Running simulation...",
            WorkflowStage::Completed => "Simulation complete!",
        }
    }
}

/// Snapshot of one simulation run poll.
#[derive(Debug, Clone, PartialEq)]
pub struct RunProgress {
    pub status: Option<JobStatus>,
    /// 0..=1; a missing server value is reported as 0.
    pub fraction_complete: f64,
}

impl RunProgress {
    pub fn from_run(run: &SimulationRun) -> Self {
        Self {
            status: run.status.clone(),
            fraction_complete: run.progress.unwrap_or(0.0),
        }
    }

    /// Whole percent, ties to even.
    pub fn percent(&self) -> f64 {
        (self.fraction_complete * 100.0).round_ties_even()
    }

    /// `Status: <STATUS> - Progress: <percentage>%`, with `None` for a
    /// missing status.
    pub fn status_line(&self) -> String {
        let status = self.status.as_ref().map_or("None", JobStatus::as_str);
        format!("Status: {} - Progress: {:.0}%", status, self.percent())
    }
}

#[derive(Debug, Clone)]
pub struct WorkflowEvent {
    pub stage: WorkflowStage,
    pub elapsed_wall_s: f64,
    pub message: Option<String>,
    pub run: Option<RunProgress>,
}

impl WorkflowEvent {
    pub fn stage(stage: WorkflowStage, elapsed_wall_s: f64, message: Option<String>) -> Self {
        Self {
            stage,
            elapsed_wall_s,
            message,
            run: None,
        }
    }
}
