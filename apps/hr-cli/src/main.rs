use clap::Parser;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use hr_api::HttpClient;
use hr_app::{
    AppResult, Credentials, ThreadSleeper, WorkflowEvent, WorkflowRequest, WorkflowStage,
    run_workflow_with_progress,
};
use hr_study::Study;

#[derive(Parser)]
#[command(name = "hr-cli")]
#[command(
    about = "Harmonic response runner - drive a SimScale harmonic analysis end to end",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Study YAML file (defaults to the built-in bracket example)
    #[arg(long)]
    study: Option<PathBuf>,

    /// Geometry file to upload, overriding the study
    #[arg(long)]
    geometry: Option<PathBuf>,

    /// REST base URL, overriding the public API
    #[arg(long)]
    api_url: Option<String>,

    /// Print the effective study as YAML and exit
    #[arg(long)]
    print_study: bool,
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.print_study {
        let study = load_study(cli.study.as_deref(), cli.geometry)?;
        print!("{}", hr_study::to_yaml(&study)?);
        return Ok(());
    }

    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(err) => {
            println!("ERROR: {err}");
            std::process::exit(1);
        }
    };

    let study = load_study(cli.study.as_deref(), cli.geometry)?;
    let client = HttpClient::new(credentials.client_config(cli.api_url.as_deref()))?;
    tracing::debug!(base_url = %client.config().base_url, "client ready");

    let mut on_event = |event: WorkflowEvent| {
        if let Err(err) = render_progress(&mut io::stdout().lock(), &event) {
            tracing::warn!(%err, "failed to write progress");
        }
    };
    let outcome = run_workflow_with_progress(
        &client,
        WorkflowRequest::from_study(&study),
        &mut ThreadSleeper,
        Some(&mut on_event),
    )?;

    if let Err(err) = render_completion(&mut io::stdout().lock(), &outcome.results_url) {
        tracing::warn!(%err, "failed to write results URL");
    }
    Ok(())
}

fn load_study(path: Option<&Path>, geometry: Option<PathBuf>) -> AppResult<Study> {
    let mut study = match path {
        Some(path) => hr_study::load_yaml(path)?,
        None => Study::default(),
    };
    if let Some(geometry) = geometry {
        study.geometry.path = geometry;
    }
    Ok(study)
}

fn render_progress(out: &mut impl Write, event: &WorkflowEvent) -> io::Result<()> {
    if let Some(run) = &event.run {
        return writeln!(out, "{}", run.status_line());
    }
    // The completion banner is printed with the results URL.
    if matches!(event.stage, WorkflowStage::Completed) {
        return Ok(());
    }
    match &event.message {
        Some(message) => writeln!(out, "{message}"),
        None => Ok(()),
    }
}

fn render_completion(out: &mut impl Write, results_url: &str) -> io::Result<()> {
    writeln!(out, "\n✓ Simulation complete!")?;
    writeln!(out, "View results at: {results_url}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hr_api::JobStatus;
    use hr_app::RunProgress;

    fn stage(stage: WorkflowStage) -> WorkflowEvent {
        WorkflowEvent::stage(stage, 0.0, Some(stage.label().to_string()))
    }

    fn run_poll(status: JobStatus, fraction: f64) -> WorkflowEvent {
        let progress = RunProgress {
            status: Some(status),
            fraction_complete: fraction,
        };
        WorkflowEvent {
            stage: WorkflowStage::RunningSimulation,
            elapsed_wall_s: 0.0,
            message: Some(progress.status_line()),
            run: Some(progress),
        }
    }

    #[test]
    fn console_output_for_a_full_run() {
        let events = [
            stage(WorkflowStage::CreatingProject),
            stage(WorkflowStage::UploadingGeometry),
            stage(WorkflowStage::ImportingGeometry),
            stage(WorkflowStage::SettingUpSimulation),
            stage(WorkflowStage::CreatingMesh),
            stage(WorkflowStage::Meshing),
            stage(WorkflowStage::RunningSimulation),
            run_poll(JobStatus::Running, 0.5),
            run_poll(JobStatus::Finished, 1.0),
            stage(WorkflowStage::Completed),
        ];

        let mut out = Vec::new();
        for event in &events {
            render_progress(&mut out, event).unwrap();
        }
        render_completion(&mut out, "https://www.simscale.com/workbench/project/proj-1").unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Creating project...\n\
             Uploading geometry...\n\
             Importing geometry...\n\
             Setting up simulation...\n\
             Creating mesh...\n\
             Meshing...\n\
             Running simulation...\n\
             Status: RUNNING - Progress: 50%\n\
             Status: FINISHED - Progress: 100%\n\
             \n\
             ✓ Simulation complete!\n\
             View results at: https://www.simscale.com/workbench/project/proj-1\n"
        );
    }

    #[test]
    fn events_without_message_print_nothing() {
        let mut out = Vec::new();
        render_progress(
            &mut out,
            &WorkflowEvent::stage(WorkflowStage::Meshing, 1.0, None),
        )
        .unwrap();
        assert!(out.is_empty());
    }
}
