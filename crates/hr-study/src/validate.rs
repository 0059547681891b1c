//! Study validation logic.

use crate::schema::Study;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Empty field: {field}")]
    Empty { field: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn require_name(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty {
            field: field.to_string(),
        });
    }
    Ok(())
}

fn require_positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid(field, value, "must be finite and positive"));
    }
    Ok(())
}

pub fn validate_study(study: &Study) -> Result<(), ValidationError> {
    if study.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: study.version,
        });
    }

    require_name("project.name", &study.project.name)?;
    require_name("geometry.name", &study.geometry.name)?;
    require_name("geometry.format", &study.geometry.format)?;
    if study.geometry.path.as_os_str().is_empty() {
        return Err(ValidationError::Empty {
            field: "geometry.path".to_string(),
        });
    }

    let sim = &study.simulation;
    require_name("simulation.name", &sim.name)?;
    require_name("simulation.material.name", &sim.material.name)?;
    require_positive(
        "simulation.material.youngs_modulus_pa",
        sim.material.youngs_modulus_pa,
    )?;
    require_positive("simulation.material.density_kg_m3", sim.material.density_kg_m3)?;
    let nu = sim.material.poissons_ratio;
    if !(nu > -1.0 && nu < 0.5) {
        return Err(invalid(
            "simulation.material.poissons_ratio",
            nu,
            "must lie in (-1, 0.5)",
        ));
    }

    for (i, support) in sim.fixed_supports.iter().enumerate() {
        require_name(&format!("simulation.fixed_supports[{i}].name"), &support.name)?;
        if support.entities.is_empty() {
            return Err(ValidationError::Empty {
                field: format!("simulation.fixed_supports[{i}].entities"),
            });
        }
    }
    for (i, load) in sim.force_loads.iter().enumerate() {
        require_name(&format!("simulation.force_loads[{i}].name"), &load.name)?;
        if load.entities.is_empty() {
            return Err(ValidationError::Empty {
                field: format!("simulation.force_loads[{i}].entities"),
            });
        }
        if load.force_n.iter().any(|c| !c.is_finite()) {
            return Err(invalid(
                &format!("simulation.force_loads[{i}].force_n"),
                format!("{:?}", load.force_n),
                "components must be finite",
            ));
        }
    }

    if sim.modal.number_of_modes == 0 {
        return Err(invalid(
            "simulation.modal.number_of_modes",
            0,
            "at least one mode is required",
        ));
    }

    let freq = &sim.frequencies;
    require_positive("simulation.frequencies.start_hz", freq.start_hz)?;
    require_positive("simulation.frequencies.end_hz", freq.end_hz)?;
    if freq.end_hz <= freq.start_hz {
        return Err(invalid(
            "simulation.frequencies.end_hz",
            freq.end_hz,
            "must exceed start_hz",
        ));
    }

    if sim.num_processors == 0 || sim.num_processors < -1 {
        return Err(invalid(
            "simulation.num_processors",
            sim.num_processors,
            "use -1 for automatic or a positive count",
        ));
    }
    require_positive("simulation.max_run_time_s", sim.max_run_time_s)?;

    require_name("mesh.name", &study.mesh.name)?;
    if !(1..=10).contains(&study.mesh.fineness) {
        return Err(invalid("mesh.fineness", study.mesh.fineness, "must be 1..=10"));
    }

    require_name("run.name", &study.run.name)?;

    let polling = &study.polling;
    for (field, value) in [
        ("polling.import_interval_s", polling.import_interval_s),
        ("polling.mesh_interval_s", polling.mesh_interval_s),
        ("polling.run_interval_s", polling.run_interval_s),
    ] {
        if value == 0 {
            return Err(invalid(field, value, "must be at least one second"));
        }
    }

    Ok(())
}
