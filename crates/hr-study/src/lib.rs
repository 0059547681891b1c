//! hr-study: the study file format, defaults, and validation.

pub mod schema;
pub mod validate;
pub mod wire;

pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, validate_study};

pub type StudyResult<T> = Result<T, StudyError>;

#[derive(thiserror::Error, Debug)]
pub enum StudyError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub fn load_yaml(path: &std::path::Path) -> StudyResult<Study> {
    let content = std::fs::read_to_string(path)?;
    let study: Study = serde_yaml::from_str(&content)?;
    validate_study(&study)?;
    Ok(study)
}

pub fn save_yaml(path: &std::path::Path, study: &Study) -> StudyResult<()> {
    validate_study(study)?;
    let content = to_yaml(study)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn to_yaml(study: &Study) -> StudyResult<String> {
    Ok(serde_yaml::to_string(study)?)
}
