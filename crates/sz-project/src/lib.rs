//! sz-project: design file format, validation, evaluation and sweeps.

pub mod evaluate;
pub mod schema;
pub mod sweep;
pub mod validate;

pub use evaluate::{ArrayReport, BatteryReport, SiteReport, evaluate_project, evaluate_site};
pub use schema::*;
pub use sweep::{SweepDefinition, SweepParameter, SweepPoint, run_sweep};
pub use validate::{ValidationError, validate_project};

pub const LATEST_VERSION: u32 = 1;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Sizing error in site {site}: {source}")]
    Sizing {
        site: String,
        #[source]
        source: sz_core::SzError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<Project> {
    let content = std::fs::read_to_string(path)?;
    let project: Project = serde_yaml::from_str(&content)?;
    validate_project(&project)?;
    Ok(project)
}

pub fn save_yaml(path: &std::path::Path, project: &Project) -> ProjectResult<()> {
    validate_project(project)?;
    let content = serde_yaml::to_string(project)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<Project> {
    let content = std::fs::read_to_string(path)?;
    let project: Project = serde_json::from_str(&content)?;
    validate_project(&project)?;
    Ok(project)
}

pub fn save_json(path: &std::path::Path, project: &Project) -> ProjectResult<()> {
    validate_project(project)?;
    let content = serde_json::to_string_pretty(project)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Serialize evaluated reports as pretty JSON.
pub fn reports_to_json(reports: &[SiteReport]) -> ProjectResult<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}
