//! Design file validation.
//!
//! Structural checks only; numeric domain errors surface when a site is
//! evaluated.

use crate::schema::{Project, SiteDef, TariffDef};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing section: {section} in site {site} ({reason})")]
    MissingSection {
        site: String,
        section: String,
        reason: String,
    },

    #[error("Invalid sweep: {reason}")]
    InvalidSweep { reason: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version == 0 || project.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    let mut site_ids = HashSet::new();
    for site in &project.sites {
        if !site_ids.insert(&site.id) {
            return Err(ValidationError::DuplicateId {
                id: site.id.clone(),
                context: "sites".to_string(),
            });
        }
        validate_site(site)?;
    }

    Ok(())
}

pub fn validate_site(site: &SiteDef) -> Result<(), ValidationError> {
    if site.id.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "site.id".to_string(),
            value: format!("{:?}", site.id),
            reason: "must not be empty".to_string(),
        });
    }

    if !site.has_sections() {
        return Err(ValidationError::MissingSection {
            site: site.id.clone(),
            section: "battery|array|yield_estimate|economics".to_string(),
            reason: "site has nothing to size".to_string(),
        });
    }

    if let Some(economics) = &site.economics {
        if site.yield_estimate.is_none() {
            return Err(ValidationError::MissingSection {
                site: site.id.clone(),
                section: "yield_estimate".to_string(),
                reason: "economics needs the monthly energy production".to_string(),
            });
        }
        if let TariffDef::Custom { .. } = economics.tariff {
            economics
                .tariff
                .schedule()
                .validate()
                .map_err(|e| ValidationError::InvalidValue {
                    field: format!("{}.economics.tariff", site.id),
                    value: "custom".to_string(),
                    reason: e.to_string(),
                })?;
        }
    }

    Ok(())
}
