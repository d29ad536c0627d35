//! Built-in portfolio content and loading content from a JSON file.

mod builtin;

use std::path::Path;

use thiserror::Error;

use crate::models::Portfolio;

pub use builtin::builtin;

/// Errors raised while loading a content file.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse content file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid content: {0}")]
    Invalid(String),
}

/// Load content from `path`, or the built-in content when `path` is `None`.
pub fn load(path: Option<&Path>) -> Result<Portfolio, ContentError> {
    match path {
        Some(path) => from_file(path),
        None => Ok(builtin()),
    }
}

/// Read and validate a content file with the same shape as [`Portfolio`].
pub fn from_file(path: &Path) -> Result<Portfolio, ContentError> {
    let shown = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: shown.clone(),
        source,
    })?;
    let portfolio: Portfolio = serde_json::from_str(&raw).map_err(|source| ContentError::Parse {
        path: shown,
        source,
    })?;
    validate(&portfolio)?;
    tracing::debug!(
        "Loaded content for {} ({} projects)",
        portfolio.profile.name,
        portfolio.projects.len()
    );
    Ok(portfolio)
}

/// Check the invariants the views rely on.
pub fn validate(portfolio: &Portfolio) -> Result<(), ContentError> {
    if portfolio.profile.roles.is_empty() {
        return Err(ContentError::Invalid(
            "profile.roles must name at least one role".to_string(),
        ));
    }
    if portfolio.profile.roles.iter().any(|r| r.is_empty()) {
        return Err(ContentError::Invalid(
            "profile.roles must not contain empty titles".to_string(),
        ));
    }

    let mut seen = std::collections::HashSet::new();
    for project in &portfolio.projects {
        if !seen.insert(project.id) {
            return Err(ContentError::Invalid(format!(
                "duplicate project id {}",
                project.id
            )));
        }
    }

    Ok(())
}
