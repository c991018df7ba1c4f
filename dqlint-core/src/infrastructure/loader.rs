// dqlint-core/src/infrastructure/loader.rs

use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::infrastructure::error::InfrastructureError;

/// Object-store schemes we recognize but never fetch.
const REMOTE_SCHEMES: [&str; 2] = ["gs://", "s3://"];

/// Load a check configuration document from a local path.
///
/// YAML documents are parsed into the same tree as JSON ones, so everything
/// downstream is format-independent.
#[instrument]
pub fn load_document(path: &Path) -> Result<Value, InfrastructureError> {
    let raw_path = path.to_string_lossy();

    if let Some(scheme) = REMOTE_SCHEMES
        .iter()
        .find(|scheme| raw_path.starts_with(**scheme))
    {
        return Err(InfrastructureError::UnsupportedScheme {
            scheme: scheme.trim_end_matches("://").to_string(),
            path: raw_path.into_owned(),
        });
    }

    if !path.exists() {
        return Err(InfrastructureError::DocumentNotFound(raw_path.into_owned()));
    }

    info!(path = %raw_path, "Loading check configuration");
    let content = fs::read_to_string(path)?;

    let document = if is_yaml(path) {
        debug!("Parsing document as YAML");
        serde_yaml::from_str(&content)?
    } else {
        debug!("Parsing document as JSON");
        serde_json::from_str(&content)?
    };

    Ok(document)
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml")
    )
}
