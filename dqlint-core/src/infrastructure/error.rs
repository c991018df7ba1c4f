// dqlint-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- REMOTE SOURCES (deliberately unsupported) ---
    #[error("Remote storage path '{path}' is not supported. Download the file locally first.")]
    #[diagnostic(
        code(dqlint::infra::remote),
        help("Object-store URIs ({scheme}://...) are rejected by design; validate a local copy.")
    )]
    UnsupportedScheme { scheme: String, path: String },

    #[error("File not found: {0}")]
    #[diagnostic(
        code(dqlint::infra::not_found),
        help("Check the path and the current working directory.")
    )]
    DocumentNotFound(String),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(dqlint::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- PARSING ---
    #[error("JSON Parsing Error: {0}")]
    #[diagnostic(
        code(dqlint::infra::json),
        help("Check your JSON syntax (brackets, commas, quoting).")
    )]
    JsonError(#[from] serde_json::Error),

    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(dqlint::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),
}
