pub mod emit;
pub mod token_def;


use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use emit::{gen_header, gen_source, Variant};
pub use token_def::{parse_token_defs, parse_token_line, TokenDef, TokenTableDef};

#[derive(Debug, Error)]
pub enum GenError {
    #[error("failed to read token spec {}", path.display())]
    ReadSpec { path: PathBuf, source: io::Error },
    #[error("failed to write generated artifact {}", path.display())]
    WriteArtifact { path: PathBuf, source: io::Error },
}

/// Runs one full generation: reads the token specification, then rewrites the
/// artifacts wholesale (truncate semantics — no merging with previous output).
/// Passing a `source` path selects the extended variant; without it only the
/// minimal header is produced. Token names are not checked for uniqueness;
/// collisions in the derived names surface when the generated C is compiled.
pub fn generate(spec: &Path, header: &Path, source: Option<&Path>) -> Result<(), GenError> {
    let spec_text = fs::read_to_string(spec).map_err(|e| GenError::ReadSpec {
        path: spec.to_path_buf(),
        source: e,
    })?;
    let def = parse_token_defs(&spec_text);

    let variant = if source.is_some() {
        Variant::Extended
    } else {
        Variant::Minimal
    };
    write_artifact(header, &gen_header(&def, variant))?;

    if let Some(source_path) = source {
        let header_name = header
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| header.display().to_string());
        write_artifact(source_path, &gen_source(&def, &header_name))?;
    }
    Ok(())
}

fn write_artifact(path: &Path, contents: &str) -> Result<(), GenError> {
    fs::write(path, contents).map_err(|e| GenError::WriteArtifact {
        path: path.to_path_buf(),
        source: e,
    })
}
