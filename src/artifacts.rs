use ethers::{abi::Abi, types::Bytes};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Contract build artifact as emitted under `build/contracts/` by the
/// standard dapp toolchains.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    pub contract_name: String,
    pub abi: Abi,
    #[serde(default)]
    pub bytecode: Option<Bytes>,
    #[serde(default)]
    pub deployed_bytecode: Option<Bytes>,
}

#[derive(thiserror::Error, Debug)]
pub enum ArtifactError {
    #[error("Could not read artifact at {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed artifact at {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Path of the build artifact for `contract` inside the installed
/// `package`.
pub fn artifact_path(project_root: &Path, package: &str, contract: &str) -> PathBuf {
    project_root
        .join("node_modules")
        .join(package)
        .join("build")
        .join("contracts")
        .join(format!("{contract}.json"))
}

/// Loads and parses the build artifact for `contract` from `package`.
pub fn load_artifact(
    project_root: &Path,
    package: &str,
    contract: &str,
) -> Result<ContractArtifact, ArtifactError> {
    let path = artifact_path(project_root, package, contract);
    let raw = std::fs::read_to_string(&path).map_err(|source| ArtifactError::ReadError {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ArtifactError::ParseError { path, source })
}
