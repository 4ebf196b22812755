use crate::project::{self, ProjectError};
use std::path::PathBuf;

pub(crate) mod gas_limit;
pub(crate) use gas_limit::GasLimit;

pub(crate) mod install;
pub(crate) use install::Install;

pub(crate) mod check_port;
pub(crate) use check_port::CheckPort;

pub(crate) mod artifact;
pub(crate) use artifact::Artifact;

pub(crate) mod bin_path;
pub(crate) use bin_path::BinPath;

// The root is resolved once per invocation and handed to the command, so
// nothing below this layer touches the process working directory.
pub(crate) fn resolve_project_root(path: Option<PathBuf>) -> Result<PathBuf, ProjectError> {
    match path {
        Some(path) => project::find_project_root(&path),
        None => project::find_project_root_from_cwd(),
    }
}
