use std::path::{Path, PathBuf};

/// Marker file that defines the root of a dapp project.
pub const PROJECT_MANIFEST: &str = "dapp.json";

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("{0} is not inside a dapp project (no dapp.json found in it or any parent directory)")]
    NotAProject(PathBuf),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Walks `start` and its ancestors and returns the first directory
/// containing a `dapp.json` manifest.
///
/// The result is not cached anywhere: resolve it once per invocation and
/// pass it to whatever needs it.
pub fn find_project_root(start: &Path) -> Result<PathBuf, ProjectError> {
    start
        .ancestors()
        .find(|dir| dir.join(PROJECT_MANIFEST).is_file())
        .map(Path::to_path_buf)
        .ok_or_else(|| ProjectError::NotAProject(start.to_path_buf()))
}

/// Same as [`find_project_root`], starting at the process working directory.
pub fn find_project_root_from_cwd() -> Result<PathBuf, ProjectError> {
    find_project_root(&std::env::current_dir()?)
}
