use std::{
    path::{Path, PathBuf},
    process::Stdio,
};
use tokio::{
    io::{AsyncBufReadExt, AsyncReadExt, BufReader},
    process::Command,
};

/// Package manager used to install project dependencies.
pub const PACKAGE_MANAGER_BIN: &str = "npm";

pub fn package_manager() -> &'static str {
    PACKAGE_MANAGER_BIN
}

#[derive(thiserror::Error, Debug)]
pub enum DepsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("{stderr}\n\nFailed to install dependencies. See above output.")]
    InstallFailed { stderr: String },
    #[error("Cannot find the {0} dependency. Has this module installed correctly?")]
    BinaryNotFound(String),
}

/// Runs `npm install` in `cwd`, feeding each non-empty stdout line to
/// `on_progress` while the install runs.
///
/// Stderr is captured and reported only if the install exits non-zero.
pub async fn install_deps<F>(cwd: &Path, mut on_progress: F) -> Result<(), DepsError>
where
    F: FnMut(&str),
{
    let mut child = Command::new(package_manager())
        .arg("install")
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();
    let mut stderr_buf = String::new();

    let progress = async {
        if let Some(out) = stdout {
            let mut lines = BufReader::new(out).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                if line.is_empty() {
                    continue;
                }
                on_progress(&line);
            }
        }
    };
    let capture = async {
        if let Some(mut err) = stderr {
            let _ = err.read_to_string(&mut stderr_buf).await;
        }
    };
    let (status, (), ()) = tokio::join!(child.wait(), progress, capture);

    if status?.success() {
        Ok(())
    } else {
        Err(DepsError::InstallFailed { stderr: stderr_buf })
    }
}

/// Locates an executable installed by a project dependency.
///
/// Candidate directories are checked in order, first existing path wins:
/// the project's own `node_modules/.bin`, then the two parent `.bin`
/// layouts produced by hoisted and scoped-package installs.
pub fn dependent_binary_path(project_root: &Path, binary_name: &str) -> Result<PathBuf, DepsError> {
    let candidates = [
        project_root.join("node_modules").join(".bin"),
        project_root.join("..").join(".bin"),
        project_root.join("..").join("..").join(".bin"),
    ];

    candidates
        .iter()
        .map(|dir| dir.join(binary_name))
        .find(|path| path.exists())
        .ok_or_else(|| DepsError::BinaryNotFound(binary_name.to_owned()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::{dependent_binary_path, install_deps, DepsError};
    use std::fs;

    #[test]
    fn local_bin_wins_over_hoisted_layouts() {
        let temp_dir = tempfile::tempdir().unwrap();
        let project_root = temp_dir.path().join("app");
        let local_bin = project_root.join("node_modules").join(".bin");
        let hoisted_bin = temp_dir.path().join(".bin");
        fs::create_dir_all(&local_bin).unwrap();
        fs::create_dir_all(&hoisted_bin).unwrap();
        fs::write(local_bin.join("solc"), "").unwrap();
        fs::write(hoisted_bin.join("solc"), "").unwrap();

        let path = dependent_binary_path(&project_root, "solc").unwrap();
        assert_eq!(path, local_bin.join("solc"));
    }

    #[test]
    fn falls_back_to_the_hoisted_bin_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let project_root = temp_dir.path().join("app");
        let hoisted_bin = temp_dir.path().join(".bin");
        fs::create_dir_all(&project_root).unwrap();
        fs::create_dir_all(&hoisted_bin).unwrap();
        fs::write(hoisted_bin.join("truffle"), "").unwrap();

        let path = dependent_binary_path(&project_root, "truffle").unwrap();
        assert_eq!(path, project_root.join("..").join(".bin").join("truffle"));
    }

    #[test]
    fn falls_back_to_the_scoped_package_bin_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let project_root = temp_dir.path().join("scope").join("app");
        let scoped_bin = temp_dir.path().join(".bin");
        fs::create_dir_all(&project_root).unwrap();
        fs::create_dir_all(&scoped_bin).unwrap();
        fs::write(scoped_bin.join("ganache"), "").unwrap();

        let path = dependent_binary_path(&project_root, "ganache").unwrap();
        assert_eq!(
            path,
            project_root
                .join("..")
                .join("..")
                .join(".bin")
                .join("ganache")
        );
    }

    #[test]
    fn missing_binary_is_a_descriptive_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = dependent_binary_path(temp_dir.path(), "solc");
        match result {
            Err(DepsError::BinaryNotFound(name)) => assert_eq!(name, "solc"),
            other => panic!("expected BinaryNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn install_in_a_missing_directory_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("gone");

        let mut progress = Vec::new();
        let result = install_deps(&missing, |line| progress.push(line.to_owned())).await;
        assert!(result.is_err());
        assert!(progress.is_empty());
    }
}
