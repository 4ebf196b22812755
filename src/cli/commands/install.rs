use crate::cli::commands::resolve_project_root;
use crate::deps;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub(crate) struct Install {
    #[clap(long, name = "PROJECT_PATH")]
    pub path: Option<PathBuf>,
}

pub(crate) async fn run(args: Install) -> eyre::Result<()> {
    let project_root = resolve_project_root(args.path)?;
    log::info!(
        "Installing dependencies in {root} with {bin}",
        root = project_root.display(),
        bin = deps::package_manager()
    );
    deps::install_deps(&project_root, |line| log::info!("{line}")).await?;
    log::info!("Dependencies installed");
    Ok(())
}
