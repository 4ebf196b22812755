use crate::artifacts::load_artifact;
use crate::cli::commands::resolve_project_root;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub(crate) struct Artifact {
    #[clap(long, name = "PACKAGE_NAME")]
    pub package: String,
    #[clap(long, name = "CONTRACT_NAME")]
    pub contract: String,
    #[clap(long, name = "PROJECT_PATH")]
    pub path: Option<PathBuf>,
}

pub(crate) fn run(args: Artifact) -> eyre::Result<()> {
    let project_root = resolve_project_root(args.path)?;
    let artifact = load_artifact(&project_root, &args.package, &args.contract)?;
    log::info!("{artifact:#?}");
    Ok(())
}
