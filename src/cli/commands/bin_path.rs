use crate::cli::commands::resolve_project_root;
use crate::deps::dependent_binary_path;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub(crate) struct BinPath {
    #[clap(name = "BINARY_NAME")]
    pub binary: String,
    #[clap(long, name = "PROJECT_PATH")]
    pub path: Option<PathBuf>,
}

pub(crate) fn run(args: BinPath) -> eyre::Result<()> {
    let project_root = resolve_project_root(args.path)?;
    let binary_path = dependent_binary_path(&project_root, &args.binary)?;
    log::info!("{}", binary_path.display());
    Ok(())
}
