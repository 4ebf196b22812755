pub(crate) mod commands;
use clap::{command, Args, Parser, Subcommand};
use commands::{
    artifact, bin_path, check_port, gas_limit, install, Artifact, BinPath, CheckPort, GasLimit,
    Install,
};

pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name="dapp-web3-cli", author, version=VERSION_STRING, about, long_about = None)]
struct DappWeb3 {
    #[command(subcommand)]
    command: DappWeb3Command,
    #[clap(flatten)]
    config: DappWeb3Config,
}

#[derive(Args)]
pub struct DappWeb3Config {
    #[clap(long, default_value = "127.0.0.1")]
    pub host: String,
    #[clap(short, long, default_value = "8545")]
    pub port: u16,
}

#[derive(Subcommand)]
enum DappWeb3Command {
    GasLimit(GasLimit),
    Install(Install),
    CheckPort(CheckPort),
    Artifact(Artifact),
    BinPath(BinPath),
}

pub async fn start() -> eyre::Result<()> {
    let DappWeb3 { command, config } = DappWeb3::parse();
    match command {
        DappWeb3Command::GasLimit(args) => gas_limit::run(args, config).await?,
        DappWeb3Command::Install(args) => install::run(args).await?,
        DappWeb3Command::CheckPort(args) => check_port::run(args, config).await?,
        DappWeb3Command::Artifact(args) => artifact::run(args)?,
        DappWeb3Command::BinPath(args) => bin_path::run(args)?,
    };

    Ok(())
}
