use crate::cli::DappWeb3Config;
use crate::gas::GasAdvisor;
use crate::providers::Provider;
use clap::Args;

#[derive(Args)]
pub(crate) struct GasLimit {
    #[clap(short, long, name = "ESTIMATED_GAS")]
    pub estimate: u64,
    #[clap(short, long, name = "GAS_FUZZ_FACTOR")]
    pub fuzz_factor: Option<f64>,
}

pub(crate) async fn run(args: GasLimit, config: DappWeb3Config) -> eyre::Result<()> {
    let provider = Provider::try_from(format!(
        "http://{host}:{port}",
        host = config.host,
        port = config.port
    ))?
    .interval(std::time::Duration::from_millis(10));
    let gas_limit = provider
        .recommended_gas_limit(args.estimate, args.fuzz_factor)
        .await?;
    log::info!("{gas_limit}");
    Ok(())
}
