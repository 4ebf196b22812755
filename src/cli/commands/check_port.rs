use crate::cli::DappWeb3Config;
use crate::net;
use clap::Args;
use std::time::Duration;

#[derive(Args)]
pub(crate) struct CheckPort {
    #[clap(name = "PORT")]
    pub port: u16,
    #[clap(long, name = "TIMEOUT_MS")]
    pub timeout_ms: Option<u64>,
}

pub(crate) async fn run(args: CheckPort, config: DappWeb3Config) -> eyre::Result<()> {
    let timeout = args.timeout_ms.map(Duration::from_millis);
    if net::is_port_taken(&config.host, args.port, timeout).await {
        log::info!("Port {port} on {host} is taken", port = args.port, host = config.host);
    } else {
        log::info!("Port {port} on {host} is free", port = args.port, host = config.host);
    }
    Ok(())
}
