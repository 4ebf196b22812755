#[tokio::main]
async fn main() {
    env_logger::builder()
        .filter_module("reqwest::connect", log::LevelFilter::Off)
        .filter_level(log::LevelFilter::Info)
        .init();

    dapp_web3_rs::cli::start().await.unwrap();
}
