use ethers::{providers::ProviderError, types::U256};

#[derive(thiserror::Error, Debug)]
pub enum GasError {
    #[error("Provider error: {0}")]
    ProviderError(#[from] ProviderError),
    #[error("Gas fuzz factor must be a positive finite number, got {0}")]
    InvalidFuzzFactor(f64),
    #[error("Node returned no latest block")]
    MissingLatestBlock,
    #[error("Latest block gas limit {0} does not fit in a u64")]
    GasLimitOverflow(U256),
}
