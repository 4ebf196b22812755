use async_trait::async_trait;
use ethers::{
    providers::{JsonRpcClient, Middleware, Provider},
    types::{BlockNumber, U256},
};

pub mod errors;
use errors::GasError;

/// Safety multiplier applied to gas estimates so transactions are not
/// submitted right at the estimated cost.
pub const DEFAULT_GAS_FUZZ_FACTOR: f64 = 1.5;
/// Fraction of the latest block gas limit treated as the usable ceiling.
pub const LAST_BLOCK_GAS_LIMIT_FACTOR: f64 = 0.95;

/// Sizes transaction gas limits against the chain's current block gas limit.
#[async_trait]
pub trait GasAdvisor {
    /// Returns the recommended gas limit for a transaction expected to
    /// consume `estimated_gas`.
    ///
    /// The estimate is buffered by `fuzz_factor` (1.5 when `None`) and
    /// clamped to 95% of the latest block's gas limit, read from the node
    /// on every call. An estimate already above that ceiling is returned
    /// unchanged, never lowered.
    async fn recommended_gas_limit(
        &self,
        estimated_gas: u64,
        fuzz_factor: Option<f64>,
    ) -> Result<u64, GasError>;
}

#[async_trait]
impl<P: JsonRpcClient> GasAdvisor for Provider<P> {
    async fn recommended_gas_limit(
        &self,
        estimated_gas: u64,
        fuzz_factor: Option<f64>,
    ) -> Result<u64, GasError> {
        let fuzz_factor = fuzz_factor.unwrap_or(DEFAULT_GAS_FUZZ_FACTOR);
        if !fuzz_factor.is_finite() || fuzz_factor <= 0.0 {
            return Err(GasError::InvalidFuzzFactor(fuzz_factor));
        }

        let latest_block = self
            .get_block(BlockNumber::Latest)
            .await?
            .ok_or(GasError::MissingLatestBlock)?;
        if latest_block.gas_limit > U256::from(u64::MAX) {
            return Err(GasError::GasLimitOverflow(latest_block.gas_limit));
        }
        let block_gas_limit = latest_block.gas_limit.as_u64();

        // Both limits are rounded before any comparison; the branch taken
        // depends on it.
        let upper_gas_limit = (block_gas_limit as f64 * LAST_BLOCK_GAS_LIMIT_FACTOR).round() as u64;
        if estimated_gas > upper_gas_limit {
            return Ok(estimated_gas);
        }

        let buffered_gas_limit = (estimated_gas as f64 * fuzz_factor).round() as u64;
        if buffered_gas_limit < upper_gas_limit {
            Ok(buffered_gas_limit)
        } else {
            Ok(upper_gas_limit)
        }
    }
}
