use alloy::eips::BlockNumberOrTag;
use alloy::providers::{Provider, RootProvider};
use alloy::rpc::types::BlockTransactionsKind;
use blockproof_merkle::B256;
use tracing::{debug, info};
use url::Url;

use crate::errors::{ClientError, ClientResult};

/// Read-only Ethereum JSON-RPC client scoped to what the host needs: the
/// ordered transaction-hash list of a single block.
///
/// The hash list comes back in the block's canonical transaction order, which
/// is exactly the leaf order the merkle core commits to.
pub struct BlockClient {
    provider: RootProvider,
}

impl BlockClient {
    /// Create a new client for the given HTTP RPC endpoint.
    pub fn new(rpc_url: &str) -> ClientResult<Self> {
        let url: Url = rpc_url.parse().map_err(|source| ClientError::InvalidRpcUrl {
            url: rpc_url.to_string(),
            source,
        })?;

        Ok(Self {
            provider: RootProvider::new_http(url),
        })
    }

    /// Fetch the transaction hashes of `block_number` with one bounded
    /// `eth_getBlockByNumber` call.
    ///
    /// Only hashes are requested, never full transaction bodies. A missing
    /// block and a block with zero transactions are distinct errors: the
    /// former usually means the block number is ahead of the chain head, the
    /// latter that there is nothing to build a tree over.
    pub async fn fetch_transaction_hashes(&self, block_number: u64) -> ClientResult<Vec<B256>> {
        debug!(block_number, "requesting block transaction hashes");

        let block = self
            .provider
            .get_block_by_number(
                BlockNumberOrTag::Number(block_number),
                BlockTransactionsKind::Hashes,
            )
            .await?
            .ok_or(ClientError::BlockNotFound(block_number))?;

        let hashes: Vec<B256> = block.transactions.hashes().collect();
        if hashes.is_empty() {
            return Err(ClientError::EmptyBlock(block_number));
        }

        info!(
            block_number,
            tx_count = hashes.len(),
            "fetched transaction hashes"
        );
        Ok(hashes)
    }
}
