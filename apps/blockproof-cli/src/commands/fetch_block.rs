use std::path::PathBuf;

use blockproof_client::BlockClient;
use blockproof_merkle::MerkleTree;

use crate::config::BlockSnapshot;
use crate::error::CliResult;

pub async fn execute(block: u64, rpc_url: String, output: PathBuf) -> CliResult<()> {
    println!("🔍 Fetching transactions for block {block}...");

    let client = BlockClient::new(&rpc_url)?;
    let transactions = client.fetch_transaction_hashes(block).await?;
    println!("✅ Fetched {} transaction hashes", transactions.len());

    let tree = MerkleTree::build(&transactions)?;
    println!("🌳 Merkle root: {}", tree.root());

    let snapshot = BlockSnapshot {
        block_number: block,
        merkle_root: tree.root(),
        transactions,
    };
    snapshot.save(&output)?;
    println!("📄 Snapshot written to {}", output.display());

    Ok(())
}
