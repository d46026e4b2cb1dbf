use std::path::PathBuf;

use blockproof_merkle::{MerkleTree, Orientation};

use crate::config::{parse_digest, BlockSnapshot, ProofFile};
use crate::error::{CliError, CliResult};

pub fn execute(snapshot_path: PathBuf, tx_hash: String, output: PathBuf) -> CliResult<()> {
    let snapshot = BlockSnapshot::load(&snapshot_path)?;
    let target = parse_digest(&tx_hash)?;

    println!(
        "🔍 Proving inclusion of {target} in block {}...",
        snapshot.block_number
    );

    let tree = MerkleTree::build(&snapshot.transactions)?;
    if tree.root() != snapshot.merkle_root {
        return Err(CliError::CorruptSnapshot(format!(
            "recomputed root {} does not match the recorded root {}",
            tree.root(),
            snapshot.merkle_root
        )));
    }

    let Some(proof) = tree.proof_for_leaf(&target)? else {
        println!("❌ The provided transaction hash is not part of the merkle tree.");
        println!("   No inclusion claim can be made; nothing was written.");
        return Ok(());
    };

    println!("🌳 Merkle root: {}", tree.root());
    println!("🧾 Proof ({} steps):", proof.len());
    for (i, step) in proof.steps().iter().enumerate() {
        let side = match step.orientation {
            Orientation::Left => "left sibling",
            Orientation::Right => "right sibling",
        };
        println!("   {}. {} ({side})", i + 1, step.sibling);
    }

    let proof_file = ProofFile {
        block_number: snapshot.block_number,
        tx_hash: target,
        merkle_root: tree.root(),
        proof,
    };
    proof_file.save(&output)?;
    println!("📄 Proof written to {}", output.display());

    Ok(())
}
