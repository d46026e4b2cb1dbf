use std::path::PathBuf;

use blockproof_client::VerificationOutcome;

use crate::config::{parse_digest, ProofFile};
use crate::error::CliResult;

pub fn execute(proof_path: PathBuf, tx_hash: Option<String>, root: Option<String>) -> CliResult<()> {
    let proof_file = ProofFile::load(&proof_path)?;

    // Explicit arguments override what the proof file recorded, so a proof
    // can be checked against a root obtained from an independent source.
    let leaf = match tx_hash {
        Some(input) => parse_digest(&input)?,
        None => proof_file.tx_hash,
    };
    let root = match root {
        Some(input) => parse_digest(&input)?,
        None => proof_file.merkle_root,
    };

    println!("🔍 Verifying inclusion of {leaf}");
    println!("   against merkle root {root}");

    let outcome = VerificationOutcome::evaluate(&leaf, &proof_file.proof, &root);
    if outcome.verified {
        println!("✅ Valid: {outcome}");
    } else {
        println!("❌ Invalid: {outcome}");
    }

    Ok(())
}
